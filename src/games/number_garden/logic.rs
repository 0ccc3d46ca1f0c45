//! Game logic for Number Garden.

use super::types::{
    GardenMode, NumberGardenGame, PotSide, CELEBRATION_MS, GRID_COLS, GRID_SIZE, POT_MAX, STAR_CAP,
    TARGET_CAP,
};
use rand::Rng;

/// Toggle a garden hole. Planting past the target is rejected; digging a
/// seed back up is always allowed.
pub fn tap_hole(game: &mut NumberGardenGame, idx: usize) {
    if game.mode != GardenMode::Count || idx >= GRID_SIZE {
        return;
    }
    if !game.holes[idx] && game.planted() >= game.target {
        return;
    }
    game.holes[idx] = !game.holes[idx];
    if game.counting_done() {
        game.celebration_ms = CELEBRATION_MS;
    }
}

/// Add or remove one seed from a pot, clamped to `0..=POT_MAX`.
pub fn adjust_pot(game: &mut NumberGardenGame, side: PotSide, delta: i32) {
    if game.mode != GardenMode::Add {
        return;
    }
    let pot = match side {
        PotSide::Left => &mut game.pot_left,
        PotSide::Right => &mut game.pot_right,
    };
    *pot = (*pot as i32 + delta).clamp(0, POT_MAX as i32) as u32;
    if game.addition_done() {
        game.celebration_ms = CELEBRATION_MS;
    }
}

/// Advance to the other half of the round, or to the next round once the
/// addition is solved. Does nothing until the current goal is met.
pub fn next_round<R: Rng>(game: &mut NumberGardenGame, rng: &mut R) {
    if game.counting_done() {
        game.mode = GardenMode::Add;
        game.a = rng.gen_range(1..=5);
        game.b = rng.gen_range(1..=5);
        game.pot_left = 0;
        game.pot_right = 0;
        game.selected_pot = PotSide::Left;
    } else if game.addition_done() {
        game.stars = (game.stars + 1).min(STAR_CAP);
        // The new target reads the level before the bump.
        let next_target = (rng.gen_range(2..=6) + game.level / 2).min(TARGET_CAP);
        game.level += 1;
        game.mode = GardenMode::Count;
        game.holes = [false; GRID_SIZE];
        game.target = next_target;
        game.cursor = 0;
    }
}

/// Back to level 1 with a fresh counting round.
pub fn restart<R: Rng>(game: &mut NumberGardenGame, rng: &mut R) {
    game.level = 1;
    game.stars = 0;
    game.mode = GardenMode::Count;
    game.holes = [false; GRID_SIZE];
    game.target = rng.gen_range(2..=9);
    game.a = rng.gen_range(1..=5);
    game.b = rng.gen_range(1..=5);
    game.pot_left = 0;
    game.pot_right = 0;
    game.cursor = 0;
    game.selected_pot = PotSide::Left;
    game.celebration_ms = 0.0;
}

/// Drain the cosmetic celebration timer.
pub fn tick(game: &mut NumberGardenGame, dt_ms: f64) {
    if game.celebration_ms > 0.0 {
        game.celebration_ms = (game.celebration_ms - dt_ms).max(0.0);
    }
}

/// Move the garden cursor on the 4-wide grid.
pub fn move_cursor(game: &mut NumberGardenGame, dx: i32, dy: i32) {
    let cols = GRID_COLS as i32;
    let rows = (GRID_SIZE / GRID_COLS) as i32;
    let col = (game.cursor as i32 % cols + dx).clamp(0, cols - 1);
    let row = (game.cursor as i32 / cols + dy).clamp(0, rows - 1);
    game.cursor = (row * cols + col) as usize;
}
