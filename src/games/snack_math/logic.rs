//! Game logic for Snack Math.

use super::types::{SnackMathGame, CELEBRATION_MS, MAX_HAVE, SNACK_GLYPHS, STARS_PER_LEVEL};
use rand::Rng;

/// Feed one snack to Munchy. Rejected once the target is reached or if that
/// snack is already gone; eaten snacks stay eaten.
pub fn eat_one(game: &mut SnackMathGame, idx: usize) {
    if idx >= game.items.len() || game.items[idx] {
        return;
    }
    if game.eaten() >= game.eat {
        return;
    }
    game.items[idx] = true;
    if game.solved() {
        game.celebration_ms = CELEBRATION_MS;
    }
}

/// Deal a fresh problem sized to the current level.
pub fn new_problem<R: Rng>(game: &mut SnackMathGame, rng: &mut R) {
    let max_have = (8 + game.level).min(MAX_HAVE);
    game.have = rng.gen_range(6..=max_have);
    game.eat = rng.gen_range(1..=2.max(5.min(game.have - 1)));
    game.items = vec![false; game.have as usize];
    game.cursor = 0;
}

/// Move on after a solved problem: one star, a level every third star, and a
/// fresh problem. Does nothing while unsolved.
pub fn next_round<R: Rng>(game: &mut SnackMathGame, rng: &mut R) {
    if !game.solved() {
        return;
    }
    game.stars += 1;
    if game.stars % STARS_PER_LEVEL == 0 {
        game.level += 1;
    }
    new_problem(game, rng);
}

/// Back to the starting picnic.
pub fn restart(game: &mut SnackMathGame) {
    game.level = 1;
    game.stars = 0;
    game.have = 10;
    game.eat = 3;
    game.items = vec![false; 10];
    game.snack_index = 0;
    game.cursor = 0;
    game.celebration_ms = 0.0;
}

/// Cycle through the snack glyphs.
pub fn cycle_snack(game: &mut SnackMathGame) {
    game.snack_index = (game.snack_index + 1) % SNACK_GLYPHS.len();
}

/// Drain the cosmetic celebration timer.
pub fn tick(game: &mut SnackMathGame, dt_ms: f64) {
    if game.celebration_ms > 0.0 {
        game.celebration_ms = (game.celebration_ms - dt_ms).max(0.0);
    }
}

/// Move the plate cursor on the 4-wide grid.
pub fn move_cursor(game: &mut SnackMathGame, dx: i32, dy: i32) {
    use super::types::PLATE_COLS;
    let cols = PLATE_COLS as i32;
    let len = game.items.len() as i32;
    if len == 0 {
        return;
    }
    let rows = (len + cols - 1) / cols;
    let col = (game.cursor as i32 % cols + dx).clamp(0, cols - 1);
    let row = (game.cursor as i32 / cols + dy).clamp(0, rows - 1);
    game.cursor = (row * cols + col).min(len - 1) as usize;
}
