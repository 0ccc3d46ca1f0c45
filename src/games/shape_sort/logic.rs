//! Game logic for Shape Sort Dash.
//!
//! The host loop calls [`process_tick`] once per frame with the measured
//! elapsed time; pointer events arrive between ticks via the `pointer_*`
//! functions. Both mutate one explicit [`ShapeSortGame`] value and report
//! what happened through [`ShapeSortEvent`] vectors, so tests can drive the
//! whole game with synthetic time and input.

use super::types::{
    Arena, DragHold, Phase, Piece, PointerId, ShapeKind, ShapeSortGame, BASE_FALL_SPEED,
    BASE_SPAWN_INTERVAL_MS, CELEBRATION_MS, EXTRA_SLOT_LEVELS, FALL_SPEED_GROWTH, GROUND_MARGIN,
    MIN_SPAWN_INTERVAL_MS, PIECE_SIZE, SPAWN_INTERVAL_DECAY_MS, SPAWN_MARGIN, SPAWN_Y,
    STARS_PER_LEVEL, STARTING_LIVES,
};
use rand::Rng;

/// Things a tick or a drop resolution can report to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSortEvent {
    Spawned { id: u32 },
    /// Pieces reached the ground this tick; lives already debited.
    GroundLoss { count: u32 },
    /// A released piece landed on its matching outline.
    Match { kind: ShapeKind },
    /// A released piece missed; it is discarded without scoring.
    Miss { kind: ShapeKind },
    LevelUp { level: u32 },
    GameOver,
}

/// Milliseconds between spawns at a level. Non-increasing in level, floored
/// at `MIN_SPAWN_INTERVAL_MS`.
pub fn spawn_interval_ms(level: u32) -> f64 {
    (BASE_SPAWN_INTERVAL_MS - level as f64 * SPAWN_INTERVAL_DECAY_MS).max(MIN_SPAWN_INTERVAL_MS)
}

/// Fall speed in px/ms at a level. Non-decreasing in level.
pub fn fall_speed(level: u32) -> f64 {
    BASE_FALL_SPEED + level as f64 * FALL_SPEED_GROWTH
}

/// One scheduler tick: spawn, integrate, then ground-loss accounting.
///
/// Outside the `Playing` phase only the cosmetic celebration timer drains.
/// An unmeasured arena (`bounds == None`) suppresses spawn/physics for this
/// tick without being an error.
pub fn process_tick<R: Rng>(
    game: &mut ShapeSortGame,
    arena: &Arena,
    dt_ms: f64,
    rng: &mut R,
) -> Vec<ShapeSortEvent> {
    let mut events = Vec::new();

    if game.celebration_ms > 0.0 {
        game.celebration_ms = (game.celebration_ms - dt_ms).max(0.0);
    }

    if game.phase != Phase::Playing {
        return events;
    }
    let Some((width, height)) = arena.bounds else {
        return events;
    };

    game.since_spawn_ms += dt_ms;
    if game.since_spawn_ms > spawn_interval_ms(game.level) {
        game.since_spawn_ms = 0.0;
        let id = spawn_piece(game, width, rng);
        events.push(ShapeSortEvent::Spawned { id });
    }

    integrate(game, dt_ms);
    settle_ground(game, height, &mut events);

    events
}

/// Create one piece above the top edge: uniform random kind, uniform random
/// x clamped inside the margins, velocity from the current level.
pub fn spawn_piece<R: Rng>(game: &mut ShapeSortGame, arena_width: f64, rng: &mut R) -> u32 {
    let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    let max_x = (arena_width - PIECE_SIZE - SPAWN_MARGIN).max(SPAWN_MARGIN);
    let x = rng.gen_range(SPAWN_MARGIN..=max_x);

    let id = game.next_piece_id;
    game.next_piece_id += 1;
    game.pieces.push(Piece {
        id,
        kind,
        x,
        y: SPAWN_Y,
        vy: fall_speed(game.level),
        held_by: None,
    });
    id
}

/// Advance every free piece by `vy * dt`. Held pieces are position-driven by
/// pointer moves only.
pub fn integrate(game: &mut ShapeSortGame, dt_ms: f64) {
    for piece in &mut game.pieces {
        if piece.held_by.is_none() {
            piece.y += piece.vy * dt_ms;
        }
    }
}

/// Remove free pieces whose bottom edge reached the ground band and debit
/// lives once for the whole batch. Held pieces are exempt regardless of y.
pub fn settle_ground(game: &mut ShapeSortGame, arena_height: f64, events: &mut Vec<ShapeSortEvent>) {
    let ground_y = arena_height - GROUND_MARGIN;
    let before = game.pieces.len();
    game.pieces
        .retain(|p| p.held_by.is_some() || p.y + PIECE_SIZE < ground_y);
    let lost = (before - game.pieces.len()) as u32;

    if lost > 0 {
        game.lives = game.lives.saturating_sub(lost);
        events.push(ShapeSortEvent::GroundLoss { count: lost });
        if game.lives == 0 {
            game.phase = Phase::GameOver;
            events.push(ShapeSortEvent::GameOver);
        }
    }
}

/// Begin a drag transaction: `source` claims the piece and the grab offset
/// is recorded. No-op if the piece is already held or the source already
/// holds another piece.
pub fn pointer_down(game: &mut ShapeSortGame, piece_id: u32, source: PointerId, px: f64, py: f64) {
    if game.holds.contains_key(&source) {
        return;
    }
    let Some(piece) = game.piece_mut(piece_id) else {
        return;
    };
    if piece.held_by.is_some() {
        return;
    }
    piece.held_by = Some(source);
    let hold = DragHold {
        piece_id,
        offset_x: px - piece.x,
        offset_y: py - piece.y,
    };
    game.holds.insert(source, hold);
}

/// Move a held piece to `pointer - offset`. Only the holding source may move
/// it, and the position is deliberately not clamped to the arena.
pub fn pointer_move(game: &mut ShapeSortGame, piece_id: u32, source: PointerId, px: f64, py: f64) {
    let Some(hold) = game.holds.get(&source).copied() else {
        return;
    };
    if hold.piece_id != piece_id {
        return;
    }
    if let Some(piece) = game.piece_mut(piece_id) {
        piece.x = px - hold.offset_x;
        piece.y = py - hold.offset_y;
    }
}

/// End a drag transaction: release the hold and resolve the drop against the
/// arena's slot for the piece's kind. The piece is always removed; a miss is
/// simply discarded (the piece does not resume falling).
pub fn pointer_up<R: Rng>(
    game: &mut ShapeSortGame,
    arena: &Arena,
    piece_id: u32,
    source: PointerId,
    rng: &mut R,
) -> Vec<ShapeSortEvent> {
    let mut events = Vec::new();

    let Some(hold) = game.holds.get(&source).copied() else {
        return events;
    };
    if hold.piece_id != piece_id {
        return events;
    }
    game.holds.remove(&source);

    let Some(idx) = game.pieces.iter().position(|p| p.id == piece_id) else {
        return events;
    };
    let piece = game.pieces.remove(idx);

    let matched = arena
        .slot_rect(piece.kind)
        .map_or(false, |slot| piece.rect().overlaps(&slot));
    if matched {
        game.score += 1;
        game.stars += 1;
        events.push(ShapeSortEvent::Match { kind: piece.kind });
        if game.stars % STARS_PER_LEVEL == 0 {
            game.level += 1;
            game.celebration_ms = CELEBRATION_MS;
            rebuild_slot_plan(game, rng);
            events.push(ShapeSortEvent::LevelUp { level: game.level });
        }
    } else {
        events.push(ShapeSortEvent::Miss { kind: piece.kind });
    }

    events
}

/// One slot per kind, plus a duplicate slot of a random kind for each
/// threshold in `EXTRA_SLOT_LEVELS` the current level has reached.
pub fn rebuild_slot_plan<R: Rng>(game: &mut ShapeSortGame, rng: &mut R) {
    let mut plan = ShapeKind::ALL.to_vec();
    for threshold in EXTRA_SLOT_LEVELS {
        if game.level >= threshold {
            plan.push(ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]);
        }
    }
    game.slot_plan = plan;
}

/// Flip Playing/Paused. GameOver is terminal until restart.
pub fn pause_toggle(game: &mut ShapeSortGame) {
    game.phase = match game.phase {
        Phase::Playing => Phase::Paused,
        Phase::Paused => Phase::Playing,
        Phase::GameOver => Phase::GameOver,
    };
}

/// Synchronous full reset. Live pieces and any in-flight drag transactions
/// are discarded; the piece id counter keeps counting.
pub fn restart(game: &mut ShapeSortGame) {
    game.level = 1;
    game.score = 0;
    game.stars = 0;
    game.lives = STARTING_LIVES;
    game.phase = Phase::Playing;
    game.pieces.clear();
    game.holds.clear();
    game.slot_plan = ShapeKind::ALL.to_vec();
    game.since_spawn_ms = 0.0;
    game.celebration_ms = 0.0;
}
