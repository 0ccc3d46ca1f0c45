//! Shape Sort Dash data structures.
//!
//! A real-time arena game: shapes fall from the top and must be dragged into
//! the matching outline before they reach the ground. All geometry is in
//! arena-local pixels and milliseconds; the terminal scene scales pixels to
//! cells for display only.

use std::collections::HashMap;

/// Side of a falling piece's square bounding box, in pixels.
pub const PIECE_SIZE: f64 = 72.0;

/// Pieces spawn this far above the visible top edge.
pub const SPAWN_Y: f64 = -80.0;

/// Horizontal margin kept free of spawns on both arena edges.
pub const SPAWN_MARGIN: f64 = 10.0;

/// Ground band height at the bottom of the arena.
pub const GROUND_MARGIN: f64 = 16.0;

/// Spawn pacing: `max(700 - 60 * level, 280)` ms between spawns.
pub const BASE_SPAWN_INTERVAL_MS: f64 = 700.0;
pub const SPAWN_INTERVAL_DECAY_MS: f64 = 60.0;
pub const MIN_SPAWN_INTERVAL_MS: f64 = 280.0;

/// Fall speed: `0.06 + 0.01 * level` px per ms.
pub const BASE_FALL_SPEED: f64 = 0.06;
pub const FALL_SPEED_GROWTH: f64 = 0.01;

pub const STARTING_LIVES: u32 = 3;

/// Every this-many stars the level goes up.
pub const STARS_PER_LEVEL: u32 = 5;

/// How long the celebration banner stays up after a level-up.
pub const CELEBRATION_MS: f64 = 800.0;

/// Levels at which an extra duplicate slot appears.
pub const EXTRA_SLOT_LEVELS: [u32; 2] = [4, 6];

/// The four shape kinds children sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
        }
    }
}

/// An input source that can hold at most one piece at a time. Mouse buttons
/// map to distinct sources, so two buttons may drag two pieces concurrently.
pub type PointerId = u8;

/// Axis-aligned rectangle in arena-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PxRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// AABB overlap: true when neither axis fully separates the rectangles.
    pub fn overlaps(&self, other: &PxRect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// A falling, drag-able shape.
#[derive(Debug, Clone)]
pub struct Piece {
    pub id: u32,
    pub kind: ShapeKind,
    /// Top-left corner in arena-local pixels.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in px/ms. Not applied while held.
    pub vy: f64,
    /// The input source holding this piece, if any. While held the position
    /// is driven solely by pointer moves.
    pub held_by: Option<PointerId>,
}

impl Piece {
    pub fn rect(&self) -> PxRect {
        PxRect::new(self.x, self.y, PIECE_SIZE, PIECE_SIZE)
    }
}

/// A fixed target region for one shape kind.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub kind: ShapeKind,
    pub rect: PxRect,
}

/// Passive geometry supplied by the surrounding layout each frame. The game
/// core only reads it; `bounds` stays `None` until the layout has measured
/// the arena, which suppresses spawn/physics for that tick.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    /// (width, height) in pixels, when measured.
    pub bounds: Option<(f64, f64)>,
    pub slots: Vec<Slot>,
}

impl Arena {
    /// The collision reference rectangle for a kind. With duplicate slots the
    /// last registered rect wins.
    pub fn slot_rect(&self, kind: ShapeKind) -> Option<PxRect> {
        self.slots
            .iter()
            .filter(|s| s.kind == kind)
            .last()
            .map(|s| s.rect)
    }
}

/// An in-progress drag: which piece a source holds and the grab offset
/// between the pointer and the piece origin.
#[derive(Debug, Clone, Copy)]
pub struct DragHold {
    pub piece_id: u32,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Game phase. `GameOver` behaves like `Paused` for the scheduler but is
/// terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// Full game state for Shape Sort Dash.
#[derive(Debug, Clone)]
pub struct ShapeSortGame {
    pub level: u32,
    pub score: u32,
    /// Consecutive-match counter; every `STARS_PER_LEVEL` triggers a level-up.
    pub stars: u32,
    pub lives: u32,
    pub phase: Phase,

    /// Live falling pieces, in spawn order (later = drawn on top).
    pub pieces: Vec<Piece>,
    /// Active drag transactions keyed by input source.
    pub holds: HashMap<PointerId, DragHold>,
    /// Which slots the layout should present, one kind per slot. Duplicates
    /// appear from level 4.
    pub slot_plan: Vec<ShapeKind>,

    /// Next piece id; never reset, ids stay unique for the process lifetime.
    pub next_piece_id: u32,
    /// Time since the last spawn, in ms.
    pub since_spawn_ms: f64,
    /// Remaining celebration banner time, in ms. Cosmetic.
    pub celebration_ms: f64,
}

impl ShapeSortGame {
    pub fn new() -> Self {
        Self {
            level: 1,
            score: 0,
            stars: 0,
            lives: STARTING_LIVES,
            phase: Phase::Playing,
            pieces: Vec::new(),
            holds: HashMap::new(),
            slot_plan: ShapeKind::ALL.to_vec(),
            next_piece_id: 1,
            since_spawn_ms: 0.0,
            celebration_ms: 0.0,
        }
    }

    pub fn piece(&self, id: u32) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn piece_mut(&mut self, id: u32) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }
}

impl Default for ShapeSortGame {
    fn default() -> Self {
        Self::new()
    }
}
