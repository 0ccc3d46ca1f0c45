//! Snack Math data structures.
//!
//! "We have N snacks. Feed M to Munchy - how many left?" Subtraction by
//! physically removing snacks from a picnic plate.

/// Plate grid is 4 snacks wide.
pub const PLATE_COLS: usize = 4;

/// Level goes up every third star.
pub const STARS_PER_LEVEL: u32 = 3;

/// The plate never holds more than this many snacks.
pub const MAX_HAVE: u32 = 15;

/// How long the celebration banner stays up after a solved problem.
pub const CELEBRATION_MS: f64 = 900.0;

/// Snack glyphs the child can pick from.
pub const SNACK_GLYPHS: [&str; 5] = ["🍇", "🍪", "🫐", "🍓", "🥕"];

#[derive(Debug, Clone)]
pub struct SnackMathGame {
    pub level: u32,
    pub stars: u32,

    /// Snacks on the plate this round.
    pub have: u32,
    /// How many Munchy wants to eat.
    pub eat: u32,
    /// One flag per snack; true = eaten.
    pub items: Vec<bool>,

    /// Index into `SNACK_GLYPHS`.
    pub snack_index: usize,
    pub cursor: usize,
    pub celebration_ms: f64,
}

impl SnackMathGame {
    pub fn new() -> Self {
        Self {
            level: 1,
            stars: 0,
            have: 10,
            eat: 3,
            items: vec![false; 10],
            snack_index: 0,
            cursor: 0,
            celebration_ms: 0.0,
        }
    }

    pub fn eaten(&self) -> u32 {
        self.items.iter().filter(|e| **e).count() as u32
    }

    /// The answer the child is building: `have - min(eaten, eat)`.
    pub fn remaining(&self) -> u32 {
        self.have - self.eaten().min(self.eat)
    }

    pub fn solved(&self) -> bool {
        self.eaten() == self.eat
    }

    pub fn snack_glyph(&self) -> &'static str {
        SNACK_GLYPHS[self.snack_index % SNACK_GLYPHS.len()]
    }
}

impl Default for SnackMathGame {
    fn default() -> Self {
        Self::new()
    }
}
