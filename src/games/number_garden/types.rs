//! Number Garden data structures.
//!
//! Alternating counting and addition rounds: plant exactly N seeds in the
//! garden, then fill two pots to match an addition sentence.

/// Garden grid: 12 holes laid out 4 wide.
pub const GRID_SIZE: usize = 12;
pub const GRID_COLS: usize = 4;

/// Pots clamp to this many seeds.
pub const POT_MAX: u32 = 10;

/// Stars shown in the header cap at three.
pub const STAR_CAP: u32 = 3;

/// Counting targets start in 2..=9; later rounds cap at 10.
pub const TARGET_CAP: u32 = 10;

/// How long the celebration banner stays up when a goal is met.
pub const CELEBRATION_MS: f64 = 900.0;

/// Which half of a round is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenMode {
    /// Plant exactly `target` seeds.
    Count,
    /// Fill the left pot to `a` and the right pot to `b`.
    Add,
}

/// Pot selector for the addition mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotSide {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct NumberGardenGame {
    pub mode: GardenMode,
    pub level: u32,
    pub stars: u32,

    // Counting round
    pub holes: [bool; GRID_SIZE],
    pub target: u32,

    // Addition round
    pub a: u32,
    pub b: u32,
    pub pot_left: u32,
    pub pot_right: u32,

    // UI state
    pub cursor: usize,
    pub selected_pot: PotSide,
    pub celebration_ms: f64,
}

impl NumberGardenGame {
    pub fn new<R: rand::Rng>(rng: &mut R) -> Self {
        Self {
            mode: GardenMode::Count,
            level: 1,
            stars: 0,
            holes: [false; GRID_SIZE],
            target: rng.gen_range(2..=9),
            a: rng.gen_range(1..=5),
            b: rng.gen_range(1..=5),
            pot_left: 0,
            pot_right: 0,
            cursor: 0,
            selected_pot: PotSide::Left,
            celebration_ms: 0.0,
        }
    }

    /// Seeds currently planted in the garden.
    pub fn planted(&self) -> u32 {
        self.holes.iter().filter(|h| **h).count() as u32
    }

    pub fn counting_done(&self) -> bool {
        self.mode == GardenMode::Count && self.planted() == self.target
    }

    pub fn addition_done(&self) -> bool {
        self.mode == GardenMode::Add && self.pot_left == self.a && self.pot_right == self.b
    }

    /// Whether the current round goal is met (enables "Next").
    pub fn goal_met(&self) -> bool {
        self.counting_done() || self.addition_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = rand::thread_rng();
        let game = NumberGardenGame::new(&mut rng);
        assert_eq!(game.mode, GardenMode::Count);
        assert_eq!(game.level, 1);
        assert_eq!(game.stars, 0);
        assert_eq!(game.planted(), 0);
        assert!((2..=9).contains(&game.target));
        assert!((1..=5).contains(&game.a));
        assert!((1..=5).contains(&game.b));
        assert_eq!(game.pot_left, 0);
        assert_eq!(game.pot_right, 0);
    }

    #[test]
    fn test_planted_counts_true_holes() {
        let mut rng = rand::thread_rng();
        let mut game = NumberGardenGame::new(&mut rng);
        game.holes[0] = true;
        game.holes[5] = true;
        game.holes[11] = true;
        assert_eq!(game.planted(), 3);
    }

    #[test]
    fn test_goal_met_per_mode() {
        let mut rng = rand::thread_rng();
        let mut game = NumberGardenGame::new(&mut rng);
        game.target = 2;
        game.holes[0] = true;
        game.holes[1] = true;
        assert!(game.counting_done());
        assert!(game.goal_met());

        game.mode = GardenMode::Add;
        assert!(!game.counting_done());
        game.pot_left = game.a;
        game.pot_right = game.b;
        assert!(game.addition_done());
        assert!(game.goal_met());
    }
}
