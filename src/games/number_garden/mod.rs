//! Number Garden: plant seeds to count, fill pots to add.

pub mod logic;
pub mod types;

pub use types::{GardenMode, NumberGardenGame, PotSide};
