//! Snack Math: feed snacks to Munchy and learn subtraction.

pub mod logic;
pub mod types;

pub use types::SnackMathGame;
