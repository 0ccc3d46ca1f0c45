//! Shape Sort Dash: drag falling shapes into matching outlines before they
//! hit the ground.

pub mod logic;
pub mod types;

pub use logic::ShapeSortEvent;
pub use types::{Arena, Phase, Piece, PointerId, PxRect, ShapeKind, ShapeSortGame, Slot};
