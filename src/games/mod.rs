//! The arcade's playable games: Shape Sort Dash, Number Garden, Snack Math.

pub mod number_garden;
pub mod shape_sort;
pub mod snack_math;

use number_garden::NumberGardenGame;
use shape_sort::{Arena, ShapeSortGame};
use snack_math::SnackMathGame;

/// The game currently on screen. Only one can be active at a time.
///
/// Shape Sort carries its [`Arena`] alongside the game state: the arena is
/// geometry owned by the layout (the scene rewrites it every frame) and the
/// game core only reads it.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    ShapeSort { game: ShapeSortGame, arena: Arena },
    NumberGarden(NumberGardenGame),
    SnackMath(SnackMathGame),
}

impl ActiveGame {
    /// Catalog id of the active game.
    pub fn id(&self) -> &'static str {
        match self {
            ActiveGame::ShapeSort { .. } => "shape-sort-dash",
            ActiveGame::NumberGarden(_) => "number-garden",
            ActiveGame::SnackMath(_) => "snack-math",
        }
    }
}
