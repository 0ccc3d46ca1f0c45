//! Terminal rendering, one scene module per screen.

pub mod game_common;
pub mod hub_scene;
pub mod number_garden_scene;
pub mod shape_sort_scene;
pub mod snack_math_scene;
