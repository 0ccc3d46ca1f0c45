//! Jelly Arcade - Terminal Learning Arcade Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod games;
pub mod hub;
pub mod ui;

pub use constants::FRAME_INTERVAL_MS;
