//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. The grid is a fixed torus: moving past one edge re-enters
//! from the opposite edge.

pub mod command;
pub mod food;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use command::{Command, Direction};
pub use food::Food;
pub use session::{Difficulty, GameSession};
pub use snake::{Position, Snake};

/// Number of grid columns.
pub const GRID_COLS: i32 = 32;
/// Number of grid rows.
pub const GRID_ROWS: i32 = 24;
