//! Classic snake in the terminal, with wrap-around edges.
//!
//! This library provides:
//! - Core game logic (game module): snake, food, fixed-step session
//! - Screen flow (screens module): menu / how-to / gameplay state machine
//! - Input mapping (input module): key events to logical commands
//! - TUI rendering (render module)
//! - The terminal event loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod screens;
