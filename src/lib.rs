//! Detective Quest: a mansion-exploration mystery for the terminal
//!
//! Explore a fixed mansion, collect the clues hidden in its rooms,
//! connect them to suspects, and make your accusation.
//!
//! # Game Mechanics
//!
//! - **Exploration**: The mansion is a binary tree of rooms; every step
//!   goes left, right, or out to the final judgment
//! - **Clues**: Each room hides at most one clue, collected on entry
//! - **Judgment**: Your accusation is sustained only when at least two
//!   collected clues point at the accused
//!
//! # Architecture
//!
//! - `game` - Investigation state machine, verdict logic, case content
//! - `tui` - Terminal user interface with ratatui
//! - `data` - The mansion map, the clue index, the suspect lookup table

pub mod game;
pub mod tui;
pub mod data;

pub use game::Investigation;
pub use data::*;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Case file not found: {0}")]
    CaseNotFound(String),
}
