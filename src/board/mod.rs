//! Gem board: grid storage, random draws, gravity, and refill.

pub mod logic;
pub mod types;

pub use logic::{apply_gravity, fill_empty_spaces, generate, random_gem};
pub use types::{Board, BoardError, Gem, Position};
