//! Repository functions for the domain layer.

pub mod game_state;
pub mod players;
