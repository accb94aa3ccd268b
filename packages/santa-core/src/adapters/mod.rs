//! SeaORM adapters for the participant and game-status stores.

pub mod game_state_sea;
pub mod players_sea;
