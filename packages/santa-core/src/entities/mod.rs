pub mod game_state;
pub mod players;

pub use game_state::Entity as GameStateEntity;
pub use players::Entity as Players;
