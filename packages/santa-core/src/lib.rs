#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::DbProfile;
pub use db::txn::with_txn;
pub use domain::derangement::build_derangement;
pub use domain::registration::{normalize_input, RegistrationStep};
pub use errors::domain::DomainError;
pub use infra::db::{connect_db, run_migrations};
pub use repos::game_state::GameStatus;
pub use repos::players::Player;
pub use services::game_flow::GameFlowService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
