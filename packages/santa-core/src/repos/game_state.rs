//! Game-status repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::game_state_sea as game_state_adapter;
use crate::entities::game_state;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game status domain model (the singleton row, minus its fixed id).
///
/// Invariant: `pairs_assigned` implies `!registration_open` — a draw closes
/// registration in the same transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub registration_open: bool,
    pub pairs_assigned: bool,
}

impl From<game_state::Model> for GameStatus {
    fn from(model: game_state::Model) -> Self {
        Self {
            registration_open: model.registration_open,
            pairs_assigned: model.pairs_assigned,
        }
    }
}

/// Idempotently ensure the singleton row exists (registration open, no pairs).
///
/// The init migration already seeds the row; this is the belt-and-braces
/// entry point for bootstrap code and tests.
pub async fn init<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<GameStatus, DomainError> {
    let model = game_state_adapter::ensure_row(conn).await?;
    Ok(GameStatus::from(model))
}

pub async fn get<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<GameStatus, DomainError> {
    let model = game_state_adapter::find(conn).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::GameState, "game_state row missing")
    })?;
    Ok(GameStatus::from(model))
}

pub async fn set_registration_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    open: bool,
) -> Result<(), DomainError> {
    let rows = game_state_adapter::set_registration_open(conn, open).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::GameState,
            "game_state row missing",
        ));
    }
    Ok(())
}

pub async fn set_pairs_assigned<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    assigned: bool,
) -> Result<(), DomainError> {
    let rows = game_state_adapter::set_pairs_assigned(conn, assigned).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::GameState,
            "game_state row missing",
        ));
    }
    Ok(())
}
