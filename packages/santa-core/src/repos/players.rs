//! Participant repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::domain::registration::RegistrationStep;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Participant domain model
///
/// Converted from the database model (players::Model) when loaded through
/// repos functions. `chat_id` is the identifier the chat transport knows the
/// participant by; `id` is the stable internal key assignments refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub chat_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub wish: Option<String>,
    pub recipient_id: Option<i64>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Player {
    /// How far this player has progressed through registration.
    pub fn registration_step(&self) -> RegistrationStep {
        RegistrationStep::from_fields(self.full_name.as_deref(), self.wish.as_deref())
    }

    /// Ready players have both a name and a wish and take part in the draw.
    pub fn is_ready(&self) -> bool {
        self.registration_step() == RegistrationStep::Ready
    }
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            chat_id: model.chat_id,
            username: model.username,
            full_name: model.full_name,
            wish: model.wish,
            recipient_id: model.recipient_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

// Free functions (generic) mirroring the store contract

/// Fetch the player for `chat_id`, creating a blank row on first sight.
///
/// Returns the player plus whether this call created it.
pub async fn get_or_create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    username: Option<&str>,
) -> Result<(Player, bool), DomainError> {
    let (model, created) =
        players_adapter::ensure_by_chat_id(conn, chat_id, username.map(str::to_owned)).await?;
    Ok((Player::from(model), created))
}

pub async fn find_by_chat_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_chat_id(conn, chat_id).await?;
    Ok(player.map(Player::from))
}

pub async fn require_by_chat_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
) -> Result<Player, DomainError> {
    find_by_chat_id(conn, chat_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("no player for chat id {chat_id}"))
    })
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, id).await?;
    Ok(player.map(Player::from))
}

pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, format!("no player with id {id}")))
}

pub async fn set_full_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    full_name: &str,
) -> Result<(), DomainError> {
    let rows = players_adapter::set_full_name(conn, chat_id, full_name).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player for chat id {chat_id}"),
        ));
    }
    Ok(())
}

pub async fn set_wish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    wish: &str,
) -> Result<(), DomainError> {
    let rows = players_adapter::set_wish(conn, chat_id, wish).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player for chat id {chat_id}"),
        ));
    }
    Ok(())
}

/// Point `santa_id` at `recipient_id` (or clear the assignment with None).
pub async fn set_recipient<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    santa_id: i64,
    recipient_id: Option<i64>,
) -> Result<(), DomainError> {
    let rows = players_adapter::set_recipient(conn, santa_id, recipient_id).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player with id {santa_id}"),
        ));
    }
    Ok(())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::list_all(conn).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

pub async fn list_ready<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::list_ready(conn).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

/// Clear name, wish, and assignment on every row; rows themselves survive.
pub async fn clear_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, DomainError> {
    Ok(players_adapter::clear_registration(conn).await?)
}

/// Remove every player row.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(players_adapter::delete_all(conn).await?)
}
