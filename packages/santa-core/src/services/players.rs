//! Registration flow: enrollment and the two registration steps.
//!
//! All three functions gate on `registration_open`; failed input validation
//! never changes stored state, so the chat layer can simply re-prompt.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::registration::normalize_input;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::game_state::{self, GameStatus};
use crate::repos::players::{self, Player};

/// Result of a player entering (or re-entering) the game.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollOutcome {
    pub player: Player,
    /// Whether this call created the player row.
    pub created: bool,
    pub status: GameStatus,
}

/// A player enters the game.
///
/// While registration is open this creates the row on first sight and
/// otherwise returns the existing one, so the chat layer can prompt for
/// whatever step is still missing. While closed, an already-known player is
/// returned read-only (they may still query their assignment after the
/// draw); an unknown chat id is rejected and no row is created.
pub async fn ensure_enrolled<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    username: Option<&str>,
) -> Result<EnrollOutcome, DomainError> {
    let status = game_state::get(conn).await?;

    if status.registration_open {
        let (player, created) = players::get_or_create(conn, chat_id, username).await?;
        if created {
            info!(player_id = player.id, "new player enrolled");
        }
        return Ok(EnrollOutcome {
            player,
            created,
            status,
        });
    }

    match players::find_by_chat_id(conn, chat_id).await? {
        Some(player) => Ok(EnrollOutcome {
            player,
            created: false,
            status,
        }),
        None => Err(DomainError::validation(
            ValidationKind::RegistrationClosed,
            "registration is closed for this round",
        )),
    }
}

/// Record the player's display name (registration step 1).
pub async fn submit_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    raw: &str,
) -> Result<Player, DomainError> {
    let status = game_state::get(conn).await?;
    if !status.registration_open {
        return Err(DomainError::validation(
            ValidationKind::RegistrationClosed,
            "registration is closed for this round",
        ));
    }

    let name = normalize_input(raw)?;
    players::set_full_name(conn, chat_id, &name).await?;

    let player = players::require_by_chat_id(conn, chat_id).await?;
    debug!(player_id = player.id, "display name recorded");
    Ok(player)
}

/// Record the player's gift wish (registration step 2).
///
/// Requires the name from step 1 to be present already; READY is only
/// reachable through NAME_SET.
pub async fn submit_wish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    chat_id: i64,
    raw: &str,
) -> Result<Player, DomainError> {
    let status = game_state::get(conn).await?;
    if !status.registration_open {
        return Err(DomainError::validation(
            ValidationKind::RegistrationClosed,
            "registration is closed for this round",
        ));
    }

    let wish = normalize_input(raw)?;

    let player = players::require_by_chat_id(conn, chat_id).await?;
    if player.full_name.is_none() {
        return Err(DomainError::validation(
            ValidationKind::RegistrationIncomplete,
            "a display name must be set before a wish",
        ));
    }

    players::set_wish(conn, chat_id, &wish).await?;

    let player = players::require_by_chat_id(conn, chat_id).await?;
    debug!(player_id = player.id, "wish recorded");
    Ok(player)
}
