//! Game lifecycle orchestration - bridges the stores and the derangement engine.
//!
//! Mutating transitions (draw, soft reset, hard reset) take a
//! `DatabaseTransaction` so every read and write of one transition shares a
//! single atomic unit; read-only queries are generic over `ConnectionTrait`.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use crate::domain::derangement::build_derangement;
use crate::domain::registration::RegistrationStep;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::repos::game_state::{self, GameStatus};
use crate::repos::players::{self, Player};

/// One resolved santa -> recipient edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedPair {
    pub santa: Player,
    pub recipient: Player,
}

/// Outcome of a draw (real or dry-run): how many players took part and the
/// resolved pairing, ready for the transport layer to fan out notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSummary {
    pub player_count: usize,
    pub pairs: Vec<AssignedPair>,
}

/// Admin-facing game overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub total_players: usize,
    pub ready_players: usize,
}

/// One line of the admin roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub player: Player,
    pub step: RegistrationStep,
    pub has_recipient: bool,
}

/// Game flow service.
#[derive(Debug, Default)]
pub struct GameFlowService;

impl GameFlowService {
    /// Run the draw: assign every ready player a recipient and close
    /// registration, all inside the caller's transaction.
    ///
    /// Fails without mutating anything when pairs are already assigned, when
    /// fewer than two players are ready, or when the derangement engine
    /// exhausts its budget (the transaction wrapper rolls back in that case).
    pub async fn run_draw(&self, txn: &DatabaseTransaction) -> Result<DrawSummary, DomainError> {
        let status = game_state::get(txn).await?;
        if status.pairs_assigned {
            return Err(DomainError::conflict(
                ConflictKind::PairsAssigned,
                "pairs are already assigned for this round",
            ));
        }

        let ready = players::list_ready(txn).await?;
        if ready.len() < 2 {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers { ready: ready.len() },
                format!("need at least 2 ready players, got {}", ready.len()),
            ));
        }

        let ids: Vec<i64> = ready.iter().map(|p| p.id).collect();
        let pairs = build_derangement(&ids, &mut rand::rng())?;

        for (santa_id, recipient_id) in &pairs {
            players::set_recipient(txn, *santa_id, Some(*recipient_id)).await?;
        }
        game_state::set_registration_open(txn, false).await?;
        game_state::set_pairs_assigned(txn, true).await?;

        // Reload so the returned santa records carry their new assignment.
        let assigned = players::list_ready(txn).await?;
        let resolved = resolve_pairs(&assigned, &pairs)?;

        info!(player_count = resolved.len(), "pairs assigned, registration closed");
        Ok(DrawSummary {
            player_count: resolved.len(),
            pairs: resolved,
        })
    }

    /// Build a derangement over the current ready set without persisting
    /// anything. Harmless in any state; only the returned value differs from
    /// a real draw.
    pub async fn preview_draw<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<DrawSummary, DomainError> {
        let ready = players::list_ready(conn).await?;
        if ready.len() < 2 {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers { ready: ready.len() },
                format!("need at least 2 ready players, got {}", ready.len()),
            ));
        }

        let ids: Vec<i64> = ready.iter().map(|p| p.id).collect();
        let pairs = build_derangement(&ids, &mut rand::rng())?;
        let resolved = resolve_pairs(&ready, &pairs)?;

        debug!(player_count = resolved.len(), "dry-run draw built");
        Ok(DrawSummary {
            player_count: resolved.len(),
            pairs: resolved,
        })
    }

    /// Soft reset: clear every player's name, wish, and assignment, and
    /// reopen registration. Player rows (and chat ids) survive.
    pub async fn soft_reset(&self, txn: &DatabaseTransaction) -> Result<(), DomainError> {
        let cleared = players::clear_registration(txn).await?;
        game_state::set_registration_open(txn, true).await?;
        game_state::set_pairs_assigned(txn, false).await?;
        info!(cleared, "soft reset: registration data cleared, registration reopened");
        Ok(())
    }

    /// Hard reset: delete every player and reopen registration. Irreversible.
    pub async fn hard_reset(&self, txn: &DatabaseTransaction) -> Result<(), DomainError> {
        let deleted = players::delete_all(txn).await?;
        game_state::set_registration_open(txn, true).await?;
        game_state::set_pairs_assigned(txn, false).await?;
        info!(deleted, "hard reset: all players deleted, registration reopened");
        Ok(())
    }

    /// Who does `chat_id` gift? Only answerable for a ready player after the
    /// draw; the resolved recipient (name and wish) is returned for display.
    pub async fn reveal_assignment<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        chat_id: i64,
    ) -> Result<AssignedPair, DomainError> {
        let player = players::require_by_chat_id(conn, chat_id).await?;
        if !player.is_ready() {
            return Err(DomainError::validation(
                ValidationKind::RegistrationIncomplete,
                "registration was not completed for this round",
            ));
        }

        let status = game_state::get(conn).await?;
        if !status.pairs_assigned {
            return Err(DomainError::validation(
                ValidationKind::DrawNotRun,
                "the draw has not been run yet",
            ));
        }

        // Both of these indicate a broken draw and should not occur.
        let recipient_id = player.recipient_id.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Assignment, "no recipient on record")
        })?;
        let recipient = players::find_by_id(conn, recipient_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Assignment, "recipient row missing")
        })?;

        Ok(AssignedPair {
            santa: player,
            recipient,
        })
    }

    /// Registration and draw state plus player counts.
    pub async fn status<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<GameSummary, DomainError> {
        let status = game_state::get(conn).await?;
        let total_players = players::list_all(conn).await?.len();
        let ready_players = players::list_ready(conn).await?.len();
        Ok(GameSummary {
            status,
            total_players,
            ready_players,
        })
    }

    /// Every player with their registration progress, in creation order.
    pub async fn roster<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<RosterEntry>, DomainError> {
        let all = players::list_all(conn).await?;
        Ok(all
            .into_iter()
            .map(|player| RosterEntry {
                step: player.registration_step(),
                has_recipient: player.recipient_id.is_some(),
                player,
            })
            .collect())
    }

    /// All persisted santa -> recipient edges, resolved for display.
    pub async fn assigned_pairs<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<AssignedPair>, DomainError> {
        let ready = players::list_ready(conn).await?;
        let by_id: HashMap<i64, Player> =
            ready.iter().map(|p| (p.id, p.clone())).collect();

        let mut resolved = Vec::new();
        for santa in ready {
            let Some(recipient_id) = santa.recipient_id else {
                continue;
            };
            let recipient = by_id.get(&recipient_id).cloned().ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("recipient {recipient_id} is not among ready players"),
                )
            })?;
            resolved.push(AssignedPair { santa, recipient });
        }
        Ok(resolved)
    }
}

/// Resolve id pairs against the player set they were drawn from.
fn resolve_pairs(
    ready: &[Player],
    pairs: &[(i64, i64)],
) -> Result<Vec<AssignedPair>, DomainError> {
    let by_id: HashMap<i64, &Player> = ready.iter().map(|p| (p.id, p)).collect();

    pairs
        .iter()
        .map(|(santa_id, recipient_id)| {
            let santa = by_id.get(santa_id).copied().cloned().ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("santa {santa_id} vanished during the draw"),
                )
            })?;
            let recipient = by_id.get(recipient_id).copied().cloned().ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("recipient {recipient_id} vanished during the draw"),
                )
            })?;
            Ok(AssignedPair { santa, recipient })
        })
        .collect()
}
