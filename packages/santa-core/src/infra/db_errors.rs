//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; the repos layer converts via the
//! `From<DbErr>` impl below so services and callers only ever see
//! `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn is_unique_violation(msg: &str) -> bool {
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("SQLSTATE(23505)")
}

fn is_foreign_key_violation(msg: &str) -> bool {
    msg.contains("FOREIGN KEY constraint failed") || msg.contains("SQLSTATE(23503)")
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        if error_msg.contains("players.chat_id") {
            return DomainError::conflict(ConflictKind::UniqueChatId, "Chat id already registered");
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if is_foreign_key_violation(&error_msg) {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool") {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(sea_orm::DbErr::RecordNotFound("players".into()));
        assert!(matches!(err, DomainError::NotFound(_, _)));
    }

    #[test]
    fn sqlite_unique_violation_on_chat_id_maps_to_conflict() {
        let err = map_db_err(sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: players.chat_id".into(),
        ));
        assert_eq!(
            err,
            DomainError::conflict(ConflictKind::UniqueChatId, "Chat id already registered")
        );
    }

    #[test]
    fn unknown_errors_fall_back_to_infra() {
        let err = map_db_err(sea_orm::DbErr::Custom("something exploded".into()));
        assert!(matches!(err, DomainError::Infra(_, _)));
    }
}
