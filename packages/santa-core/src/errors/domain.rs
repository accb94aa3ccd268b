//! Domain-level error type used across services, repos, and adapters.
//!
//! This error type is transport- and DB-agnostic. The chat front-end is
//! expected to match on the variant (and kind) and choose its own wording;
//! every variant carries enough detail to produce a meaningful message.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    GameState,
    /// The querying player is in a drawn game but has no recipient on record.
    Assignment,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Pairs are already assigned for this round; the draw is not re-runnable.
    PairsAssigned,
    UniqueChatId,
    Other(String),
}

/// Validation / business-rule kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Registration is closed; the attempted step is not available.
    RegistrationClosed,
    /// The player has not completed registration for this operation.
    RegistrationIncomplete,
    /// The draw has not been run yet.
    DrawNotRun,
    /// Fewer than two ready players at draw time.
    NotEnoughPlayers { ready: usize },
    /// The derangement attempt budget was exhausted (or the id set is
    /// too small to admit any derangement).
    DrawUnsatisfiable,
    /// Empty or whitespace-only free-text input.
    EmptyInput,
    /// Free-text input that looks like a command token.
    CommandInput,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind_and_detail() {
        let err = DomainError::validation(
            ValidationKind::NotEnoughPlayers { ready: 1 },
            "need at least 2 ready players",
        );
        let rendered = err.to_string();
        assert!(rendered.contains("NotEnoughPlayers"));
        assert!(rendered.contains("ready: 1"));
        assert!(rendered.contains("need at least 2 ready players"));
    }

    #[test]
    fn kinds_compare_by_value() {
        assert_eq!(
            ValidationKind::NotEnoughPlayers { ready: 1 },
            ValidationKind::NotEnoughPlayers { ready: 1 }
        );
        assert_ne!(
            ValidationKind::NotEnoughPlayers { ready: 1 },
            ValidationKind::NotEnoughPlayers { ready: 2 }
        );
    }
}
