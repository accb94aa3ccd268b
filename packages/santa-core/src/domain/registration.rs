//! Registration progress and free-text input rules.

use crate::errors::domain::{DomainError, ValidationKind};

/// Per-player registration progress, derived from the two optional fields.
///
/// The only legal path is New -> NameSet -> Ready: a wish cannot be recorded
/// before a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    /// No display name yet.
    New,
    /// Name recorded, wish still missing.
    NameSet,
    /// Name and wish recorded; eligible for the draw.
    Ready,
}

impl RegistrationStep {
    pub fn from_fields(full_name: Option<&str>, wish: Option<&str>) -> Self {
        match (full_name, wish) {
            (None, _) => RegistrationStep::New,
            (Some(_), None) => RegistrationStep::NameSet,
            (Some(_), Some(_)) => RegistrationStep::Ready,
        }
    }
}

/// Normalize free-text input from the chat layer.
///
/// Strips surrounding whitespace. Empty (or whitespace-only) input and input
/// starting with a command marker are rejected; the caller re-prompts without
/// changing any state.
pub fn normalize_input(raw: &str) -> Result<String, DomainError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyInput,
            "input is empty or whitespace-only",
        ));
    }
    if text.starts_with('/') {
        return Err(DomainError::validation(
            ValidationKind::CommandInput,
            "input looks like a command token",
        ));
    }
    Ok(text.to_string())
}
