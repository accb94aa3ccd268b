use crate::domain::registration::{normalize_input, RegistrationStep};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn step_derivation_follows_the_two_fields() {
    assert_eq!(
        RegistrationStep::from_fields(None, None),
        RegistrationStep::New
    );
    assert_eq!(
        RegistrationStep::from_fields(Some("Alice"), None),
        RegistrationStep::NameSet
    );
    assert_eq!(
        RegistrationStep::from_fields(Some("Alice"), Some("socks")),
        RegistrationStep::Ready
    );
    // A wish without a name cannot count as progress.
    assert_eq!(
        RegistrationStep::from_fields(None, Some("socks")),
        RegistrationStep::New
    );
}

#[test]
fn normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize_input("  Alice Cooper \n").unwrap(), "Alice Cooper");
}

#[test]
fn normalize_rejects_empty_and_whitespace_input() {
    for raw in ["", "   ", "\t\n"] {
        let result = normalize_input(raw);
        assert!(
            matches!(
                result,
                Err(DomainError::Validation(ValidationKind::EmptyInput, _))
            ),
            "{raw:?} should be rejected as empty"
        );
    }
}

#[test]
fn normalize_rejects_command_tokens() {
    for raw in ["/start", "/reset_all", "  /status"] {
        let result = normalize_input(raw);
        assert!(
            matches!(
                result,
                Err(DomainError::Validation(ValidationKind::CommandInput, _))
            ),
            "{raw:?} should be rejected as a command"
        );
    }
}

#[test]
fn normalize_keeps_inner_punctuation() {
    assert_eq!(normalize_input(" a/b ").unwrap(), "a/b");
}
