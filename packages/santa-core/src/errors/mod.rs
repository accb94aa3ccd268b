//! Error handling for the Secret Santa core.

pub mod domain;

pub use domain::DomainError;
