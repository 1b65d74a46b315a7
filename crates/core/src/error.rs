//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (lookups, payload
/// validation). Transport concerns belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A payload failed one or more field checks. Every violated rule is
    /// reported, in check order.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A requested product was not found.
    #[error("product not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
