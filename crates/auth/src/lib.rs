//! `stockroom-auth` — shared-secret access gate for mutating operations.
//!
//! Read-only operations never pass through this gate; the HTTP layer calls
//! it only for mutating verbs.

use thiserror::Error;

/// Access-gate failure for a mutating request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// No credential supplied (reported as unauthorized).
    #[error("API key is missing")]
    MissingKey,

    /// Credential supplied but does not match (reported as forbidden).
    #[error("invalid API key")]
    InvalidKey,
}

/// Static shared-secret policy, configured once at startup.
#[derive(Debug, Clone)]
pub struct ApiKeyPolicy {
    secret: String,
}

impl ApiKeyPolicy {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Check a supplied key against the configured secret.
    ///
    /// Exact string equality; no prefix or encoding handling.
    pub fn authorize(&self, supplied: Option<&str>) -> Result<(), AccessError> {
        match supplied {
            None => Err(AccessError::MissingKey),
            Some(key) if key == self.secret => Ok(()),
            Some(_) => Err(AccessError::InvalidKey),
        }
    }
}
