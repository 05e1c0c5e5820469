//! Error types for the site backend

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CdaoError>;

#[derive(Error, Debug)]
pub enum CdaoError {
    /// A create would violate the email uniqueness invariant. Callers map
    /// this to a user-facing "already subscribed" response, not a server
    /// fault.
    #[error("email already subscribed: {0}")]
    DuplicateEmail(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("config error: {0}")]
    Config(String),
}

impl CdaoError {
    /// True for the duplicate-email case, as opposed to a persistence fault.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, CdaoError::DuplicateEmail(_))
    }
}
