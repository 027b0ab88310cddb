//! Error types for the SQLx connectivity layer.

use thiserror::Error;

/// Result type for SQLx connectivity operations.
pub type SqlxResult<T> = Result<T, SqlxError>;

/// Errors produced while parsing a connection string or opening a connection.
#[derive(Error, Debug)]
pub enum SqlxError {
    /// The connection string did not match this layer's grammar.
    #[error("invalid connection string: {0}")]
    InvalidDsn(String),

    /// The driver named in the connection string has no SQLx backend.
    #[error("driver '{0}' is not supported by the SQLx connectivity layer")]
    UnsupportedDriver(String),

    /// The backend exists but its cargo feature is disabled.
    #[error("backend '{0}' not enabled; rebuild with the matching feature")]
    BackendDisabled(&'static str),

    /// SQLx failure while opening the connection.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl SqlxError {
    /// Create an invalid-connection-string error.
    pub fn invalid_dsn(message: impl Into<String>) -> Self {
        Self::InvalidDsn(message.into())
    }
}
