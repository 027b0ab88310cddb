//! Error types for DSN resolution and connection delegation.

use dbwire_config::ConfigError;
use thiserror::Error;

/// Result type for DSN resolution.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors detected while turning a configuration into a connection string.
///
/// All of these are caller-input errors: immediate, synchronous, and fatal to
/// the call. There are no partial results and no retries.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// No connection parameters were supplied at all.
    #[error("no connection parameters were supplied")]
    NoParameters,

    /// The `driver` setting was empty or absent after extraction.
    #[error("missing 'driver' setting in section '{section}'")]
    MissingDriver {
        /// Section the settings were read from.
        section: String,
    },

    /// The driver has no database-parameter keyword in the table.
    #[error("unknown database driver '{0}'")]
    UnknownDriver(String),

    /// The configuration source itself was malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors surfaced by the connect operation.
///
/// Connectivity-layer failures propagate through [`ConnectError::Connectivity`]
/// unchanged — this crate never wraps, retries, or reinterprets them.
#[derive(Error, Debug)]
pub enum ConnectError<E> {
    /// The configuration could not be turned into a connection string.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The delegated connection attempt failed.
    #[error(transparent)]
    Connectivity(E),
}

impl<E> ConnectError<E> {
    /// Check whether the failure came from the connectivity layer.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AdapterError::MissingDriver {
            section: "database".to_string(),
        };
        assert_eq!(err.to_string(), "missing 'driver' setting in section 'database'");

        let err = AdapterError::UnknownDriver("Oracle".to_string());
        assert!(err.to_string().contains("Oracle"));
    }

    #[test]
    fn test_connectivity_errors_pass_through() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: ConnectError<std::io::Error> = ConnectError::Connectivity(inner);
        assert!(err.is_connectivity());
        assert_eq!(err.to_string(), "refused");
    }

    #[test]
    fn test_adapter_errors_convert() {
        let err: ConnectError<std::io::Error> = AdapterError::NoParameters.into();
        assert!(!err.is_connectivity());
    }
}
