//! Error types for configuration sources.

use thiserror::Error;

/// Result type for configuration-source operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while adapting a configuration source.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A flattened key/value list had an unpaired key.
    #[error("flattened key/value list has an unpaired key ({len} items)")]
    OddArgumentCount {
        /// Number of items in the supplied list.
        len: usize,
    },

    /// The supplied value matched none of the supported configuration shapes.
    #[error("unsupported configuration shape: {0}")]
    UnknownConfigType(String),
}

impl ConfigError {
    /// Create an unknown-config-type error.
    pub fn unknown_type(description: impl Into<String>) -> Self {
        Self::UnknownConfigType(description.into())
    }
}
