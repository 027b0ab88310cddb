//! `dbi:` connection-string grammar.
//!
//! This layer owns its own grammar for the strings delegated to it:
//! `dbi:<driver>:<params>` where `<params>` is a `;`-separated list of
//! `key=value` pairs. Anything the adapter appended as opaque options
//! arrives here as additional pairs.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{SqlxError, SqlxResult};

/// A parsed `dbi:` connection string.
#[derive(Debug, Clone)]
pub struct DbiDsn {
    driver: String,
    params: HashMap<String, String>,
}

impl DbiDsn {
    /// Parse a connection string.
    ///
    /// ```rust
    /// use dbwire_sqlx::DbiDsn;
    ///
    /// let dsn = DbiDsn::parse("dbi:Pg:host=localhost;port=5432;dbname=app").unwrap();
    /// assert_eq!(dsn.driver(), "Pg");
    /// assert_eq!(dsn.param("host"), Some("localhost"));
    /// assert_eq!(dsn.param("dbname"), Some("app"));
    /// ```
    pub fn parse(dsn: &str) -> SqlxResult<Self> {
        let rest = dsn
            .strip_prefix("dbi:")
            .ok_or_else(|| SqlxError::invalid_dsn("missing 'dbi:' prefix"))?;
        let (driver, params_part) = rest
            .split_once(':')
            .ok_or_else(|| SqlxError::invalid_dsn("missing driver separator"))?;
        if driver.is_empty() {
            return Err(SqlxError::invalid_dsn("empty driver name"));
        }

        let mut params = HashMap::new();
        for piece in params_part.split(';').filter(|piece| !piece.is_empty()) {
            let (key, value) = piece
                .split_once('=')
                .ok_or_else(|| SqlxError::invalid_dsn(format!("malformed parameter '{piece}'")))?;
            params.insert(key.to_string(), value.to_string());
        }

        debug!(driver, params = params.len(), "connection string parsed");
        Ok(Self {
            driver: driver.to_string(),
            params,
        })
    }

    /// The driver name.
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// Get a parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Get a parameter value, rejecting unparseable numbers.
    pub fn port(&self) -> SqlxResult<Option<u16>> {
        match self.param("port") {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| SqlxError::invalid_dsn(format!("invalid port '{raw}'"))),
        }
    }

    /// All parameters.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}
