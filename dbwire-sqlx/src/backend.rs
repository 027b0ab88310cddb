//! Backend selection from driver names.

use crate::error::{SqlxError, SqlxResult};

/// Database backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// PostgreSQL database.
    Postgres,
    /// MySQL / MariaDB database.
    MySql,
    /// SQLite database.
    Sqlite,
}

impl Backend {
    /// Get the backend name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    /// The database-name keyword this backend expects in connection strings.
    pub fn database_param(&self) -> &'static str {
        match self {
            Self::Postgres => "dbname",
            Self::MySql => "database",
            Self::Sqlite => "dbname",
        }
    }

    /// Resolve a connection-string driver name to a backend.
    ///
    /// This layer's grammar is deliberately liberal about casing and the
    /// usual aliases; drivers with no SQLx backend (e.g. `CSV`, `Mock`)
    /// are rejected as unsupported.
    pub fn from_driver(name: &str) -> SqlxResult<Self> {
        match name.to_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            _ => Err(SqlxError::UnsupportedDriver(name.to_string())),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
