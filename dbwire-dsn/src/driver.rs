//! Driver identifiers and the database-parameter keyword registry.

use std::collections::HashMap;
use std::fmt;

/// A built-in database driver.
///
/// The name is rendered verbatim into the connection string, so casing
/// follows the driver ecosystem (`Pg`, `mysql`, `SQLite`), not Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    /// CSV files exposed as tables.
    Csv,
    /// In-memory mock driver used by test suites.
    Mock,
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    Pg,
    /// SQLite.
    Sqlite,
}

impl Driver {
    /// Get the driver name as it appears in connection strings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Mock => "Mock",
            Self::MySql => "mysql",
            Self::Pg => "Pg",
            Self::Sqlite => "SQLite",
        }
    }

    /// The keyword this driver expects for the database-name parameter.
    pub fn database_param(&self) -> &'static str {
        match self {
            Self::Csv => "f_dir",
            Self::MySql => "database",
            Self::Mock | Self::Pg | Self::Sqlite => "dbname",
        }
    }

    /// Parse a driver from its connection-string name.
    ///
    /// Names are matched exactly; unknown names return `None` so callers can
    /// fall back to registered custom drivers.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CSV" => Some(Self::Csv),
            "Mock" => Some(Self::Mock),
            "mysql" => Some(Self::MySql),
            "Pg" => Some(Self::Pg),
            "SQLite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Driver-name to database-parameter-keyword table.
///
/// Covers the built-in [`Driver`] set and accepts caller registrations for
/// drivers outside it. Registrations take precedence over built-ins, and a
/// name found in neither is reported as unknown rather than rendered into a
/// malformed connection string.
///
/// ```rust
/// use dbwire_dsn::DriverTable;
///
/// let table = DriverTable::new().register("Oracle", "sid");
/// assert_eq!(table.database_param("Oracle"), Some("sid"));
/// assert_eq!(table.database_param("Pg"), Some("dbname"));
/// assert_eq!(table.database_param("Sybase"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DriverTable {
    registered: HashMap<String, String>,
}

impl DriverTable {
    /// Create a table holding only the built-in drivers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or override) the keyword for a driver name.
    pub fn register(mut self, driver: impl Into<String>, database_param: impl Into<String>) -> Self {
        self.registered.insert(driver.into(), database_param.into());
        self
    }

    /// Look up the database-parameter keyword for a driver name.
    pub fn database_param(&self, driver: &str) -> Option<&str> {
        if let Some(param) = self.registered.get(driver) {
            return Some(param.as_str());
        }
        Driver::from_name(driver).map(|d| d.database_param())
    }
}
