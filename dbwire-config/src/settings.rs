//! The fixed database-settings record.

use tracing::debug;

use crate::source::ConfigSource;

/// Database-connection settings pulled out of a configuration source.
///
/// Built fresh on every connection attempt and discarded afterwards; nothing
/// is cached. Every field is optional at this level — which ones are actually
/// required is enforced by the connect operation, not here. Empty strings are
/// normalized to `None` during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Driver identifier, e.g. `Pg`, `mysql`, `SQLite`.
    pub driver: Option<String>,
    /// Database server host.
    pub host: Option<String>,
    /// Database server port (kept as text; the connectivity layer parses it).
    pub port: Option<String>,
    /// Database name, or file path for file-backed drivers.
    pub database: Option<String>,
    /// Opaque driver options appended to the connection string.
    pub options: Option<String>,
    /// Username to connect as.
    pub username: Option<String>,
    /// Password to connect with.
    pub password: Option<String>,
}

impl Settings {
    /// Extract the settings from `section` of a configuration source.
    ///
    /// Missing values resolve to `None`, never an error. Plain mappings
    /// ignore the section name and read top-level keys.
    pub fn from_source(source: &ConfigSource, section: &str) -> Self {
        let settings = match source {
            // Fetch the block once rather than once per key.
            ConfigSource::SectionBlock(lookup) => {
                let block = lookup.block(section).unwrap_or_default();
                Self::collect(|key| block.get(key).cloned())
            }
            other => Self::collect(|key| other.get(section, key)),
        };
        debug!(
            section,
            shape = source.shape_name(),
            driver = ?settings.driver,
            host = ?settings.host,
            database = ?settings.database,
            "settings extracted"
        );
        settings
    }

    fn collect(get: impl Fn(&str) -> Option<String>) -> Self {
        let fetch = |key: &str| get(key).filter(|value| !value.is_empty());
        Self {
            driver: fetch("driver"),
            host: fetch("host"),
            port: fetch("port"),
            database: fetch("database"),
            options: fetch("options"),
            username: fetch("username"),
            password: fetch("password"),
        }
    }

    /// The username to connect as, defaulting to the current OS user.
    pub fn username_or_os_user(&self) -> String {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(whoami::username)
    }
}
