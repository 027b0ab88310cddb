//! Connection-string rendering.

use std::fmt;

use dbwire_config::Settings;

/// A rendered `dbi:`-style connection string.
///
/// Format: `dbi:<driver>:[host=<host>;][port=<port>;]<keyword>=<database>[;<options>]`
/// with the fragment order fixed as host, port, database assignment, options.
/// The string never carries credentials; those travel separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn(String);

impl Dsn {
    /// Get the connection string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Dsn> for String {
    fn from(dsn: Dsn) -> Self {
        dsn.0
    }
}

/// Render the connection string for `driver` from extracted settings.
///
/// `database_param` is the driver's database-name keyword; the caller has
/// already resolved it through the driver table. An absent database still
/// renders the assignment (`keyword=`) — whether that is acceptable is the
/// connectivity layer's call.
pub(crate) fn render(driver: &str, database_param: &str, settings: &Settings) -> Dsn {
    let mut out = format!("dbi:{driver}:");

    if let Some(host) = &settings.host {
        out.push_str("host=");
        out.push_str(host);
        out.push(';');
    }
    if let Some(port) = &settings.port {
        out.push_str("port=");
        out.push_str(port);
        out.push(';');
    }

    out.push_str(database_param);
    out.push('=');
    if let Some(database) = &settings.database {
        out.push_str(database);
    }

    if let Some(options) = &settings.options {
        out.push(';');
        out.push_str(options);
    }

    Dsn(out)
}
