//! SQLx-backed connectivity implementation.

use async_trait::async_trait;
use dbwire_config::ConfigSource;
use dbwire_dsn::{ConnectError, Connectivity, Credentials};
use tracing::{debug, info};

use crate::backend::Backend;
use crate::dsn::DbiDsn;
use crate::error::{SqlxError, SqlxResult};

/// A [`Connectivity`] layer that opens single SQLx connections.
///
/// Accepts `dbi:` connection strings, resolves the driver to a compiled-in
/// backend, and opens one connection per call — no pooling, no retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlxConnectivity;

impl SqlxConnectivity {
    /// Create the connectivity layer.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a configuration source and connect in one step.
    ///
    /// Uses the default section and driver table; for anything fancier,
    /// build a [`dbwire_dsn::ConnectRequest`] and pass `self` to it.
    pub async fn connect_config(&self, config: ConfigSource) -> Result<SqlxHandle, ConnectError<SqlxError>> {
        dbwire_dsn::connect(self, config).await
    }
}

/// A live connection, one variant per compiled-in backend.
pub enum SqlxHandle {
    /// PostgreSQL connection.
    #[cfg(feature = "postgres")]
    Postgres(sqlx::PgConnection),
    /// MySQL connection.
    #[cfg(feature = "mysql")]
    MySql(sqlx::MySqlConnection),
    /// SQLite connection.
    #[cfg(feature = "sqlite")]
    Sqlite(sqlx::SqliteConnection),
}

impl SqlxHandle {
    /// Get the backend this connection belongs to.
    pub fn backend(&self) -> Backend {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => Backend::Postgres,
            #[cfg(feature = "mysql")]
            Self::MySql(_) => Backend::MySql,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => Backend::Sqlite,
        }
    }
}

impl std::fmt::Debug for SqlxHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SqlxHandle").field(&self.backend().name()).finish()
    }
}

#[async_trait]
impl Connectivity for SqlxConnectivity {
    type Handle = SqlxHandle;
    type Error = SqlxError;

    async fn connect(&self, dsn: &str, credentials: &Credentials) -> SqlxResult<SqlxHandle> {
        let dsn = DbiDsn::parse(dsn)?;
        let backend = Backend::from_driver(dsn.driver())?;
        info!(backend = %backend, "opening connection");

        match backend {
            #[cfg(feature = "postgres")]
            Backend::Postgres => Ok(SqlxHandle::Postgres(connect_postgres(&dsn, credentials).await?)),
            #[cfg(feature = "mysql")]
            Backend::MySql => Ok(SqlxHandle::MySql(connect_mysql(&dsn, credentials).await?)),
            #[cfg(feature = "sqlite")]
            Backend::Sqlite => Ok(SqlxHandle::Sqlite(connect_sqlite(&dsn, credentials).await?)),
            #[allow(unreachable_patterns)]
            other => Err(SqlxError::BackendDisabled(other.name())),
        }
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(dsn: &DbiDsn, credentials: &Credentials) -> SqlxResult<sqlx::PgConnection> {
    use sqlx::ConnectOptions;
    use sqlx::postgres::PgConnectOptions;

    let mut options = PgConnectOptions::new().username(&credentials.username);
    if let Some(password) = &credentials.password {
        options = options.password(password);
    }
    if let Some(host) = dsn.param("host") {
        options = options.host(host);
    }
    if let Some(port) = dsn.port()? {
        options = options.port(port);
    }
    if let Some(database) = dsn.param("dbname") {
        options = options.database(database);
    }
    warn_unrecognized(dsn, &["host", "port", "dbname"]);

    Ok(options.connect().await?)
}

#[cfg(feature = "mysql")]
async fn connect_mysql(dsn: &DbiDsn, credentials: &Credentials) -> SqlxResult<sqlx::MySqlConnection> {
    use sqlx::ConnectOptions;
    use sqlx::mysql::MySqlConnectOptions;

    let mut options = MySqlConnectOptions::new().username(&credentials.username);
    if let Some(password) = &credentials.password {
        options = options.password(password);
    }
    if let Some(host) = dsn.param("host") {
        options = options.host(host);
    }
    if let Some(port) = dsn.port()? {
        options = options.port(port);
    }
    if let Some(database) = dsn.param("database") {
        options = options.database(database);
    }
    warn_unrecognized(dsn, &["host", "port", "database"]);

    Ok(options.connect().await?)
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(dsn: &DbiDsn, _credentials: &Credentials) -> SqlxResult<sqlx::SqliteConnection> {
    use sqlx::ConnectOptions;
    use sqlx::sqlite::SqliteConnectOptions;

    let mut options = SqliteConnectOptions::new();
    match dsn.param("dbname") {
        // The driver creates missing database files.
        Some(path) if path != ":memory:" && !path.is_empty() => {
            options = options.filename(path).create_if_missing(true);
        }
        _ => {
            options = options.in_memory(true);
        }
    }
    warn_unrecognized(dsn, &["dbname"]);

    Ok(options.connect().await?)
}

#[allow(dead_code)]
fn warn_unrecognized(dsn: &DbiDsn, recognized: &[&str]) {
    for key in dsn.params().keys() {
        if !recognized.contains(&key.as_str()) {
            debug!(key = %key, "ignoring unrecognized connection parameter");
        }
    }
}
