//! The connect operation and its connectivity seam.

use async_trait::async_trait;
use dbwire_config::{ConfigSource, Settings};
use tracing::{debug, info};

use crate::driver::DriverTable;
use crate::dsn::{self, Dsn};
use crate::error::{AdapterError, AdapterResult, ConnectError};

/// Section settings are read from when the caller names none.
pub const DEFAULT_SECTION: &str = "database";

/// Credentials resolved alongside the connection string.
///
/// The username is always present — an absent setting defaults to the
/// current OS user before delegation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Username to connect as.
    pub username: String,
    /// Password, if the configuration carried one.
    pub password: Option<String>,
}

/// A database-connectivity layer that can open connections from a rendered
/// connection string.
///
/// This is the seam to the external database library: implementations own
/// the driver-string grammar, the network transport, and the shape of the
/// handle they return. The adapter hands the string over verbatim and never
/// inspects the result.
#[async_trait]
pub trait Connectivity: Send + Sync {
    /// Connection handle produced on success.
    type Handle: Send;
    /// Failure type; surfaced to callers unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a connection for the given connection string and credentials.
    async fn connect(&self, dsn: &str, credentials: &Credentials) -> Result<Self::Handle, Self::Error>;
}

/// A pending connection attempt: configuration, section, and driver table.
///
/// The builder replaces the flattened argument list of classic connect APIs;
/// supplying no configuration at all is still an error, caught when the
/// request is resolved.
///
/// ```rust
/// use dbwire_dsn::ConnectRequest;
/// use dbwire_config::ConfigSource;
///
/// let config = ConfigSource::from_pairs(&[
///     "driver", "Pg",
///     "host", "db.example.com",
///     "database", "app",
/// ]).unwrap();
///
/// let (dsn, credentials) = ConnectRequest::new().config(config).resolve().unwrap();
/// assert_eq!(dsn.as_str(), "dbi:Pg:host=db.example.com;dbname=app");
/// # drop(credentials);
/// ```
#[derive(Debug, Default)]
pub struct ConnectRequest {
    config: Option<ConfigSource>,
    section: Option<String>,
    drivers: DriverTable,
}

impl ConnectRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the configuration source.
    pub fn config(mut self, config: ConfigSource) -> Self {
        self.config = Some(config);
        self
    }

    /// Read settings from a section other than [`DEFAULT_SECTION`].
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Use a driver table with caller registrations.
    pub fn drivers(mut self, drivers: DriverTable) -> Self {
        self.drivers = drivers;
        self
    }

    /// Resolve the request into a connection string and credentials.
    ///
    /// This is the whole transformation: extract the settings from the
    /// configured section, require a driver, map it to its database-name
    /// keyword, default the username to the OS user, render. No I/O happens
    /// here.
    pub fn resolve(&self) -> AdapterResult<(Dsn, Credentials)> {
        let config = self.config.as_ref().ok_or(AdapterError::NoParameters)?;
        let section = self.section.as_deref().unwrap_or(DEFAULT_SECTION);
        let settings = Settings::from_source(config, section);

        let driver = settings.driver.clone().ok_or_else(|| AdapterError::MissingDriver {
            section: section.to_string(),
        })?;
        let database_param = self
            .drivers
            .database_param(&driver)
            .ok_or_else(|| AdapterError::UnknownDriver(driver.clone()))?
            .to_string();

        let credentials = Credentials {
            username: settings.username_or_os_user(),
            password: settings.password.clone(),
        };
        let dsn = dsn::render(&driver, &database_param, &settings);
        debug!(driver = %driver, dsn = %dsn, username = %credentials.username, "connection string resolved");
        Ok((dsn, credentials))
    }

    /// Resolve the request and delegate to a connectivity layer.
    ///
    /// The handle comes back exactly as the layer produced it; its failures
    /// propagate through [`ConnectError::Connectivity`] untouched. When
    /// resolution fails, the layer is never invoked.
    pub async fn connect<C: Connectivity>(&self, connectivity: &C) -> Result<C::Handle, ConnectError<C::Error>> {
        let (dsn, credentials) = self.resolve()?;
        info!(dsn = %dsn, "delegating connection attempt");
        connectivity
            .connect(dsn.as_str(), &credentials)
            .await
            .map_err(ConnectError::Connectivity)
    }
}

/// Connect using the default section and driver table.
///
/// Shorthand for `ConnectRequest::new().config(config).connect(connectivity)`.
pub async fn connect<C: Connectivity>(
    connectivity: &C,
    config: ConfigSource,
) -> Result<C::Handle, ConnectError<C::Error>> {
    ConnectRequest::new().config(config).connect(connectivity).await
}
