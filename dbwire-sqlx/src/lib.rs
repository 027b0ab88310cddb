//! # dbwire-sqlx
//!
//! SQLx-backed connectivity layer for dbwire.
//!
//! Implements the [`dbwire_dsn::Connectivity`] seam on top of SQLx: the
//! rendered `dbi:` connection string is parsed under this crate's grammar,
//! the driver is resolved to a compiled-in backend, and a single connection
//! is opened. Backends are selected by cargo feature (`postgres` is on by
//! default; `mysql`, `sqlite`, and `all-databases` are available), the same
//! way the underlying SQLx drivers are.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dbwire_config::ConfigSource;
//! use dbwire_sqlx::SqlxConnectivity;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config: toml::Value = toml::from_str(r#"
//!     [database]
//!     driver = "Pg"
//!     host = "db.example.com"
//!     database = "app"
//!     username = "svc"
//!     password = "secret"
//! "#)?;
//!
//! let handle = SqlxConnectivity::new()
//!     .connect_config(ConfigSource::from_toml(&config)?)
//!     .await?;
//! # drop(handle);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod connectivity;
pub mod dsn;
pub mod error;

pub use backend::Backend;
pub use connectivity::{SqlxConnectivity, SqlxHandle};
pub use dsn::DbiDsn;
pub use error::{SqlxError, SqlxResult};
