//! # dbwire
//!
//! Database connections from whatever configuration shape you already have.
//!
//! dbwire reads a fixed set of connection settings (`driver`, `host`, `port`,
//! `database`, `options`, `username`, `password`) out of one of several
//! configuration representations, renders a `dbi:`-style connection string,
//! and delegates to a pluggable connectivity layer for the actual connection.
//! It exists so applications that keep database settings in different config
//! formats do not each reimplement the same string assembly.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dbwire::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config: toml::Value = toml::from_str(r#"
//!         [database]
//!         driver = "Pg"
//!         host = "db.example.com"
//!         database = "app"
//!     "#)?;
//!
//!     let handle = SqlxConnectivity::new()
//!         .connect_config(ConfigSource::from_toml(&config)?)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The transformation itself is pure: [`ConnectRequest::resolve`] returns the
//! rendered string and resolved credentials without touching the network.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Configuration sources and settings extraction.
pub mod config {
    pub use dbwire_config::*;
}

/// Driver registry, DSN rendering, and the connectivity seam.
pub mod dsn {
    pub use dbwire_dsn::*;
}

/// SQLx-backed connectivity layer.
#[cfg(feature = "sqlx")]
pub mod sqlx {
    pub use dbwire_sqlx::*;
}

// Re-export key types at the crate root
pub use config::{ConfigError, ConfigSource, Settings};
pub use dsn::{
    connect, AdapterError, ConnectError, ConnectRequest, Connectivity, Credentials, Driver,
    DriverTable, Dsn, MockConnectivity,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ConfigSource, Settings};
    pub use crate::dsn::{connect, ConnectRequest, Connectivity, Credentials, Driver, DriverTable};

    #[cfg(feature = "sqlx")]
    pub use crate::sqlx::SqlxConnectivity;
}
