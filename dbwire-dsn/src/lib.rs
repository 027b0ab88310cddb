//! # dbwire-dsn
//!
//! Driver registry, connection-string rendering, and the connectivity seam
//! for dbwire.
//!
//! This crate turns a [`dbwire_config::ConfigSource`] into a rendered
//! `dbi:`-style connection string plus resolved credentials, then hands both
//! to whichever [`Connectivity`] implementation the caller supplies. The
//! transformation itself is pure and synchronous; the only I/O is the
//! delegated connection attempt.
//!
//! ## Example
//!
//! ```rust
//! use dbwire_config::ConfigSource;
//! use dbwire_dsn::ConnectRequest;
//!
//! let config = ConfigSource::from_pairs(&[
//!     "driver", "Pg",
//!     "host", "db.example.com",
//!     "database", "app",
//! ]).unwrap();
//!
//! let (dsn, credentials) = ConnectRequest::new().config(config).resolve().unwrap();
//! assert_eq!(dsn.as_str(), "dbi:Pg:host=db.example.com;dbname=app");
//! assert!(!credentials.username.is_empty());
//! ```
//!
//! Opening an actual connection goes through the seam:
//!
//! ```rust
//! use dbwire_config::ConfigSource;
//! use dbwire_dsn::{connect, MockConnectivity};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mock = MockConnectivity::new();
//! let config = ConfigSource::from_pairs(&["driver", "Mock", "database", "fixtures"]).unwrap();
//! let handle = connect(&mock, config).await.unwrap();
//! assert_eq!(handle.dsn, "dbi:Mock:dbname=fixtures");
//! # }
//! ```

pub mod connect;
pub mod driver;
pub mod dsn;
pub mod error;
pub mod logging;
pub mod mock;

pub use connect::{connect, Connectivity, ConnectRequest, Credentials, DEFAULT_SECTION};
pub use driver::{Driver, DriverTable};
pub use dsn::Dsn;
pub use error::{AdapterError, AdapterResult, ConnectError};
pub use mock::{MockCall, MockConnectivity, MockFailure, MockHandle};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::connect::{connect, Connectivity, ConnectRequest, Credentials};
    pub use crate::driver::{Driver, DriverTable};
    pub use crate::dsn::Dsn;
    pub use crate::error::{AdapterError, ConnectError};
}
