//! # dbwire-config
//!
//! Configuration sources and settings extraction for dbwire.
//!
//! Applications keep their database settings in different places: a flat
//! key/value map, an INI-style object queried by section and key, a config
//! object that hands out whole section blocks, or a nested map of sections.
//! This crate models that closed set of shapes as [`ConfigSource`] and pulls
//! the fixed database [`Settings`] record out of whichever shape was supplied.
//!
//! ## Example
//!
//! ```rust
//! use dbwire_config::{ConfigSource, Settings};
//!
//! let value: toml::Value = toml::from_str(r#"
//!     [database]
//!     driver = "Pg"
//!     host = "db.example.com"
//!     database = "app"
//! "#).unwrap();
//!
//! let source = ConfigSource::from_toml(&value).unwrap();
//! let settings = Settings::from_source(&source, "database");
//! assert_eq!(settings.driver.as_deref(), Some("Pg"));
//! assert_eq!(settings.host.as_deref(), Some("db.example.com"));
//! ```

pub mod error;
pub mod settings;
pub mod source;

pub use error::{ConfigError, ConfigResult};
pub use settings::Settings;
pub use source::{ConfigSource, SectionBlockLookup, SectionValueLookup};
