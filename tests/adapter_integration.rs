//! Integration tests for configuration-shape handling and DSN resolution.
//!
//! These tests exercise the public facade the way an application would:
//! build a source in whichever shape, resolve, and inspect the rendered
//! connection string.

use std::collections::HashMap;

use dbwire::config::{ConfigError, ConfigSource, SectionBlockLookup, SectionValueLookup};
use dbwire::dsn::{AdapterError, ConnectRequest, DriverTable};
use pretty_assertions::assert_eq;

/// An INI-style object answering value lookups by section and key.
struct IniStyle(HashMap<(String, String), String>);

impl IniStyle {
    fn new(section: &str, entries: &[(&str, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(k, v)| ((section.to_string(), k.to_string()), v.to_string()))
                .collect(),
        )
    }
}

impl SectionValueLookup for IniStyle {
    fn value(&self, section: &str, key: &str) -> Option<String> {
        self.0.get(&(section.to_string(), key.to_string())).cloned()
    }
}

/// A config object handing out whole section blocks.
struct BlockStyle(HashMap<String, HashMap<String, String>>);

impl SectionBlockLookup for BlockStyle {
    fn block(&self, section: &str) -> Option<HashMap<String, String>> {
        self.0.get(section).cloned()
    }
}

fn resolve(source: ConfigSource) -> String {
    let (dsn, _) = ConnectRequest::new().config(source).resolve().unwrap();
    dsn.as_str().to_string()
}

const SETTINGS: [(&str, &str); 4] = [
    ("driver", "Pg"),
    ("host", "db.example.com"),
    ("port", "6432"),
    ("database", "app"),
];

/// All four shapes holding identical settings render identical strings.
#[test]
fn test_shape_independence() {
    let expected = "dbi:Pg:host=db.example.com;port=6432;dbname=app";

    let mapping = ConfigSource::Mapping(
        SETTINGS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    assert_eq!(resolve(mapping), expected);

    let nested = ConfigSource::NestedMapping(HashMap::from([(
        "database".to_string(),
        SETTINGS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )]));
    assert_eq!(resolve(nested), expected);

    let by_value = ConfigSource::section_value(IniStyle::new("database", &SETTINGS));
    assert_eq!(resolve(by_value), expected);

    let by_block = ConfigSource::section_block(BlockStyle(HashMap::from([(
        "database".to_string(),
        SETTINGS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )])));
    assert_eq!(resolve(by_block), expected);
}

#[test]
fn test_rendered_string_pg_host_no_port() {
    let source = ConfigSource::from_pairs(&[
        "driver", "Pg",
        "host", "db.example.com",
        "database", "app",
    ])
    .unwrap();
    assert_eq!(resolve(source), "dbi:Pg:host=db.example.com;dbname=app");
}

#[test]
fn test_rendered_string_mysql_port_no_host() {
    let source = ConfigSource::from_pairs(&["driver", "mysql", "database", "app", "port", "3306"]).unwrap();
    assert_eq!(resolve(source), "dbi:mysql:port=3306;database=app");
}

/// The prefix appears exactly once at the start of the string.
#[test]
fn test_prefix_occurs_once() {
    let source = ConfigSource::from_pairs(&["driver", "Pg", "database", "app"]).unwrap();
    let rendered = resolve(source);

    assert!(rendered.starts_with("dbi:Pg:"));
    assert_eq!(rendered.matches("dbi:Pg:").count(), 1);
}

#[test]
fn test_username_defaults_to_os_user() {
    let source = ConfigSource::from_pairs(&["driver", "Pg", "database", "app"]).unwrap();
    let (_, credentials) = ConnectRequest::new().config(source).resolve().unwrap();
    assert_eq!(credentials.username, whoami::username());
}

#[test]
fn test_configured_username_wins() {
    let source =
        ConfigSource::from_pairs(&["driver", "Pg", "database", "app", "username", "svc"]).unwrap();
    let (_, credentials) = ConnectRequest::new().config(source).resolve().unwrap();
    assert_eq!(credentials.username, "svc");
}

#[test]
fn test_section_selection() {
    let config: toml::Value = toml::from_str(
        r#"
        [database]
        driver = "Pg"
        database = "app"

        [reporting]
        driver = "mysql"
        database = "reports"
        "#,
    )
    .unwrap();

    let default = ConnectRequest::new().config(ConfigSource::from_toml(&config).unwrap());
    assert_eq!(default.resolve().unwrap().0.as_str(), "dbi:Pg:dbname=app");

    let reporting = ConnectRequest::new()
        .config(ConfigSource::from_toml(&config).unwrap())
        .section("reporting");
    assert_eq!(reporting.resolve().unwrap().0.as_str(), "dbi:mysql:database=reports");
}

#[test]
fn test_missing_driver() {
    let source = ConfigSource::from_pairs(&["database", "app"]).unwrap();
    let err = ConnectRequest::new().config(source).resolve().unwrap_err();
    assert!(matches!(err, AdapterError::MissingDriver { section } if section == "database"));
}

#[test]
fn test_no_parameters() {
    let err = ConnectRequest::new().resolve().unwrap_err();
    assert!(matches!(err, AdapterError::NoParameters));
}

#[test]
fn test_unknown_config_shapes() {
    let err = ConfigSource::from_json(&serde_json::json!(["driver", "Pg"])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownConfigType(_)));

    let err = ConfigSource::from_json(&serde_json::json!("dbi:Pg:dbname=app")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownConfigType(_)));
}

#[test]
fn test_odd_pair_list() {
    let err = ConfigSource::from_pairs(&["driver", "Pg", "database"]).unwrap_err();
    assert!(matches!(err, ConfigError::OddArgumentCount { len: 3 }));
}

#[test]
fn test_unknown_driver_and_registration() {
    let source = ConfigSource::from_pairs(&["driver", "Oracle", "database", "orcl"]).unwrap();
    let err = ConnectRequest::new().config(source).resolve().unwrap_err();
    assert!(matches!(err, AdapterError::UnknownDriver(name) if name == "Oracle"));

    let source = ConfigSource::from_pairs(&["driver", "Oracle", "database", "orcl"]).unwrap();
    let (dsn, _) = ConnectRequest::new()
        .config(source)
        .drivers(DriverTable::new().register("Oracle", "sid"))
        .resolve()
        .unwrap();
    assert_eq!(dsn.as_str(), "dbi:Oracle:sid=orcl");
}

#[test]
fn test_options_fragment_is_appended_verbatim() {
    let source = ConfigSource::from_pairs(&[
        "driver", "Pg",
        "host", "localhost",
        "database", "app",
        "options", "sslmode=require;connect_timeout=10",
    ])
    .unwrap();
    assert_eq!(
        resolve(source),
        "dbi:Pg:host=localhost;dbname=app;sslmode=require;connect_timeout=10"
    );
}
