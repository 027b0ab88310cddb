//! The closed set of supported configuration shapes.
//!
//! The original capability-probing is pushed to the boundary: callers either
//! construct the variant they have explicitly, or hand a `toml`/`serde_json`
//! value to the detection adapters, which pick the matching shape once and
//! up front. The core settings extraction never inspects types.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// A config object that answers value lookups by section and key.
pub trait SectionValueLookup: Send + Sync {
    /// Get the value stored under `key` in `section`, if any.
    fn value(&self, section: &str, key: &str) -> Option<String>;
}

/// A config object that hands out a whole section as a sub-mapping.
pub trait SectionBlockLookup: Send + Sync {
    /// Get the sub-mapping stored under `section`, if any.
    fn block(&self, section: &str) -> Option<HashMap<String, String>>;
}

/// A configuration source in one of the supported shapes.
///
/// | Variant | Section access |
/// |---|---|
/// | `Mapping` | settings are top-level keys; the section name is ignored |
/// | `SectionValue` | `value(section, key)` |
/// | `SectionBlock` | `block(section)`, then index by key |
/// | `NestedMapping` | `map[section][key]` |
pub enum ConfigSource {
    /// A plain string-keyed mapping holding the settings directly.
    Mapping(HashMap<String, String>),
    /// An object queried by section and key.
    SectionValue(Box<dyn SectionValueLookup>),
    /// An object that returns whole section blocks.
    SectionBlock(Box<dyn SectionBlockLookup>),
    /// A mapping of section names to sub-mappings.
    NestedMapping(HashMap<String, HashMap<String, String>>),
}

impl ConfigSource {
    /// Wrap a plain key/value mapping.
    pub fn mapping(map: HashMap<String, String>) -> Self {
        Self::Mapping(map)
    }

    /// Wrap a nested section-to-settings mapping.
    pub fn nested(map: HashMap<String, HashMap<String, String>>) -> Self {
        Self::NestedMapping(map)
    }

    /// Wrap an object that answers section/key value lookups.
    pub fn section_value(lookup: impl SectionValueLookup + 'static) -> Self {
        Self::SectionValue(Box::new(lookup))
    }

    /// Wrap an object that hands out whole section blocks.
    pub fn section_block(lookup: impl SectionBlockLookup + 'static) -> Self {
        Self::SectionBlock(Box::new(lookup))
    }

    /// Build a plain mapping from a flattened key/value list.
    ///
    /// An odd-length list has an unpaired key and is rejected.
    ///
    /// ```rust
    /// use dbwire_config::ConfigSource;
    ///
    /// let source = ConfigSource::from_pairs(&["driver", "Pg", "database", "app"]).unwrap();
    /// assert!(ConfigSource::from_pairs(&["driver", "Pg", "database"]).is_err());
    /// # drop(source);
    /// ```
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> ConfigResult<Self> {
        if pairs.len() % 2 != 0 {
            return Err(ConfigError::OddArgumentCount { len: pairs.len() });
        }
        let map = pairs
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
            .collect();
        Ok(Self::Mapping(map))
    }

    /// Detect the shape of a TOML value.
    ///
    /// A table whose entries are all sub-tables becomes a nested mapping;
    /// a table of scalars becomes a plain mapping. Nested is probed first,
    /// mirroring the lookup order the detection replaces. Anything else
    /// (array, scalar, a table mixing the two) is rejected.
    pub fn from_toml(value: &toml::Value) -> ConfigResult<Self> {
        let table = value
            .as_table()
            .ok_or_else(|| ConfigError::unknown_type(value.type_str()))?;

        if !table.is_empty() && table.values().all(toml::Value::is_table) {
            let mut sections = HashMap::with_capacity(table.len());
            for (name, sub) in table {
                let Some(sub) = sub.as_table() else { continue };
                sections.insert(name.clone(), toml_entries(sub)?);
            }
            debug!(sections = sections.len(), "configuration detected as nested mapping");
            return Ok(Self::NestedMapping(sections));
        }

        let entries = toml_entries(table)?;
        debug!(keys = entries.len(), "configuration detected as plain mapping");
        Ok(Self::Mapping(entries))
    }

    /// Detect the shape of a JSON value.
    ///
    /// Same rules as [`ConfigSource::from_toml`]; `null` entries are treated
    /// as absent rather than rejected.
    pub fn from_json(value: &serde_json::Value) -> ConfigResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::unknown_type(json_type_name(value)))?;

        if !object.is_empty() && object.values().all(serde_json::Value::is_object) {
            let mut sections = HashMap::with_capacity(object.len());
            for (name, sub) in object {
                let Some(sub) = sub.as_object() else { continue };
                sections.insert(name.clone(), json_entries(sub)?);
            }
            debug!(sections = sections.len(), "configuration detected as nested mapping");
            return Ok(Self::NestedMapping(sections));
        }

        let entries = json_entries(object)?;
        debug!(keys = entries.len(), "configuration detected as plain mapping");
        Ok(Self::Mapping(entries))
    }

    /// Look up a single setting through the shape-specific access path.
    ///
    /// Plain mappings ignore the section name. For block-style sources this
    /// fetches the block on every call; [`crate::Settings::from_source`]
    /// fetches it once instead.
    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        match self {
            Self::Mapping(map) => map.get(key).cloned(),
            Self::SectionValue(lookup) => lookup.value(section, key),
            Self::SectionBlock(lookup) => lookup.block(section).and_then(|block| block.get(key).cloned()),
            Self::NestedMapping(map) => map.get(section).and_then(|sub| sub.get(key).cloned()),
        }
    }

    /// Name of the detected shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::SectionValue(_) => "section-value",
            Self::SectionBlock(_) => "section-block",
            Self::NestedMapping(_) => "nested-mapping",
        }
    }
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(map) => f.debug_tuple("Mapping").field(map).finish(),
            Self::SectionValue(_) => f.write_str("SectionValue(..)"),
            Self::SectionBlock(_) => f.write_str("SectionBlock(..)"),
            Self::NestedMapping(map) => f.debug_tuple("NestedMapping").field(map).finish(),
        }
    }
}

impl From<HashMap<String, String>> for ConfigSource {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Mapping(map)
    }
}

impl From<HashMap<String, HashMap<String, String>>> for ConfigSource {
    fn from(map: HashMap<String, HashMap<String, String>>) -> Self {
        Self::NestedMapping(map)
    }
}

fn toml_entries(table: &toml::Table) -> ConfigResult<HashMap<String, String>> {
    let mut entries = HashMap::with_capacity(table.len());
    for (key, value) in table {
        let scalar = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            other => {
                return Err(ConfigError::unknown_type(format!(
                    "{} value at key '{key}'",
                    other.type_str()
                )));
            }
        };
        entries.insert(key.clone(), scalar);
    }
    Ok(entries)
}

fn json_entries(object: &serde_json::Map<String, serde_json::Value>) -> ConfigResult<HashMap<String, String>> {
    let mut entries = HashMap::with_capacity(object.len());
    for (key, value) in object {
        match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => {
                entries.insert(key.clone(), s.clone());
            }
            serde_json::Value::Number(n) => {
                entries.insert(key.clone(), n.to_string());
            }
            serde_json::Value::Bool(b) => {
                entries.insert(key.clone(), b.to_string());
            }
            other => {
                return Err(ConfigError::unknown_type(format!(
                    "{} value at key '{key}'",
                    json_type_name(other)
                )));
            }
        }
    }
    Ok(entries)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toml(input: &str) -> toml::Value {
        input.parse().unwrap()
    }

    #[test]
    fn test_from_toml_nested() {
        let source = ConfigSource::from_toml(&toml(
            r#"
            [database]
            driver = "Pg"
            port = 5432
            "#,
        ))
        .unwrap();

        assert_eq!(source.shape_name(), "nested-mapping");
        assert_eq!(source.get("database", "driver"), Some("Pg".to_string()));
        // Scalars are stringified on the way in.
        assert_eq!(source.get("database", "port"), Some("5432".to_string()));
        assert_eq!(source.get("other", "driver"), None);
    }

    #[test]
    fn test_from_toml_plain() {
        let source = ConfigSource::from_toml(&toml(
            r#"
            driver = "SQLite"
            database = "/tmp/app.db"
            "#,
        ))
        .unwrap();

        assert_eq!(source.shape_name(), "mapping");
        // Plain mappings ignore the section name.
        assert_eq!(source.get("anything", "driver"), Some("SQLite".to_string()));
    }

    #[test]
    fn test_from_toml_rejects_non_table() {
        let array = toml::Value::Array(vec![toml::Value::Integer(1), toml::Value::Integer(2)]);
        let err = ConfigSource::from_toml(&array).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownConfigType(_)));
    }

    #[test]
    fn test_from_toml_rejects_mixed_table() {
        let err = ConfigSource::from_toml(&toml(
            r#"
            driver = "Pg"
            [extra]
            key = "value"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownConfigType(_)));
    }

    #[test]
    fn test_from_json_shapes() {
        let nested = ConfigSource::from_json(&serde_json::json!({
            "database": { "driver": "mysql", "port": 3306 }
        }))
        .unwrap();
        assert_eq!(nested.get("database", "port"), Some("3306".to_string()));

        let plain = ConfigSource::from_json(&serde_json::json!({
            "driver": "Pg", "password": null
        }))
        .unwrap();
        assert_eq!(plain.get("database", "driver"), Some("Pg".to_string()));
        assert_eq!(plain.get("database", "password"), None);

        let err = ConfigSource::from_json(&serde_json::json!(["driver", "Pg"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownConfigType(_)));
    }

    #[test]
    fn test_from_pairs() {
        let source = ConfigSource::from_pairs(&["driver", "Pg", "database", "app"]).unwrap();
        assert_eq!(source.get("database", "database"), Some("app".to_string()));

        let err = ConfigSource::from_pairs(&["driver", "Pg", "database"]).unwrap_err();
        assert!(matches!(err, ConfigError::OddArgumentCount { len: 3 }));
    }

    #[test]
    fn test_lookup_shapes() {
        struct ByValue;
        impl SectionValueLookup for ByValue {
            fn value(&self, section: &str, key: &str) -> Option<String> {
                (section == "database" && key == "driver").then(|| "Mock".to_string())
            }
        }

        struct ByBlock;
        impl SectionBlockLookup for ByBlock {
            fn block(&self, section: &str) -> Option<HashMap<String, String>> {
                (section == "database")
                    .then(|| HashMap::from([("driver".to_string(), "Mock".to_string())]))
            }
        }

        let by_value = ConfigSource::section_value(ByValue);
        assert_eq!(by_value.get("database", "driver"), Some("Mock".to_string()));
        assert_eq!(by_value.get("database", "host"), None);

        let by_block = ConfigSource::section_block(ByBlock);
        assert_eq!(by_block.get("database", "driver"), Some("Mock".to_string()));
        assert_eq!(by_block.get("missing", "driver"), None);
    }
}
