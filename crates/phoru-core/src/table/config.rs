use std::collections::BTreeMap;

use serde::Deserialize;

use super::{LengthClass, MappingTable};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableConfig {
    #[serde(default)]
    single: BTreeMap<String, String>,
    #[serde(default)]
    double: BTreeMap<String, String>,
    #[serde(default)]
    triple: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mapping table is empty")]
    Empty,
    #[error("[{class}] key {key:?} must be {} characters long", .class.width())]
    KeyLength { class: LengthClass, key: String },
    #[error("key is not lowercase: {0:?}")]
    NotLowercase(String),
    #[error("key contains whitespace: {0:?}")]
    Whitespace(String),
    #[error("value for key {0:?} must be a single character")]
    NotSingleChar(String),
}

/// Parse TOML text into a validated `MappingTable`.
///
/// Duplicate keys inside one section are rejected by the TOML parser.
pub fn parse_table_toml(toml_str: &str) -> Result<MappingTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    let classes = [
        validate_class(LengthClass::Single, config.single)?,
        validate_class(LengthClass::Double, config.double)?,
        validate_class(LengthClass::Triple, config.triple)?,
    ];
    if classes.iter().all(BTreeMap::is_empty) {
        return Err(TableError::Empty);
    }

    Ok(MappingTable { classes })
}

fn validate_class(
    class: LengthClass,
    raw: BTreeMap<String, String>,
) -> Result<BTreeMap<String, char>, TableError> {
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        if key.chars().count() != class.width() {
            return Err(TableError::KeyLength { class, key });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(TableError::Whitespace(key));
        }
        if key.to_lowercase() != key {
            return Err(TableError::NotLowercase(key));
        }
        let mut chars = value.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TableError::NotSingleChar(key)),
        };
        out.insert(key, ch);
    }
    Ok(out)
}
