//! Latin-to-Cyrillic mapping table.
//!
//! Entries are grouped by the number of Latin characters they consume
//! (one, two or three). Each key maps to exactly one Cyrillic character.
//! The built-in table is embedded as TOML and validated by the build script.

mod config;

use std::collections::BTreeMap;
use std::fmt;

pub use config::{parse_table_toml, TableError};

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

/// Number of source characters a table key spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LengthClass {
    Single,
    Double,
    Triple,
}

impl LengthClass {
    /// Lookup order for greedy matching.
    pub const LONGEST_FIRST: [LengthClass; 3] =
        [LengthClass::Triple, LengthClass::Double, LengthClass::Single];

    /// Listing order for help text and tables.
    pub const ALL: [LengthClass; 3] =
        [LengthClass::Single, LengthClass::Double, LengthClass::Triple];

    pub fn width(self) -> usize {
        match self {
            LengthClass::Single => 1,
            LengthClass::Double => 2,
            LengthClass::Triple => 3,
        }
    }

    /// TOML section name.
    pub fn section(self) -> &'static str {
        match self {
            LengthClass::Single => "single",
            LengthClass::Double => "double",
            LengthClass::Triple => "triple",
        }
    }

    fn index(self) -> usize {
        self.width() - 1
    }
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// Immutable set of Latin → Cyrillic mappings, one map per length class.
///
/// A key may be a prefix of a key in a longer class (`sh` / `shh`); the
/// matcher resolves this by trying the longest class first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    classes: [BTreeMap<String, char>; 3],
}

impl MappingTable {
    /// Parse and validate a table document.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_table_toml(toml_str)
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        parse_table_toml(DEFAULT_TABLE_TOML).expect("embedded mapping table must be valid")
    }

    /// Exact lookup of a lowercase key in one length class.
    pub fn get(&self, class: LengthClass, key: &str) -> Option<char> {
        self.classes[class.index()].get(key).copied()
    }

    /// Entries of one class, sorted by key.
    pub fn entries(&self, class: LengthClass) -> impl Iterator<Item = (&str, char)> + '_ {
        self.classes[class.index()]
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries in one class.
    pub fn class_len(&self, class: LengthClass) -> usize {
        self.classes[class.index()].len()
    }

    /// Total number of entries across all classes.
    pub fn len(&self) -> usize {
        self.classes.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}
