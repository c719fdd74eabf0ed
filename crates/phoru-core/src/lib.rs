//! Pseudo-phonetic Latin to Cyrillic Russian transliteration.
//!
//! ```
//! use phoru_core::Transliterator;
//!
//! let t = Transliterator::default();
//! assert_eq!(t.translate_str("Privet mir"), "Привет мир");
//! ```

pub mod table;
pub mod translit;

pub use table::{LengthClass, MappingTable, TableError};
pub use translit::{TranslateError, Transliterator};
