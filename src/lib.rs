//! Inifold: INI configuration files
//!
//! Reads INI-style text into sections of key/value pairs, answers typed
//! lookups, merges a single level of included files and writes the result
//! back out with the default section first and named sections sorted.

pub mod combine;
pub mod error;
pub mod fs;
pub mod ini;
pub mod logging;
pub mod options;
pub mod parser;
pub mod serializer;
pub mod types;
pub mod value;

pub use error::{IniError, Result};
pub use ini::Ini;
pub use options::{OptionsLoader, ParseOptions};
pub use types::{Key, KeySlice, SectionMap, DEFAULT_SECTION};
