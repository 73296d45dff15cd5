//! Parse options
//!
//! Separators and parsing switches are captured once when an [`crate::Ini`] is
//! built and never changed by a parse. Options can be assembled in code or
//! loaded from layered sources through the `config` crate.

use crate::error::{IniError, Result};
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default line separator
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Default key/value separator
pub const DEFAULT_KV_SEPARATOR: &str = "=";

/// Default environment prefix for option overrides
pub const DEFAULT_ENV_PREFIX: &str = "INIFOLD";

/// Options controlling how text is split, recognised and written back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    #[serde(default = "default_line_separator")]
    pub line_separator: String,

    #[serde(default = "default_kv_separator")]
    pub kv_separator: String,

    /// Recognise `[name]` header lines
    #[serde(default = "default_true")]
    pub parse_sections: bool,

    /// Skip lines starting with `;` or `#`
    #[serde(default = "default_true")]
    pub skip_comments: bool,

    /// Strip one layer of matching quotes around values
    #[serde(default = "default_true")]
    pub trim_quotes: bool,
}

fn default_line_separator() -> String {
    DEFAULT_LINE_SEPARATOR.to_string()
}

fn default_kv_separator() -> String {
    DEFAULT_KV_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            line_separator: default_line_separator(),
            kv_separator: default_kv_separator(),
            parse_sections: true,
            skip_comments: true,
            trim_quotes: true,
        }
    }
}

impl ParseOptions {
    /// Copy of these options with different separators.
    pub fn with_separators(&self, line_separator: &str, kv_separator: &str) -> Self {
        Self {
            line_separator: line_separator.to_string(),
            kv_separator: kv_separator.to_string(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_separator.is_empty() {
            return Err(IniError::Options(
                "Line separator cannot be empty".to_string(),
            ));
        }
        if self.kv_separator.is_empty() {
            return Err(IniError::Options(
                "Key/value separator cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads [`ParseOptions`] from defaults, an optional file and the environment.
///
/// Precedence, lowest to highest: built-in defaults, the file, then
/// `{PREFIX}_*` environment variables (e.g. `INIFOLD_KV_SEPARATOR`).
pub struct OptionsLoader {
    env_prefix: String,
}

impl Default for OptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsLoader {
    pub fn new() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    pub fn with_env_prefix(prefix: impl Into<String>) -> Self {
        Self {
            env_prefix: prefix.into(),
        }
    }

    /// Load options from defaults and environment only.
    pub fn load(&self) -> Result<ParseOptions> {
        self.build(builder_with_defaults()?)
    }

    /// Load options with a settings file layered between defaults and environment.
    ///
    /// A missing file is ignored.
    pub fn load_from_file(&self, path: &Path) -> Result<ParseOptions> {
        let builder = builder_with_defaults()?.add_source(File::from(path).required(false));
        self.build(builder)
    }

    fn build(&self, builder: ConfigBuilder<config::builder::DefaultState>) -> Result<ParseOptions> {
        let options: ParseOptions = builder
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;
        options.validate()?;
        debug!(
            line_separator = ?options.line_separator,
            kv_separator = ?options.kv_separator,
            "Loaded parse options"
        );
        Ok(options)
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>> {
    let defaults = ParseOptions::default();
    Ok(Config::builder()
        .set_default("line_separator", defaults.line_separator)?
        .set_default("kv_separator", defaults.kv_separator)?
        .set_default("parse_sections", defaults.parse_sections)?
        .set_default("skip_comments", defaults.skip_comments)?
        .set_default("trim_quotes", defaults.trim_quotes)?)
}
