//! Shared configuration loader for the mdex toolchain.
//!
//! `defaults/mdex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdex::ParseOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdex.default.toml");

/// Top-level configuration consumed by mdex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdexConfig {
    pub parser: ParserConfig,
    pub header: HeaderConfig,
}

/// Body parser settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub smart: bool,
    pub extensions: ExtensionsConfig,
}

/// CommonMark extensions understood by the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionsConfig {
    pub strikethrough: bool,
    pub table: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub footnotes: bool,
    pub superscript: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub validate_yaml: bool,
}

impl From<&MdexConfig> for ParseOptions {
    fn from(config: &MdexConfig) -> Self {
        let extensions = &config.parser.extensions;
        ParseOptions {
            validate_header: config.header.validate_yaml,
            smart: config.parser.smart,
            strikethrough: extensions.strikethrough,
            table: extensions.table,
            autolink: extensions.autolink,
            tasklist: extensions.tasklist,
            footnotes: extensions.footnotes,
            superscript: extensions.superscript,
        }
    }
}

impl From<MdexConfig> for ParseOptions {
    fn from(config: MdexConfig) -> Self {
        ParseOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdexConfig, ConfigError> {
    Loader::new().build()
}
