//! Shared configuration loader for the adoc toolchain.
//!
//! `defaults/adoc.default.toml` is embedded into every binary, so the documented defaults are
//! the ones in effect. Applications layer user files and single key overrides on top of them
//! via [`Loader`] before deserializing into [`AdocConfig`].

use adoc_babel::{HtmlFragmentParser, Syntax};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/adoc.default.toml");

/// Top-level configuration consumed by adoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AdocConfig {
    pub translate: TranslateConfig,
    pub fragment: FragmentConfig,
    pub output: OutputConfig,
}

/// Knobs of the document translator.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateConfig {
    pub wiki_mode: bool,
    pub syntax: Syntax,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FragmentConfig {
    pub strict: bool,
}

impl FragmentConfig {
    /// The rich fragment parser described by this configuration
    pub fn html_parser(&self) -> HtmlFragmentParser {
        HtmlFragmentParser::new().strict(self.strict)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How event streams are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One event per line
    Text,
    /// A JSON array of events
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
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

    /// Apply a single key/value override (command line flags end up here).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AdocConfig, ConfigError> {
    Loader::new().build()
}
