//! # Application Configuration
//!
//! This module defines the configuration structure for the `prodesc-server`
//! and the logic for loading it. Values are layered, later layers winning:
//!
//! 1. Programmatic defaults.
//! 2. An optional `config.yml` (or an explicit path), with `${VAR}` substitution.
//! 3. Plain environment variables for top-level keys such as `PORT`.
//! 4. `PRODESC_`-prefixed variables for nested keys
//!    (e.g., `PRODESC_BACKEND__MODEL`).

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use prodesc::{
    parsing::DEFAULT_MAX_FEATURES,
    providers::ai::ollama::{
        DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
        DEFAULT_TOP_P,
    },
    OllamaOptions, DEFAULT_MAX_TOKENS,
};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use std::{env, fs, path::Path};
use thiserror::Error;
use tracing::info;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap());

/// A custom error type for configuration issues.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate or the file system.
    #[error("Configuration error: {0}")]
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Connection and sampling settings for the generation backend.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Tuning for the parsing pipeline.
    #[serde(default)]
    pub generation: GenerationConfig,
}

fn default_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            backend: BackendConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Settings for the Ollama generation backend.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub api_url: String,
    pub model: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    /// Maximum number of tokens to generate per description.
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl BackendConfig {
    pub fn ollama_options(&self) -> OllamaOptions {
        OllamaOptions {
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            temperature: self.temperature,
            top_p: self.top_p,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// How many extracted features are passed into the prompt.
    pub max_features: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

// Helper to read a file and substitute `${VAR}` placeholders from the environment.
// Returns Ok(None) if the file does not exist. Unset variables become empty strings.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let expanded_content = ENV_PLACEHOLDER.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded_content.into_owned()))
}

/// Loads the application configuration from defaults, a YAML file and the environment.
///
/// With `config_path_override` set, that file must exist. Without it,
/// `config.yml` next to this crate's manifest is used when present, and the
/// built-in defaults otherwise.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            } else {
                info!("'{default_path}' not found. Using built-in defaults.");
            }
            content
        }
    };

    if let Some(content) = file_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Top-level keys like PORT.
        .add_source(Environment::default().try_parsing(true))
        // Nested overrides like PRODESC_BACKEND__MODEL.
        .add_source(
            Environment::with_prefix("PRODESC")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
