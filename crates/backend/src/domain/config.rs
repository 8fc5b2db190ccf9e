//! Configuration for wordfreq.
//!
//! Config priority: explicit path > user (~/.config/wordfreq/config.toml) > defaults

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use serde::{Deserialize, Serialize};

/// Sample sentence sent through both entry paths when none is given
pub const SAMPLE_LIFE: &str = "Life is Life";
/// Second coordinator sample
pub const SAMPLE_DOG: &str = "Dog eat Dog";

// ============================================================================
// Errors
// ============================================================================

/// Errors loading an explicitly requested config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Failed to read config {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Invalid config {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

// ============================================================================
// Actor Configuration
// ============================================================================

/// Actor runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
  /// Deadline for ask-pattern requests, in milliseconds
  pub ask_timeout_ms: u64,

  /// How long shutdown waits for actor tasks to observe cancellation
  pub shutdown_grace_ms: u64,
}

impl Default for ActorConfig {
  fn default() -> Self {
    Self {
      ask_timeout_ms: 5000,
      shutdown_grace_ms: 100,
    }
  }
}

impl ActorConfig {
  pub fn ask_timeout(&self) -> Duration {
    Duration::from_millis(self.ask_timeout_ms)
  }

  pub fn shutdown_grace(&self) -> Duration {
    Duration::from_millis(self.shutdown_grace_ms)
  }
}

// ============================================================================
// Samples
// ============================================================================

/// Default inputs used when the CLI is given no text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
  /// Sentences injected into the coordinator, one request each
  pub coordinator: Vec<String>,
  /// Sentence sent through the ask path
  pub ask: String,
}

impl Default for SamplesConfig {
  fn default() -> Self {
    Self {
      coordinator: vec![SAMPLE_LIFE.to_string(), SAMPLE_DOG.to_string()],
      ask: SAMPLE_LIFE.to_string(),
    }
  }
}

// ============================================================================
// Root Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Default log level (overridden by RUST_LOG)
  pub log_level: String,
  pub actor: ActorConfig,
  pub samples: SamplesConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      log_level: "info".to_string(),
      actor: ActorConfig::default(),
      samples: SamplesConfig::default(),
    }
  }
}

impl Config {
  /// Load the user config, falling back to defaults if it is missing or invalid
  pub fn load() -> Self {
    if let Some(path) = Self::user_config_path()
      && path.exists()
      && let Ok(config) = Self::load_from(&path)
    {
      return config;
    }

    Self::default()
  }

  /// Load a specific config file; errors are surfaced to the caller
  pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("WORDFREQ_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("wordfreq").join("config.toml"))
  }

  /// Render the config as TOML
  pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(self)
  }
}
