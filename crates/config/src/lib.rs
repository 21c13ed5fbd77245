//! Configuration loading, validation, and management for Kadro.
//!
//! Loads configuration from `~/.kadro/config.toml` with environment
//! variable overrides. Validates all settings at startup. Configuration
//! only shapes the boundary around the engine (fallback agent, baseline
//! overrides); the agent roster itself is compiled in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.kadro/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Agent used when a caller asks for one that does not exist and
    /// `registry.fallback_to_default` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_agent: Option<String>,

    /// Registry boundary behavior
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Token estimation and baseline accounting
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Compose `default_agent` instead of failing on an unknown agent
    #[serde(default)]
    pub fallback_to_default: bool,
}

/// Telemetry and optimization baseline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether token estimates are shown alongside composed prompts
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Extra or replacement baselines (agent id → token counts)
    #[serde(default)]
    pub baselines: BTreeMap<String, BaselineOverrideConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            baselines: BTreeMap::new(),
        }
    }
}

/// Baseline counts above this cannot be reported exactly.
pub const MAX_BASELINE_TOKENS: u64 = i64::MAX as u64;

/// A recorded before/after token estimate for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineOverrideConfig {
    pub original_tokens: u64,
    pub optimized_tokens: u64,
}

impl AppConfig {
    /// Load configuration from the default path (~/.kadro/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `KADRO_DEFAULT_AGENT`
    /// - `KADRO_FALLBACK_TO_DEFAULT` (`true`/`1` or `false`/`0`)
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes the lookup as a closure so tests don't touch the process env.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(agent) = lookup("KADRO_DEFAULT_AGENT") {
            self.default_agent = Some(agent);
        }

        if let Some(raw) = lookup("KADRO_FALLBACK_TO_DEFAULT") {
            self.registry.fallback_to_default = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "KADRO_FALLBACK_TO_DEFAULT must be true or false, got '{other}'"
                    )));
                }
            };
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".kadro")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(agent) = &self.default_agent {
            if agent.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "default_agent must not be empty".into(),
                ));
            }
        }

        if self.registry.fallback_to_default && self.default_agent.is_none() {
            return Err(ConfigError::ValidationError(
                "registry.fallback_to_default requires default_agent".into(),
            ));
        }

        for (agent, baseline) in &self.telemetry.baselines {
            if baseline.original_tokens == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "telemetry.baselines.{agent}.original_tokens must be > 0"
                )));
            }
            if baseline.original_tokens > MAX_BASELINE_TOKENS
                || baseline.optimized_tokens > MAX_BASELINE_TOKENS
            {
                return Err(ConfigError::ValidationError(format!(
                    "telemetry.baselines.{agent} token counts must not exceed {MAX_BASELINE_TOKENS}"
                )));
            }
        }

        Ok(())
    }

    /// The agent to compose in place of an unknown one, if fallback is on.
    pub fn fallback_agent(&self) -> Option<&str> {
        if self.registry.fallback_to_default {
            self.default_agent.as_deref()
        } else {
            None
        }
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
