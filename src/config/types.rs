//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SolidResult;
use crate::playground::Fixtures;
use crate::principle::Principle;

use super::loader::{self, ConfigWarning, EnvWarning};

/// Which principles to run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrinciplesConfig {
    #[serde(default)]
    pub enabled: Vec<Principle>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise verbosity by `count` steps, saturating at `Debug`
    pub fn raised(self, count: u8) -> Self {
        let steps = [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ];
        let current = steps.iter().position(|v| *v == self).unwrap_or(1);
        let index = (current + count as usize).min(steps.len() - 1);
        steps[index]
    }

    /// Most detailed log level shown at this verbosity
    pub fn level(self) -> tracing::Level {
        match self {
            Verbosity::Quiet => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::WARN,
            Verbosity::Verbose => tracing::Level::INFO,
            Verbosity::Debug => tracing::Level::DEBUG,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub principles: PrinciplesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub fixtures: Fixtures,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SolidResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SolidResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, origin: &Path) -> SolidResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, origin)
    }

    /// Apply environment variable overrides (SOLID_* prefix), returning the
    /// values that were not recognised.
    pub fn with_env_overrides(self) -> (Self, Vec<EnvWarning>) {
        loader::with_env_overrides(self)
    }

    /// Enabled principles in S-O-L-I-D order (all if empty)
    pub fn enabled_principles(&self) -> Vec<Principle> {
        if self.principles.enabled.is_empty() {
            Principle::ALL.to_vec()
        } else {
            let mut enabled = self.principles.enabled.clone();
            enabled.sort();
            enabled.dedup();
            enabled
        }
    }
}
