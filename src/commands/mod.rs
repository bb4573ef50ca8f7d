//! Subcommand implementations for the `solid` binary

pub mod list;
pub mod run;

use std::path::Path;

use anyhow::Result;
use solid::config::Config;

/// Load the config file (if any) and apply SOLID_* environment overrides.
///
/// Warnings come back rendered so they can be logged once tracing is up.
pub fn load_config(path: Option<&Path>) -> Result<(Config, Vec<String>)> {
    let (config, file_warnings) = match path {
        Some(path) => Config::load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };
    let (config, env_warnings) = config.with_env_overrides();

    let warnings = file_warnings
        .iter()
        .map(ToString::to_string)
        .chain(env_warnings.iter().map(ToString::to_string))
        .collect();
    Ok((config, warnings))
}
