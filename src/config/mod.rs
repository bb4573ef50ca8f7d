//! Configuration module for the SOLID playground
//!
//! Precedence:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SOLID_*)
//! 3. Config file passed with `--config`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, EnvWarning};
pub use types::{Config, OutputConfig, OutputFormat, PrinciplesConfig, Verbosity};
