//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SolidError, SolidResult};
use crate::principle::Principle;

use super::types::{Config, OutputFormat, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SolidResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text, attributing warnings and errors to `origin`.
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> SolidResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SolidError::InvalidConfig {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: origin.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Environment override that was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: &'static str,
    pub value: String,
    pub valid: &'static [&'static str],
    pub suggestion: Option<String>,
}

impl EnvWarning {
    fn new(var: &'static str, value: &str, valid: &'static [&'static str]) -> Self {
        Self {
            var,
            value: value.to_string(),
            valid,
            suggestion: suggest_from(&value.to_lowercase(), valid),
        }
    }
}

impl std::fmt::Display for EnvWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.var == "SOLID_PRINCIPLES" { "entry" } else { "value" };
        write!(f, "ignoring {} {} '{}'", self.var, noun, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        write!(f, "; valid values: {}", self.valid.join(", "))
    }
}

const PRINCIPLE_VALUES: &[&str] = &["srp", "ocp", "lsp", "isp", "dip"];
const FORMAT_VALUES: &[&str] = &["text", "json"];
const VERBOSITY_VALUES: &[&str] = &["quiet", "normal", "verbose", "debug"];

/// Apply environment variable overrides (SOLID_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<EnvWarning>) {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Unrecognised values leave the current setting untouched and come back as warnings.
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<EnvWarning>) {
    let mut warnings = Vec::new();

    // SOLID_PRINCIPLES (comma-separated)
    if let Some(list) = lookup("SOLID_PRINCIPLES") {
        let mut parsed: Vec<Principle> = Vec::new();
        for entry in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match entry.parse::<Principle>() {
                Ok(principle) => parsed.push(principle),
                Err(_) => warnings.push(EnvWarning::new(
                    "SOLID_PRINCIPLES",
                    entry,
                    PRINCIPLE_VALUES,
                )),
            }
        }
        if !parsed.is_empty() {
            config.principles.enabled = parsed;
        }
    }

    // SOLID_FORMAT
    if let Some(format) = lookup("SOLID_FORMAT") {
        match format.trim().to_lowercase().as_str() {
            "text" => config.output.format = OutputFormat::Text,
            "json" => config.output.format = OutputFormat::Json,
            _ => warnings.push(EnvWarning::new("SOLID_FORMAT", &format, FORMAT_VALUES)),
        }
    }

    // SOLID_VERBOSITY
    if let Some(verbosity) = lookup("SOLID_VERBOSITY") {
        match verbosity.trim().to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            "debug" => config.output.verbosity = Verbosity::Debug,
            _ => warnings.push(EnvWarning::new(
                "SOLID_VERBOSITY",
                &verbosity,
                VERBOSITY_VALUES,
            )),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "principles",
        "enabled",
        "output",
        "format",
        "verbosity",
        "fixtures",
        "eagle_fly_speed",
        "penguin_swim_speed",
    ];
    suggest_from(unknown, CANDIDATES)
}

/// Closest candidate within two edits, if any.
fn suggest_from(input: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(input, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
