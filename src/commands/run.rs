use anyhow::Result;
use tracing::info;

use solid::config::{Config, OutputFormat};
use solid::{render, Playground, Principle};

/// Resolve which principles to run: explicit arguments win, in the order
/// given; otherwise the config decides.
pub fn resolve_principles(args: &[String], config: &Config) -> Result<Vec<Principle>> {
    if args.is_empty() {
        return Ok(config.enabled_principles());
    }
    let principles = args
        .iter()
        .map(|arg| arg.parse::<Principle>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(principles)
}

pub fn cmd_run(config: &Config, args: &[String], format: Option<OutputFormat>) -> Result<()> {
    let principles = resolve_principles(args, config)?;
    let format = format.unwrap_or(config.output.format);
    info!(count = principles.len(), ?format, "running principles");

    let playground = Playground::new(config.fixtures.clone());
    let reports = playground.run_all(&principles);
    print!("{}", render(&reports, format)?);
    Ok(())
}
