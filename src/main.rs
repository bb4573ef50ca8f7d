//! solid - runnable before/after demonstrations of the SOLID principles
//!
//! Usage: solid <COMMAND>
//!
//! Commands:
//!   list    List the principles with their keys
//!   run     Run principle demonstrations and print what they inspect

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::warn;

use cli::{Cli, Commands};
use solid::config::Verbosity;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = commands::load_config(cli.config.as_deref())?;
    init_tracing(config.output.verbosity.raised(cli.verbose));
    for warning in &warnings {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::List => commands::list::cmd_list(),
        Commands::Run { principles, format } => {
            commands::run::cmd_run(&config, &principles, format.map(Into::into))
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(verbosity.level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();

    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
