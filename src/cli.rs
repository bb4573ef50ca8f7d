use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use solid::config::OutputFormat;

/// solid - runnable before/after demonstrations of the SOLID principles
#[derive(Parser, Debug)]
#[command(name = "solid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the principles with their keys
    List,

    /// Run principle demonstrations and print what they inspect
    Run {
        /// Principles to run (srp, ocp, lsp, isp, dip); defaults to the config
        principles: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
