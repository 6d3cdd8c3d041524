use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gympass` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gympass",
    version,
    about = "gympass - geofenced gym check-ins"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Database path (overrides `database.path`; `:memory:` for a throwaway store)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            db: self.db.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
