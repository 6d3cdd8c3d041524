use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::GymCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Gym directory.
    Gym {
        #[command(subcommand)]
        action: GymCommands,
    },
    /// Check a user in at a gym from their current location.
    CheckIn(CheckInArgs),
    /// Validate a pending check-in.
    Validate(ValidateArgs),
    /// A user's check-in history, newest first.
    History(HistoryArgs),
    /// A user's total check-in count.
    Metrics(MetricsArgs),
    /// Print the JSON schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckInArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub gym: String,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    pub check_in_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Clone, Debug, Args)]
pub struct MetricsArgs {
    #[arg(long)]
    pub user: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Gym,
    CheckIn,
    UserMetrics,
}
