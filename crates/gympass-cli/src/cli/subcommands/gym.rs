use clap::Subcommand;

/// Gym directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GymCommands {
    /// Register a gym.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Search gyms by title.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List gyms near a location, nearest first.
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
}
