use gympass_core::entities::NewGym;
use gympass_core::geo::Coordinate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GymCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gympass gym`.
pub async fn handle(
    action: &GymCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GymCommands::Create {
            title,
            description,
            phone,
            latitude,
            longitude,
        } => {
            let mut gym = NewGym::new(title.as_str(), *latitude, *longitude);
            gym.description.clone_from(description);
            gym.phone.clone_from(phone);
            let created = ctx.service.create_gym(gym).await?;
            output(&created, flags.format)
        }
        GymCommands::Search { query, page } => {
            let gyms = ctx.service.search_gyms(query, *page).await?;
            output(&gyms, flags.format)
        }
        GymCommands::Nearby {
            latitude,
            longitude,
        } => {
            let gyms = ctx
                .service
                .fetch_nearby_gyms(Coordinate::new(*latitude, *longitude))
                .await?;
            output(&gyms, flags.format)
        }
    }
}
