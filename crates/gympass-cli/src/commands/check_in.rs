use chrono::Utc;
use gympass_core::geo::Coordinate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckInArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gympass check-in`.
pub async fn handle(
    args: &CheckInArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let check_in = ctx
        .service
        .check_in(
            &args.user,
            &args.gym,
            Coordinate::new(args.latitude, args.longitude),
            Utc::now(),
        )
        .await?;
    output(&check_in, flags.format)
}
