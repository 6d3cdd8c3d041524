use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gympass validate`.
pub async fn handle(
    args: &ValidateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let check_in = ctx
        .service
        .validate_check_in(&args.check_in_id, Utc::now())
        .await?;
    output(&check_in, flags.format)
}
