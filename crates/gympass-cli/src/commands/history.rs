use crate::cli::GlobalFlags;
use crate::cli::root_commands::{HistoryArgs, MetricsArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gympass history`.
pub async fn handle_history(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let check_ins = ctx.service.check_in_history(&args.user, args.page).await?;
    output(&check_ins, flags.format)
}

/// Handle `gympass metrics`.
pub async fn handle_metrics(
    args: &MetricsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let metrics = ctx.service.user_metrics(&args.user).await?;
    output(&metrics, flags.format)
}
