use gympass_core::entities::{CheckIn, Gym, UserMetrics};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `gympass schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Gym => schema_for!(Gym),
        SchemaType::CheckIn => schema_for!(CheckIn),
        SchemaType::UserMetrics => schema_for!(UserMetrics),
    };
    output(&schema, flags.format)
}
