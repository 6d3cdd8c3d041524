use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-user check-in totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserMetrics {
    pub check_ins_count: u64,
}
