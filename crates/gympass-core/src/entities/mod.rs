//! Entity structs for gympass domain objects.
//!
//! Each persisted entity maps to a table in the libSQL database. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and
//! schema export.

mod check_in;
mod gym;
mod metrics;

pub use check_in::{CheckIn, NewCheckIn};
pub use gym::{Gym, NewGym};
pub use metrics::UserMetrics;
