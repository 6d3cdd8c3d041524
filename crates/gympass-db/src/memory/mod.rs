//! In-memory adapters for the repository ports.
//!
//! Linear scans over `Vec`s behind a `tokio::sync::Mutex`. Used by tests and
//! by callers that do not need persistence.

mod check_ins;
mod gyms;

pub use check_ins::InMemoryCheckInLedger;
pub use gyms::InMemoryGymDirectory;

use gympass_core::errors::CoreError;

use crate::MAX_ID_ATTEMPTS;
use crate::error::DatabaseError;

/// Draw ids from `next_id` until one is not held by any of `items`.
fn unused_id<T>(
    items: &[T],
    id_of: impl Fn(&T) -> &str,
    mut next_id: impl FnMut() -> Result<String, CoreError>,
) -> Result<String, DatabaseError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = next_id()?;
        if !items.iter().any(|item| id_of(item) == id) {
            return Ok(id);
        }
    }
    Err(DatabaseError::Other(anyhow::anyhow!(
        "no unused id after {MAX_ID_ATTEMPTS} attempts"
    )))
}

fn page_slice<T: Clone>(items: &[T], page: u32) -> Vec<T> {
    let offset = usize::try_from(gympass_core::page_offset(page)).unwrap_or(usize::MAX);
    items
        .iter()
        .skip(offset)
        .take(gympass_core::PAGE_SIZE as usize)
        .cloned()
        .collect()
}
