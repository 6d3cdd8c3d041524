//! ID prefixes and generation.
//!
//! Every entity ID is `{prefix}-{8 hex chars}`, e.g. `chk-a3f8b2c1`. The libSQL
//! adapter generates IDs in SQL with `randomblob(4)`; the in-memory adapters use
//! [`generate_id`], which produces the same shape.

use crate::errors::CoreError;

pub const PREFIX_GYM: &str = "gym";
pub const PREFIX_CHECK_IN: &str = "chk";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_GYM, PREFIX_CHECK_IN];

/// Generate a prefixed random ID from the OS random source.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut buf = [0u8; 4];
    getrandom::fill(&mut buf)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_prefix_and_hex_suffix() {
        for prefix in ALL_PREFIXES {
            let id = generate_id(prefix).unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
            let suffix = &id[prefix.len() + 1..];
            assert_eq!(suffix.len(), 8);
            assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()), "{id}");
        }
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_id(PREFIX_CHECK_IN).unwrap();
        let b = generate_id(PREFIX_CHECK_IN).unwrap();
        assert_ne!(a, b);
    }
}
