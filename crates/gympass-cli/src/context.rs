use std::path::Path;

use anyhow::Context;
use gympass_config::GymPassConfig;
use gympass_service::{CheckInPolicy, GymPassService};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: GymPassService,
}

impl AppContext {
    /// Load configuration, open the database, and build the service.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = GymPassConfig::load_with_dotenv().context("failed to load configuration")?;
        let policy = CheckInPolicy::from_config(&config)?;

        let db_path = resolve_db_path(flags, &config);
        ensure_parent_dir(db_path)?;

        let service = GymPassService::open_local(db_path, policy)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?;
        tracing::debug!(db_path, "gympass service ready");

        Ok(Self { service })
    }
}

fn resolve_db_path<'a>(flags: &'a GlobalFlags, config: &'a GymPassConfig) -> &'a str {
    flags.db.as_deref().unwrap_or(&config.database.path)
}

fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::cli::OutputFormat;

    use super::*;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            db: db.map(str::to_string),
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn db_flag_overrides_config() {
        let config = GymPassConfig::default();
        assert_eq!(resolve_db_path(&flags(Some(":memory:")), &config), ":memory:");
        assert_eq!(resolve_db_path(&flags(None), &config), ".gympass/gympass.db");
    }

    #[test]
    fn in_memory_path_needs_no_directory() {
        assert!(ensure_parent_dir(":memory:").is_ok());
        assert!(ensure_parent_dir("gympass.db").is_ok());
    }
}
