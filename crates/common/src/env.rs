//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Create the directory holding the SQLite file, if the URL points at one.
///
/// In-memory URLs and bare file names need nothing.
pub async fn ensure_data_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(dir) = sqlite_parent_dir(database_url) else {
        return Ok(());
    };
    if tokio::fs::metadata(&dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(dir = %dir.display(), "created data directory");
    Ok(())
}

/// Warn when the configured URL does not look like a SQLite location.
pub fn check_database_url(database_url: &str) {
    if !database_url.starts_with("sqlite:") {
        warn!(%database_url, "database url is not a sqlite url; connection will likely fail");
    }
}

fn sqlite_parent_dir(database_url: &str) -> Option<std::path::PathBuf> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    let parent = Path::new(path).parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    Some(parent.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_dir_of_file_url() {
        let dir = sqlite_parent_dir("sqlite://data/agenda.db?mode=rwc").unwrap();
        assert_eq!(dir, Path::new("data"));
    }

    #[test]
    fn memory_and_bare_files_need_no_dir() {
        assert!(sqlite_parent_dir("sqlite::memory:").is_none());
        assert!(sqlite_parent_dir("sqlite://agenda.db").is_none());
        assert!(sqlite_parent_dir("postgres://localhost/db").is_none());
    }

    #[tokio::test]
    async fn creates_missing_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("agenda-env-{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}/agenda.db?mode=rwc", dir.display());
        ensure_data_dir(&url).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
