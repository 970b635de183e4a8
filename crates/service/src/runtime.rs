//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate prepares the
//! database location without depending directly on `common`.

/// Make sure the SQLite file can be created where the URL points.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    common::env::check_database_url(database_url);
    common::env::ensure_data_dir(database_url).await
}
