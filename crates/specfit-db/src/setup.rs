//! Catalog setup and schema.
//!
//! This module provides `setup_catalog()` for creating the catalog file and
//! its tables. Entry points call this before importing requirement rows.

use std::path::Path;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};

use specfit_core::{CatalogConfig, ProfileKind};

/// Columns selected for a requirement row, in schema order.
pub(crate) const REQUIREMENT_COLUMNS: &str =
    "id, cpu_cores, cpu_speed_ghz, ram_gb, storage_gb, vram_gb, imported_at";

/// Table holding the thresholds of one tier.
pub(crate) const fn table_for(kind: ProfileKind) -> &'static str {
    match kind {
        ProfileKind::Minimum => "specs_min",
        ProfileKind::Recommended => "specs_rec",
    }
}

/// Base connection options shared by every catalog connection.
/// Catalog files use rollback-journal mode.
pub(crate) fn connect_options(path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .journal_mode(SqliteJournalMode::Delete)
}

/// Creates the catalog file (if missing) and ensures the schema exists.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration names an unsupported driver
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use specfit_core::CatalogConfig;
/// use specfit_db::setup_catalog;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = CatalogConfig::sqlite("/path/to/catalog.db");
/// setup_catalog(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_catalog(config: &CatalogConfig) -> Result<()> {
    config.validate()?;
    let path = config.sqlite_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut conn = connect_options(&path)
        .create_if_missing(true)
        .connect()
        .await?;

    let result = create_schema(&mut conn).await;
    conn.close().await?;
    result?;

    tracing::debug!(path = %path.display(), "Catalog schema ready");
    Ok(())
}

/// Creates both requirement tables.
///
/// Threshold columns are nullable so that incomplete rows reach the
/// comparison engine's validation instead of being silently defaulted.
/// Safe to call multiple times as all statements use IF NOT EXISTS.
pub(crate) async fn create_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for kind in ProfileKind::ALL {
        let ddl = format!(
            r"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY,
                cpu_cores INTEGER,
                cpu_speed_ghz REAL,
                ram_gb REAL,
                storage_gb REAL,
                vram_gb REAL,
                imported_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            ",
            table_for(kind)
        );
        sqlx::query(&ddl).execute(&mut *conn).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_catalog_creates_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.db");
        let config = CatalogConfig::sqlite(&path);

        setup_catalog(&config).await.unwrap();
        // Second run is a no-op
        setup_catalog(&config).await.unwrap();

        let mut conn = connect_options(&path)
            .connect()
            .await
            .unwrap();
        for kind in ProfileKind::ALL {
            let sql = format!("SELECT COUNT(*) FROM {}", table_for(kind));
            let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&mut conn).await.unwrap();
            assert_eq!(count, 0);
        }
    }

    #[tokio::test]
    async fn test_setup_rejects_unsupported_driver() {
        let mut config = CatalogConfig::sqlite("/tmp/unused.db");
        config.driver = "mssql".to_string();
        assert!(setup_catalog(&config).await.is_err());
    }
}
