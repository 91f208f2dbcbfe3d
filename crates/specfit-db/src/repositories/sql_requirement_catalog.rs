//! SQL implementation of the `RequirementCatalog` port.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteConnection;
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, warn};

use specfit_core::{CatalogConfig, CatalogError, ProfileKind, RequirementCatalog, RequirementProfile};

use super::row_mappers::{CatalogRow, row_to_catalog_row, row_to_profile};
use crate::setup::{REQUIREMENT_COLUMNS, connect_options, create_schema, table_for};

/// `SQLite` requirement catalog.
///
/// Holds only the connection settings. Every operation opens its own
/// connection and closes it before returning, on success and failure alike.
#[derive(Debug, Clone)]
pub struct SqlRequirementCatalog {
    path: PathBuf,
}

impl SqlRequirementCatalog {
    /// Create a catalog from validated configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        config
            .validate()
            .map_err(|e| CatalogError::Configuration(e.to_string()))?;
        Ok(Self {
            path: config.sqlite_path(),
        })
    }

    async fn open(&self, writable: bool) -> Result<SqliteConnection, CatalogError> {
        connect_options(&self.path)
            .read_only(!writable)
            .create_if_missing(writable)
            .connect()
            .await
            .map_err(|e| {
                CatalogError::Unavailable(format!(
                    "cannot open catalog at {}: {e}",
                    self.path.display()
                ))
            })
    }

    /// Store profiles, replacing any existing row with the same id and tier.
    ///
    /// All rows are written in one transaction; on failure nothing is kept.
    pub async fn import(&self, profiles: &[RequirementProfile]) -> Result<usize, CatalogError> {
        let mut conn = self.open(true).await?;
        let result = import_rows(&mut conn, profiles).await;
        release(conn).await;

        let count = result.map_err(|e| CatalogError::Unavailable(format!("import failed: {e}")))?;
        debug!(count, path = %self.path.display(), "Imported requirement rows");
        Ok(count)
    }

    /// All stored rows of one tier, ordered by application id.
    pub async fn list(&self, kind: ProfileKind) -> Result<Vec<CatalogRow>, CatalogError> {
        let table = table_for(kind);
        let sql = format!("SELECT {REQUIREMENT_COLUMNS} FROM {table} ORDER BY id");

        let mut conn = self.open(false).await?;
        let rows = sqlx::query(&sql).fetch_all(&mut conn).await;
        release(conn).await;

        rows.map_err(|e| CatalogError::Unavailable(format!("query against {table} failed: {e}")))?
            .iter()
            .map(|row| row_to_catalog_row(row, kind))
            .collect()
    }
}

#[async_trait]
impl RequirementCatalog for SqlRequirementCatalog {
    async fn fetch(
        &self,
        application_id: i64,
        kind: ProfileKind,
    ) -> Result<RequirementProfile, CatalogError> {
        let table = table_for(kind);
        let sql = format!("SELECT {REQUIREMENT_COLUMNS} FROM {table} WHERE id = ?");
        debug!(application_id, table, "Fetching requirements");

        let mut conn = self.open(false).await?;
        let row = sqlx::query(&sql)
            .bind(application_id)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        match row {
            Ok(Some(row)) => row_to_profile(&row, kind),
            Ok(None) => Err(CatalogError::NotFound {
                application_id,
                kind,
            }),
            Err(e) => Err(CatalogError::Unavailable(format!(
                "query against {table} failed: {e}"
            ))),
        }
    }
}

async fn import_rows(
    conn: &mut SqliteConnection,
    profiles: &[RequirementProfile],
) -> Result<usize, sqlx::Error> {
    let imported_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let mut tx = conn.begin().await?;
    create_schema(&mut *tx).await?;

    for profile in profiles {
        let sql = format!(
            "INSERT OR REPLACE INTO {} (id, cpu_cores, cpu_speed_ghz, ram_gb, storage_gb, vram_gb, imported_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            table_for(profile.kind)
        );
        sqlx::query(&sql)
            .bind(profile.application_id)
            .bind(profile.cpu_cores)
            .bind(profile.cpu_speed_ghz)
            .bind(profile.ram_gb)
            .bind(profile.storage_gb)
            .bind(profile.vram_gb)
            .bind(&imported_at)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(profiles.len())
}

async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close catalog connection: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_in(dir: &tempfile::TempDir) -> SqlRequirementCatalog {
        SqlRequirementCatalog::new(&CatalogConfig::sqlite(dir.path().join("catalog.db"))).unwrap()
    }

    #[test]
    fn test_new_rejects_unsupported_driver() {
        let mut config = CatalogConfig::sqlite("/tmp/catalog.db");
        config.driver = "postgres".to_string();
        let err = SqlRequirementCatalog::new(&config).unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_fetch_from_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_in(&dir);

        let err = catalog.fetch(12, ProfileKind::Minimum).await.unwrap_err();
        assert!(err.is_transient());
        // Read-only fetch never creates the file
        assert!(!dir.path().join("catalog.db").exists());
    }

    #[tokio::test]
    async fn test_import_replaces_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = catalog_in(&dir);

        let first = RequirementProfile::new(12, ProfileKind::Minimum).with_ram_gb(8.0);
        let second = RequirementProfile::new(12, ProfileKind::Minimum).with_ram_gb(12.0);
        assert_eq!(catalog.import(&[first]).await.unwrap(), 1);
        assert_eq!(catalog.import(&[second.clone()]).await.unwrap(), 1);

        let rows = catalog.list(ProfileKind::Minimum).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].profile, second);
        assert!(rows[0].imported_at.is_some());
        assert!(catalog.list(ProfileKind::Recommended).await.unwrap().is_empty());
    }
}
