//! Row mapping helpers for catalog queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use specfit_core::{CatalogError, ProfileKind, RequirementProfile};

/// A stored requirement row together with when it was imported.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub profile: RequirementProfile,
    pub imported_at: Option<DateTime<Utc>>,
}

/// Helper to parse `SQLite` `datetime()` strings.
pub fn parse_datetime(datetime_str: Option<String>) -> Option<DateTime<Utc>> {
    datetime_str.and_then(|s| {
        let trimmed = s.trim_end_matches(" UTC");
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
            .ok()
    })
}

fn decode_error(column: &str, e: &sqlx::Error) -> CatalogError {
    CatalogError::Malformed(format!("column {column}: {e}"))
}

/// Parse a requirement row. NULL thresholds become `None`.
pub fn row_to_profile(row: &SqliteRow, kind: ProfileKind) -> Result<RequirementProfile, CatalogError> {
    let amount = |column: &str| {
        row.try_get::<Option<f64>, _>(column)
            .map_err(|e| decode_error(column, &e))
    };

    Ok(RequirementProfile {
        application_id: row
            .try_get::<i64, _>("id")
            .map_err(|e| decode_error("id", &e))?,
        kind,
        cpu_cores: row
            .try_get::<Option<i64>, _>("cpu_cores")
            .map_err(|e| decode_error("cpu_cores", &e))?,
        cpu_speed_ghz: amount("cpu_speed_ghz")?,
        ram_gb: amount("ram_gb")?,
        storage_gb: amount("storage_gb")?,
        vram_gb: amount("vram_gb")?,
    })
}

/// Parse a requirement row including its import timestamp.
pub fn row_to_catalog_row(row: &SqliteRow, kind: ProfileKind) -> Result<CatalogRow, CatalogError> {
    let imported_at: Option<String> = row
        .try_get("imported_at")
        .map_err(|e| decode_error("imported_at", &e))?;

    Ok(CatalogRow {
        profile: row_to_profile(row, kind)?,
        imported_at: parse_datetime(imported_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime() {
        let parsed = parse_datetime(Some("2024-03-01 12:30:00".to_string())).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T12:30:00+00:00");
        assert!(parse_datetime(Some("yesterday".to_string())).is_none());
        assert!(parse_datetime(None).is_none());
    }
}
