//! Requirement catalog maintenance.

use std::path::Path;

use specfit_core::{ProfileKind, RequirementProfile};
use specfit_db::{bundled_seed, setup_catalog};
use tracing::{info, warn};

use crate::bootstrap::CliContext;
use crate::catalog_commands::CatalogCommand;
use crate::error::CliError;
use crate::presentation::render_catalog_rows;

pub async fn execute(ctx: &CliContext, command: CatalogCommand) -> Result<(), CliError> {
    match command {
        CatalogCommand::Init => {
            ensure_schema(ctx).await?;
            println!("Catalog ready at {}", ctx.catalog_config.database);
        }
        CatalogCommand::Import { file } => {
            let profiles = read_import_file(&file)?;
            let count = import(ctx, &profiles).await?;
            println!("Imported {count} requirement rows from {}", file.display());
        }
        CatalogCommand::Seed => {
            let profiles = bundled_seed().map_err(|e| CliError::Data(format!("{e:#}")))?;
            let count = import(ctx, &profiles).await?;
            println!("Seeded {count} requirement rows");
        }
        CatalogCommand::List { kind } => {
            let kinds = kind.map_or_else(|| ProfileKind::ALL.to_vec(), |k| vec![k]);
            let mut sections = Vec::with_capacity(kinds.len());
            for kind in kinds {
                let rows = ctx.catalog.list(kind).await?;
                sections.push(render_catalog_rows(kind, &rows, &ctx.registry));
            }
            println!("{}", sections.join("\n\n"));
        }
    }
    Ok(())
}

/// Parse a JSON array of requirement profiles.
pub fn read_import_file(path: &Path) -> Result<Vec<RequirementProfile>, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    let profiles: Vec<RequirementProfile> = serde_json::from_str(&content)
        .map_err(|e| CliError::Data(format!("{}: {e}", path.display())))?;
    Ok(profiles)
}

async fn ensure_schema(ctx: &CliContext) -> Result<(), CliError> {
    setup_catalog(&ctx.catalog_config)
        .await
        .map_err(|e| CliError::Setup(format!("{e:#}")))
}

async fn import(ctx: &CliContext, profiles: &[RequirementProfile]) -> Result<usize, CliError> {
    ensure_schema(ctx).await?;

    for profile in profiles {
        if ctx.registry.by_id(profile.application_id).is_none() {
            warn!(
                application_id = profile.application_id,
                "Importing requirements for an id missing from the title registry"
            );
        }
    }

    let count = ctx.catalog.import(profiles).await?;
    info!(count, catalog = %ctx.catalog_config.database, "Catalog import complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use specfit_core::{CatalogConfig, ProbeConfig, RequirementCatalog};

    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};

    fn context_in(dir: &tempfile::TempDir) -> CliContext {
        bootstrap(CliConfig {
            catalog: CatalogConfig::sqlite(dir.path().join("data").join("catalog.db")),
            probe: ProbeConfig::default(),
            titles_file: None,
            retailer_host: None,
            color: false,
        })
        .unwrap()
    }

    #[test]
    fn test_read_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(
            &path,
            r#"[{"application_id": 5, "kind": "recommended", "cpu_cores": 4, "ram_gb": 8.0}]"#,
        )
        .unwrap();

        let profiles = read_import_file(&path).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].kind, ProfileKind::Recommended);
        assert_eq!(profiles[0].vram_gb, None);
    }

    #[test]
    fn test_read_import_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(read_import_file(&missing), Err(CliError::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{not json").unwrap();
        assert!(matches!(read_import_file(&broken), Err(CliError::Data(_))));
    }

    #[tokio::test]
    async fn test_seed_then_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(&dir);

        execute(&ctx, CatalogCommand::Seed).await.unwrap();
        let profile = ctx.catalog.fetch(14, ProfileKind::Recommended).await.unwrap();
        assert_eq!(profile.ram_gb, Some(32.0));

        execute(&ctx, CatalogCommand::List { kind: None }).await.unwrap();
    }

    #[tokio::test]
    async fn test_init_creates_nested_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(&dir);

        execute(&ctx, CatalogCommand::Init).await.unwrap();
        assert!(dir.path().join("data").join("catalog.db").exists());
        let rows = ctx.catalog.list(ProfileKind::Minimum).await.unwrap();
        assert!(rows.is_empty());
    }
}
