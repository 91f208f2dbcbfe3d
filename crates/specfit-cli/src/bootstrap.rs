//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Requirement catalog (via specfit-db)
//! - Hardware probe (via specfit-runtime)
//! - Check service (via specfit-core)
//!
//! Command handlers receive the composed `CliContext` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use specfit_core::{
    CatalogConfig, ProbeConfig, RequirementCheckService, Retailer, TitleRegistry,
};
use specfit_db::SqlRequirementCatalog;
use specfit_runtime::DefaultHardwareProbe;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::Style;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Requirement catalog connection settings.
    pub catalog: CatalogConfig,
    /// Hardware sampling settings.
    pub probe: ProbeConfig,
    /// Title registry file replacing the built-in list.
    pub titles_file: Option<PathBuf>,
    /// Retailer host for upgrade links.
    pub retailer_host: Option<String>,
    /// Colored output requested.
    pub color: bool,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments (which already include
    /// environment fallbacks).
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut probe = ProbeConfig::default();
        if let Some(path) = &cli.storage_path {
            probe = probe.with_storage_path(path.clone());
        }

        Ok(Self {
            catalog: cli.catalog.to_config()?,
            probe,
            titles_file: cli.titles.clone(),
            retailer_host: cli.retailer.clone(),
            color: !cli.no_color,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Orchestrates one comparison request.
    pub service: RequirementCheckService,
    /// Concrete catalog, for maintenance commands.
    pub catalog: Arc<SqlRequirementCatalog>,
    /// Settings the catalog was built from.
    pub catalog_config: CatalogConfig,
    /// Titles that can be checked.
    pub registry: TitleRegistry,
    /// Shop used for upgrade links.
    pub retailer: Retailer,
    /// Output styling.
    pub style: Style,
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Loads the title registry
/// 2. Creates the catalog adapter and the hardware probe
/// 3. Assembles the check service from them
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let registry = match &config.titles_file {
        Some(path) => TitleRegistry::from_json_file(path)?,
        None => TitleRegistry::builtin(),
    };

    let retailer = match &config.retailer_host {
        Some(host) => Retailer::new(host)
            .map_err(|e| CliError::Config(format!("invalid retailer host '{host}': {e}")))?,
        None => Retailer::default(),
    };

    let catalog = Arc::new(SqlRequirementCatalog::new(&config.catalog)?);
    let probe = Arc::new(DefaultHardwareProbe::new(config.probe));
    let service = RequirementCheckService::new(catalog.clone(), probe);

    debug!(
        catalog = %config.catalog.database,
        titles = registry.titles().len(),
        retailer = retailer.host(),
        "CLI context ready"
    );

    Ok(CliContext {
        service,
        catalog,
        catalog_config: config.catalog,
        registry,
        retailer,
        style: Style::detect(config.color),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> CliConfig {
        CliConfig {
            catalog: CatalogConfig::sqlite(dir.path().join("catalog.db")),
            probe: ProbeConfig::default(),
            titles_file: None,
            retailer_host: None,
            color: false,
        }
    }

    #[test]
    fn test_bootstrap_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = bootstrap(config_in(&dir)).unwrap();
        assert_eq!(ctx.registry.titles().len(), 10);
        assert_eq!(ctx.retailer.host(), "www.newegg.com");
        assert!(!ctx.style.is_colored());
    }

    #[test]
    fn test_bootstrap_rejects_bad_retailer() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            retailer_host: Some("shop.example/path".to_string()),
            ..config_in(&dir)
        };
        assert!(matches!(bootstrap(config), Err(CliError::Config(_))));
    }

    #[test]
    fn test_bootstrap_loads_title_file() {
        let dir = tempfile::tempdir().unwrap();
        let titles = dir.path().join("titles.json");
        std::fs::write(
            &titles,
            r#"[{"name": "Doom Eternal", "id": 40, "category": "video_game"}]"#,
        )
        .unwrap();

        let config = CliConfig {
            titles_file: Some(titles),
            ..config_in(&dir)
        };
        let ctx = bootstrap(config).unwrap();
        assert_eq!(ctx.registry.resolve("doom eternal").unwrap().id, 40);
    }
}
