//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::{Args, Parser};
use specfit_core::config::{
    ENV_DB_DATABASE, ENV_DB_DRIVER, ENV_DB_PASSWORD, ENV_DB_SERVER, ENV_DB_USERNAME,
};
use specfit_core::{CatalogConfig, ConfigError};

use crate::commands::Commands;

/// Command-line interface for checking a machine against title requirements.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Debug, Parser)]
#[command(name = "specfit")]
#[command(about = "Check whether this machine meets a game's or application's hardware requirements")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// JSON file replacing the built-in title list
    #[arg(long = "titles", global = true, env = "SPECFIT_TITLES")]
    pub titles: Option<PathBuf>,

    /// Measure free storage on the disk holding this path
    #[arg(long = "storage-path", global = true)]
    pub storage_path: Option<PathBuf>,

    /// Retailer host used for upgrade links (e.g. www.newegg.com)
    #[arg(long = "retailer", global = true, env = "SPECFIT_RETAILER")]
    pub retailer: Option<String>,

    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Requirement catalog connection options.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// Catalog driver (only "sqlite" is supported)
    #[arg(long = "db-driver", env = "DB_DRIVER", global = true)]
    pub driver: Option<String>,

    /// Catalog server host
    #[arg(long = "db-server", env = "DB_SERVER", global = true)]
    pub server: Option<String>,

    /// Catalog database (file path for sqlite)
    #[arg(long = "db-database", env = "DB_DATABASE", global = true)]
    pub database: Option<String>,

    /// Catalog user name
    #[arg(long = "db-username", env = "DB_USERNAME", global = true)]
    pub username: Option<String>,

    /// Catalog password
    #[arg(long = "db-password", env = "DB_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

impl CatalogArgs {
    /// Resolve into a catalog configuration, filling in defaults.
    pub fn to_config(&self) -> Result<CatalogConfig, ConfigError> {
        CatalogConfig::from_lookup(|key| match key {
            ENV_DB_DRIVER => self.driver.clone(),
            ENV_DB_SERVER => self.server.clone(),
            ENV_DB_DATABASE => self.database.clone(),
            ENV_DB_USERNAME => self.username.clone(),
            ENV_DB_PASSWORD => self.password.clone(),
            _ => None,
        })
    }
}
