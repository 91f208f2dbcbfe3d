//! Main commands enum and primary subcommands.

use clap::Subcommand;
use specfit_core::ProfileKind;

use crate::catalog_commands::CatalogCommand;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the titles that can be checked
    Titles,

    /// Compare this machine against a title's requirements
    Check {
        /// Title name as shown by `specfit titles` (case-insensitive)
        title: String,
        /// Requirement tier to compare against (minimum or recommended)
        #[arg(short, long, default_value_t = ProfileKind::Minimum)]
        kind: ProfileKind,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Retry an unavailable catalog this many times
        #[arg(long, default_value_t = 0)]
        retries: u8,
    },

    /// Show the hardware specs sampled from this machine
    Specs {
        /// Print the specs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the requirement catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
}
