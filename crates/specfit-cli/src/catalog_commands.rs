//! Catalog maintenance subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use specfit_core::ProfileKind;

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Create the catalog file and tables
    Init,

    /// Insert or replace requirement rows from a JSON file
    Import {
        /// JSON array of requirement profiles
        file: PathBuf,
    },

    /// Import the bundled sample requirements for the built-in titles
    Seed,

    /// List stored requirement rows
    List {
        /// Only show one tier (defaults to both)
        #[arg(short, long)]
        kind: Option<ProfileKind>,
    },
}
