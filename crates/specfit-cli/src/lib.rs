//! Command-line front end for specfit.
//!
//! The binary in `main.rs` parses arguments, bootstraps a [`CliContext`] and
//! dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target and tests
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod catalog_commands;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use catalog_commands::CatalogCommand;
pub use commands::Commands;
pub use error::CliError;
pub use parser::{CatalogArgs, Cli};
