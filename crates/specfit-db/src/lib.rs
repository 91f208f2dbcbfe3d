//! SQL-backed requirement catalog for specfit.
//!
//! Requirements live in two tables, `specs_min` and `specs_rec`, keyed by
//! application id. [`SqlRequirementCatalog`] implements the core
//! `RequirementCatalog` port and opens a fresh connection for every call.

#![deny(unsafe_code)]

pub mod repositories;
pub mod seed;
pub mod setup;

// Re-export repository implementations
pub use repositories::{CatalogRow, SqlRequirementCatalog};

// Re-export setup functions for convenient access
pub use seed::bundled_seed;
pub use setup::setup_catalog;
