//! Core services - the application's business logic layer.
//!
//! `ComparisonEngine` is the pure rule set; `RequirementCheckService`
//! orchestrates one request across the catalog and probe ports. Neither
//! knows about concrete adapters.

mod comparison;
mod requirement_check;

pub use comparison::{ComparisonEngine, ValidationError};
pub use requirement_check::{CheckError, RequirementCheckService};
