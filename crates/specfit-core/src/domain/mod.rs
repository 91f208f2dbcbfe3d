//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, hardware access, terminal output).
//!
//! # Structure
//!
//! - `profile` - Requirement and system profiles, dimensions and quantities
//! - `report` - Verdicts and the comparison report
//! - `title` - The closed registry of comparable titles

mod profile;
mod report;
mod title;

pub use profile::{Dimension, ProfileKind, Quantity, RequirementProfile, SystemProfile};
pub use report::{ComparisonReport, DimensionVerdict};
pub use title::{RegistryError, Title, TitleCategory, TitleRegistry};
