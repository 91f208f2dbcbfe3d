//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `sysinfo` types in any signature
//! - Adapters acquire and release their resources inside each call
//! - Failures are reported with the domain error types declared here

pub mod hardware_probe;
pub mod requirement_catalog;

pub use hardware_probe::{HardwareProbe, ProbeError};
pub use requirement_catalog::{CatalogError, RequirementCatalog};

#[cfg(test)]
pub use hardware_probe::MockHardwareProbe;
#[cfg(test)]
pub use requirement_catalog::MockRequirementCatalog;
