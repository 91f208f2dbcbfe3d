//! Core domain for specfit.
//!
//! Compares a machine's measured hardware against the published minimum or
//! recommended requirements of a software title and produces a per-dimension
//! verdict. The comparison itself lives in [`services::ComparisonEngine`] and
//! performs no I/O; requirement storage and hardware sampling are reached only
//! through the traits in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod remediation;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{CatalogConfig, ConfigError, Credentials, ProbeConfig, RetryPolicy};
pub use domain::{
    ComparisonReport, Dimension, DimensionVerdict, ProfileKind, Quantity, RegistryError,
    RequirementProfile, SystemProfile, Title, TitleCategory, TitleRegistry,
};
pub use ports::{CatalogError, HardwareProbe, ProbeError, RequirementCatalog};
pub use remediation::Retailer;
pub use services::{CheckError, ComparisonEngine, RequirementCheckService, ValidationError};

// Silence unused dev-dependency warnings for helpers only used by integration tests
#[cfg(test)]
use tokio_test as _;
