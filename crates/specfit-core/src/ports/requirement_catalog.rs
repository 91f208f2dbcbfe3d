//! Requirement catalog port.
//!
//! The catalog maps an application id and a [`ProfileKind`] to the published
//! thresholds for that title. Implementations live in adapters (e.g.
//! `specfit-db`) and must open, use and release their backing connection
//! within a single call.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ProfileKind, RequirementProfile};

/// Errors that can occur while fetching requirements.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No requirements are stored for this title and tier. Not retryable.
    #[error("No {kind} requirements found for application {application_id}")]
    NotFound {
        application_id: i64,
        kind: ProfileKind,
    },

    /// The backing store could not be reached or queried. May be retried.
    #[error("Requirement catalog unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be decoded. Retrying will not help.
    #[error("Requirement catalog holds a malformed row: {0}")]
    Malformed(String),

    /// The catalog was configured with options the adapter cannot honor.
    #[error("Requirement catalog misconfigured: {0}")]
    Configuration(String),
}

impl CatalogError {
    /// Whether a caller may reasonably retry the same request.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Port for looking up requirement profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequirementCatalog: Send + Sync {
    /// Fetch the thresholds of one title for one tier.
    ///
    /// Deterministic: the same id and kind always return the same profile
    /// while the store is unchanged.
    async fn fetch(
        &self,
        application_id: i64,
        kind: ProfileKind,
    ) -> Result<RequirementProfile, CatalogError>;
}
