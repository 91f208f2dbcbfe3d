//! Requirement check service - one comparison request end to end.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::comparison::{ComparisonEngine, ValidationError};
use crate::config::RetryPolicy;
use crate::domain::{ComparisonReport, ProfileKind, RequirementProfile, SystemProfile};
use crate::ports::{CatalogError, HardwareProbe, ProbeError, RequirementCatalog};

/// Why a comparison could not be produced.
///
/// Every variant is local to one request; nothing is left behind.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CheckError {
    /// Explanation shown to the user in place of a report.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Catalog(CatalogError::NotFound { .. }) => "No data available for this title.",
            Self::Catalog(CatalogError::Unavailable(_)) => {
                "The requirement catalog is currently unavailable."
            }
            Self::Catalog(CatalogError::Configuration(_)) => {
                "The requirement catalog is not configured correctly."
            }
            Self::Probe(_) => "Could not determine system specs.",
            Self::Catalog(CatalogError::Malformed(_)) | Self::Validation(_) => {
                "The stored requirements for this title are invalid."
            }
        }
    }
}

/// Service composing the catalog, the probe and the comparison engine.
#[derive(Clone)]
pub struct RequirementCheckService {
    catalog: Arc<dyn RequirementCatalog>,
    probe: Arc<dyn HardwareProbe>,
}

impl RequirementCheckService {
    /// Create a new requirement check service.
    pub fn new(catalog: Arc<dyn RequirementCatalog>, probe: Arc<dyn HardwareProbe>) -> Self {
        Self { catalog, probe }
    }

    /// Fetch requirements, sample the host, and compare. No retries.
    pub async fn check(
        &self,
        application_id: i64,
        kind: ProfileKind,
    ) -> Result<ComparisonReport, CheckError> {
        self.check_with_retry(application_id, kind, RetryPolicy::none())
            .await
    }

    /// Like [`check`](Self::check), retrying transient catalog failures.
    pub async fn check_with_retry(
        &self,
        application_id: i64,
        kind: ProfileKind,
        policy: RetryPolicy,
    ) -> Result<ComparisonReport, CheckError> {
        let requirement = self.fetch_with_retry(application_id, kind, policy).await?;
        let system = self.system_profile()?;
        let report = ComparisonEngine::compare(&requirement, &system)?;
        debug!(
            application_id,
            %kind,
            failures = report.failures().count(),
            "Comparison complete"
        );
        Ok(report)
    }

    /// Take a fresh sample of the current host.
    pub fn system_profile(&self) -> Result<SystemProfile, CheckError> {
        let system = self.probe.sample()?;
        debug!(?system, "Sampled system profile");
        Ok(system)
    }

    async fn fetch_with_retry(
        &self,
        application_id: i64,
        kind: ProfileKind,
        policy: RetryPolicy,
    ) -> Result<RequirementProfile, CatalogError> {
        let mut attempt: u8 = 0;
        loop {
            match self.catalog.fetch(application_id, kind).await {
                Ok(profile) => return Ok(profile),
                Err(e) if e.is_transient() && attempt < policy.max_retries => {
                    attempt += 1;
                    let delay = policy.delay_for(attempt);
                    warn!(
                        application_id,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Catalog unavailable, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dimension;
    use crate::ports::{MockHardwareProbe, MockRequirementCatalog};
    use std::time::Duration;

    fn elden_ring_min() -> RequirementProfile {
        RequirementProfile::new(12, ProfileKind::Minimum)
            .with_cpu(6, 3.2)
            .with_ram_gb(12.0)
            .with_vram_gb(3.0)
            .with_storage_gb(60.0)
    }

    fn host() -> SystemProfile {
        SystemProfile {
            cpu_cores: 8,
            cpu_speed_ghz: 3.6,
            ram_gb: 16.0,
            storage_gb: 250.0,
            vram_gb: 0.0,
        }
    }

    fn probe_returning(system: SystemProfile) -> MockHardwareProbe {
        let mut probe = MockHardwareProbe::new();
        probe.expect_sample().returning(move || Ok(system));
        probe
    }

    #[tokio::test]
    async fn test_check_composes_fetch_sample_compare() {
        let mut catalog = MockRequirementCatalog::new();
        catalog
            .expect_fetch()
            .withf(|id, kind| *id == 12 && *kind == ProfileKind::Minimum)
            .times(1)
            .returning(|_, _| Ok(elden_ring_min()));

        let service =
            RequirementCheckService::new(Arc::new(catalog), Arc::new(probe_returning(host())));
        let report = service.check(12, ProfileKind::Minimum).await.unwrap();

        assert_eq!(report.application_id, 12);
        assert_eq!(report.verdicts.len(), 5);
        assert!(report.verdict(Dimension::CpuCores).unwrap().passed);
        assert!(!report.verdict(Dimension::Vram).unwrap().passed);
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let mut catalog = MockRequirementCatalog::new();
        catalog.expect_fetch().times(1).returning(|id, kind| {
            Err(CatalogError::NotFound {
                application_id: id,
                kind,
            })
        });
        let mut probe = MockHardwareProbe::new();
        probe.expect_sample().never();

        let service = RequirementCheckService::new(Arc::new(catalog), Arc::new(probe));
        let err = service
            .check_with_retry(99, ProfileKind::Minimum, RetryPolicy::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Catalog(CatalogError::NotFound { .. })));
        assert_eq!(err.user_message(), "No data available for this title.");
    }

    #[tokio::test]
    async fn test_malformed_row_is_not_retried() {
        let mut catalog = MockRequirementCatalog::new();
        catalog
            .expect_fetch()
            .times(1)
            .returning(|_, _| Err(CatalogError::Malformed("column cpu_cores".into())));
        let mut probe = MockHardwareProbe::new();
        probe.expect_sample().never();

        let service = RequirementCheckService::new(Arc::new(catalog), Arc::new(probe));
        let err = service
            .check_with_retry(12, ProfileKind::Minimum, RetryPolicy::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Catalog(CatalogError::Malformed(_))));
        assert_eq!(
            err.user_message(),
            "The stored requirements for this title are invalid."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_is_retried_then_succeeds() {
        let mut calls = 0;
        let mut catalog = MockRequirementCatalog::new();
        catalog.expect_fetch().times(3).returning(move |_, _| {
            calls += 1;
            if calls < 3 {
                Err(CatalogError::Unavailable("connection refused".into()))
            } else {
                Ok(elden_ring_min())
            }
        });

        let service =
            RequirementCheckService::new(Arc::new(catalog), Arc::new(probe_returning(host())));
        let policy = RetryPolicy::default().with_base_delay(Duration::from_millis(10));
        let report = service
            .check_with_retry(12, ProfileKind::Minimum, policy)
            .await
            .unwrap();
        assert_eq!(report.application_id, 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_gives_up_after_max_retries() {
        let mut catalog = MockRequirementCatalog::new();
        catalog
            .expect_fetch()
            .times(3)
            .returning(|_, _| Err(CatalogError::Unavailable("timeout".into())));

        let service =
            RequirementCheckService::new(Arc::new(catalog), Arc::new(probe_returning(host())));
        let policy = RetryPolicy::default().with_max_retries(2);
        let err = service
            .check_with_retry(12, ProfileKind::Minimum, policy)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckError::Catalog(CatalogError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_probe_failure_replaces_report() {
        let mut catalog = MockRequirementCatalog::new();
        catalog
            .expect_fetch()
            .returning(|_, _| Ok(elden_ring_min()));
        let mut probe = MockHardwareProbe::new();
        probe
            .expect_sample()
            .returning(|| Err(ProbeError::Cpu("frequency unsupported".into())));

        let service = RequirementCheckService::new(Arc::new(catalog), Arc::new(probe));
        let err = service.check(12, ProfileKind::Minimum).await.unwrap_err();
        assert_eq!(err.user_message(), "Could not determine system specs.");
    }

    #[tokio::test]
    async fn test_invalid_requirements_surface_as_validation_error() {
        let mut catalog = MockRequirementCatalog::new();
        catalog.expect_fetch().returning(|id, kind| {
            Ok(RequirementProfile::new(id, kind)
                .with_cpu(4, 2.5)
                .with_ram_gb(8.0)
                .with_storage_gb(-5.0)
                .with_vram_gb(2.0))
        });

        let service =
            RequirementCheckService::new(Arc::new(catalog), Arc::new(probe_returning(host())));
        let err = service.check(5, ProfileKind::Minimum).await.unwrap_err();
        assert!(matches!(
            err,
            CheckError::Validation(ValidationError::Negative {
                dimension: Dimension::Storage,
                ..
            })
        ));
    }

    #[test]
    fn test_system_profile_samples_each_call() {
        let mut probe = MockHardwareProbe::new();
        probe.expect_sample().times(2).returning(|| Ok(host()));
        let service = RequirementCheckService::new(
            Arc::new(MockRequirementCatalog::new()),
            Arc::new(probe),
        );

        service.system_profile().unwrap();
        service.system_profile().unwrap();
    }
}
