//! Requirement comparison rules.
//!
//! Storage, RAM and VRAM are independent floor checks. CPU is a two-stage
//! check where core count decides whether clock speed is evaluated at all:
//!
//! | cores vs required | cores verdict | speed verdict            |
//! |-------------------|---------------|--------------------------|
//! | fewer             | fail          | fail (not evaluated)     |
//! | equal             | pass          | `actual >= required`     |
//! | more              | pass          | pass (speed not checked) |
//!
//! The last row is product policy: surplus cores are assumed to make up
//! for a slower clock.
//!
//! Every message ends with the values compared, e.g.
//! `Your RAM is below the minimum specs (have 8.00 GB, need 16.00 GB).`

use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::{
    ComparisonReport, Dimension, DimensionVerdict, ProfileKind, Quantity, RequirementProfile,
    SystemProfile,
};
use crate::remediation::{cpu_query, ram_query, storage_query, vram_query};

/// A requirement profile that cannot be compared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Requirement for {0} is missing")]
    Missing(Dimension),

    #[error("Requirement for {dimension} is negative ({value})")]
    Negative { dimension: Dimension, value: f64 },

    #[error("Requirement for {0} is not a finite number")]
    NotFinite(Dimension),

    #[error("Requirement for {dimension} is out of range ({value})")]
    OutOfRange { dimension: Dimension, value: i64 },
}

impl ValidationError {
    /// Dimension whose threshold was rejected.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Missing(d) | Self::NotFinite(d) => *d,
            Self::Negative { dimension, .. } | Self::OutOfRange { dimension, .. } => *dimension,
        }
    }
}

/// Validated thresholds.
struct Thresholds {
    cpu_cores: u32,
    cpu_speed_ghz: f64,
    ram_gb: f64,
    storage_gb: f64,
    vram_gb: f64,
}

impl Thresholds {
    fn from_profile(profile: &RequirementProfile) -> Result<Self, ValidationError> {
        Ok(Self {
            cpu_cores: validate_count(Dimension::CpuCores, profile.cpu_cores)?,
            cpu_speed_ghz: validate_amount(Dimension::CpuSpeed, profile.cpu_speed_ghz)?,
            ram_gb: validate_amount(Dimension::Ram, profile.ram_gb)?,
            storage_gb: validate_amount(Dimension::Storage, profile.storage_gb)?,
            vram_gb: validate_amount(Dimension::Vram, profile.vram_gb)?,
        })
    }
}

fn validate_count(dimension: Dimension, value: Option<i64>) -> Result<u32, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(dimension))?;
    if value < 0 {
        return Err(ValidationError::Negative {
            dimension,
            value: value as f64,
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { dimension, value })
}

fn validate_amount(dimension: Dimension, value: Option<f64>) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(dimension))?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(dimension));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { dimension, value });
    }
    Ok(value)
}

/// Stateless comparison of a requirement profile against a system profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Compare one requirement profile against one system snapshot.
    ///
    /// Returns exactly one verdict per dimension in
    /// [`Dimension::DISPLAY_ORDER`]. Every floor check is non-strict:
    /// `actual == required` passes.
    pub fn compare(
        requirement: &RequirementProfile,
        system: &SystemProfile,
    ) -> Result<ComparisonReport, ValidationError> {
        let thresholds = Thresholds::from_profile(requirement)?;
        let kind = requirement.kind;

        let (cores, speed) = compare_cpu(&thresholds, system, kind);
        let ram = floor_verdict(
            Dimension::Ram,
            thresholds.ram_gb,
            system.ram_gb,
            || ram_query(thresholds.ram_gb),
            (
                &format!("Your RAM meets the {kind} specs"),
                &format!("Your RAM is below the {kind} specs"),
            ),
        );
        let vram = floor_verdict(
            Dimension::Vram,
            thresholds.vram_gb,
            system.vram_gb,
            || vram_query(thresholds.vram_gb),
            (
                &format!("Your VRAM meets the {kind} specs"),
                &format!("Your VRAM is below the {kind} specs"),
            ),
        );
        let storage = floor_verdict(
            Dimension::Storage,
            thresholds.storage_gb,
            system.storage_gb,
            || storage_query(thresholds.storage_gb),
            (
                "You have enough free storage",
                "You do not have enough storage",
            ),
        );

        Ok(ComparisonReport {
            application_id: requirement.application_id,
            kind,
            verdicts: vec![cores, speed, ram, vram, storage],
        })
    }
}

/// Sentence followed by the two values it compares.
fn with_values(sentence: &str, actual: Quantity, required: Quantity) -> String {
    format!("{sentence} (have {actual}, need {required}).")
}

fn compare_cpu(
    required: &Thresholds,
    system: &SystemProfile,
    kind: ProfileKind,
) -> (DimensionVerdict, DimensionVerdict) {
    let cores_required = Quantity::Count(required.cpu_cores);
    let cores_actual = Quantity::Count(system.cpu_cores);
    let speed_required = Quantity::Gigahertz(required.cpu_speed_ghz);
    let speed_actual = Quantity::Gigahertz(system.cpu_speed_ghz);
    let query = || Some(cpu_query(required.cpu_cores, required.cpu_speed_ghz));

    let cores_verdict = |passed: bool, message: String| DimensionVerdict {
        dimension: Dimension::CpuCores,
        passed,
        required: cores_required,
        actual: cores_actual,
        message,
        remediation_query: if passed { None } else { query() },
    };
    let speed_verdict = |passed: bool, message: String, remediation_query| DimensionVerdict {
        dimension: Dimension::CpuSpeed,
        passed,
        required: speed_required,
        actual: speed_actual,
        message,
        remediation_query,
    };
    let speed_ok = system.cpu_speed_ghz >= required.cpu_speed_ghz;
    let core_count_met = || {
        with_values(
            &format!("Your CPU core count meets the {kind} specs"),
            cores_actual,
            cores_required,
        )
    };

    match system.cpu_cores.cmp(&required.cpu_cores) {
        // Speed is not evaluated: both verdicts fail on the core deficit
        Ordering::Less => {
            let message = with_values(
                &format!("Your CPU is below the {kind} specs"),
                cores_actual,
                cores_required,
            );
            (
                cores_verdict(false, message.clone()),
                speed_verdict(false, message, query()),
            )
        }
        Ordering::Equal => {
            let (sentence, remediation) = if speed_ok {
                (format!("Your CPU meets the {kind} specs"), None)
            } else {
                (format!("Your CPU speed is below the {kind} specs"), query())
            };
            (
                cores_verdict(true, core_count_met()),
                speed_verdict(
                    speed_ok,
                    with_values(&sentence, speed_actual, speed_required),
                    remediation,
                ),
            )
        }
        Ordering::Greater => {
            let sentence = if speed_ok {
                format!("Your CPU meets the {kind} specs")
            } else {
                "Your CPU's extra cores make up for its lower clock speed".to_string()
            };
            (
                cores_verdict(true, core_count_met()),
                speed_verdict(
                    true,
                    with_values(&sentence, speed_actual, speed_required),
                    None,
                ),
            )
        }
    }
}

fn floor_verdict(
    dimension: Dimension,
    required_gb: f64,
    actual_gb: f64,
    query: impl FnOnce() -> String,
    (pass_sentence, fail_sentence): (&str, &str),
) -> DimensionVerdict {
    let passed = actual_gb >= required_gb;
    let required = Quantity::Gigabytes(required_gb);
    let actual = Quantity::Gigabytes(actual_gb);
    let sentence = if passed { pass_sentence } else { fail_sentence };

    DimensionVerdict {
        dimension,
        passed,
        required,
        actual,
        message: with_values(sentence, actual, required),
        remediation_query: if passed { None } else { Some(query()) },
    }
}
