//! Verdicts and comparison reports.

use serde::{Deserialize, Serialize};

use super::profile::{Dimension, ProfileKind, Quantity};

/// Pass/fail result for one dimension plus its supporting values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionVerdict {
    pub dimension: Dimension,
    pub passed: bool,
    pub required: Quantity,
    pub actual: Quantity,
    /// Plain-text explanation, never display markup.
    pub message: String,
    /// Product search fragment for fixing a failing dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation_query: Option<String>,
}

impl DimensionVerdict {
    /// Whether this verdict failed and carries a remediation query.
    #[must_use]
    pub const fn needs_remediation(&self) -> bool {
        !self.passed && self.remediation_query.is_some()
    }
}

/// Outcome of comparing one requirement profile against one system profile.
///
/// Holds exactly one verdict per [`Dimension`], in [`Dimension::DISPLAY_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub application_id: i64,
    pub kind: ProfileKind,
    pub verdicts: Vec<DimensionVerdict>,
}

impl ComparisonReport {
    /// Whether every dimension passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    /// Failing verdicts, in display order.
    pub fn failures(&self) -> impl Iterator<Item = &DimensionVerdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }

    /// Verdict for a single dimension.
    #[must_use]
    pub fn verdict(&self, dimension: Dimension) -> Option<&DimensionVerdict> {
        self.verdicts.iter().find(|v| v.dimension == dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(dimension: Dimension, passed: bool) -> DimensionVerdict {
        DimensionVerdict {
            dimension,
            passed,
            required: Quantity::Gigabytes(8.0),
            actual: Quantity::Gigabytes(if passed { 16.0 } else { 4.0 }),
            message: String::new(),
            remediation_query: (!passed).then(|| "8gb ram".to_string()),
        }
    }

    #[test]
    fn test_failures_and_lookup() {
        let report = ComparisonReport {
            application_id: 7,
            kind: ProfileKind::Minimum,
            verdicts: vec![
                verdict(Dimension::Ram, true),
                verdict(Dimension::Vram, false),
            ],
        };

        assert!(!report.all_passed());
        let failed: Vec<_> = report.failures().map(|v| v.dimension).collect();
        assert_eq!(failed, vec![Dimension::Vram]);
        assert!(report.verdict(Dimension::Vram).unwrap().needs_remediation());
        assert!(report.verdict(Dimension::Storage).is_none());
    }

    #[test]
    fn test_report_json_shape() {
        let report = ComparisonReport {
            application_id: 7,
            kind: ProfileKind::Recommended,
            verdicts: vec![verdict(Dimension::Ram, true)],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "recommended");
        assert_eq!(json["verdicts"][0]["dimension"], "ram");
        assert_eq!(json["verdicts"][0]["required"]["unit"], "gigabytes");
        assert!(json["verdicts"][0].get("remediation_query").is_none());
    }
}
