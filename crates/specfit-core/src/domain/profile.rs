//! Requirement and system profile types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Requirement tier published for a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Minimum,
    Recommended,
}

impl ProfileKind {
    /// Both tiers, minimum first.
    pub const ALL: [Self; 2] = [Self::Minimum, Self::Recommended];

    /// Lowercase name used in messages and on the command line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Recommended => "recommended",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimum" | "min" => Ok(Self::Minimum),
            "recommended" | "rec" => Ok(Self::Recommended),
            other => Err(format!(
                "unknown profile kind '{other}' (expected 'minimum' or 'recommended')"
            )),
        }
    }
}

/// One measured axis of comparison.
///
/// Variant order is the fixed display order of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    CpuCores,
    CpuSpeed,
    Ram,
    Vram,
    Storage,
}

impl Dimension {
    /// Every dimension in report order.
    pub const DISPLAY_ORDER: [Self; 5] = [
        Self::CpuCores,
        Self::CpuSpeed,
        Self::Ram,
        Self::Vram,
        Self::Storage,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CpuCores => "CPU cores",
            Self::CpuSpeed => "CPU speed",
            Self::Ram => "RAM",
            Self::Vram => "VRAM",
            Self::Storage => "Free storage",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A measured or required amount, tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Quantity {
    /// Whole count (CPU cores).
    Count(u32),
    /// Clock speed in GHz.
    Gigahertz(f64),
    /// Capacity in GB.
    Gigabytes(f64),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Gigahertz(v) => write!(f, "{v:.2} GHz"),
            Self::Gigabytes(v) => write!(f, "{v:.2} GB"),
        }
    }
}

/// Published requirements of one title for one [`ProfileKind`].
///
/// Thresholds are optional because the backing store may hold NULL columns.
/// A missing or negative threshold is rejected when the profile is compared;
/// zero means no requirement was recorded for that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Catalog identifier of the title.
    pub application_id: i64,
    /// Which tier these thresholds describe.
    pub kind: ProfileKind,
    /// Required physical CPU cores.
    #[serde(default)]
    pub cpu_cores: Option<i64>,
    /// Required CPU clock speed in GHz.
    #[serde(default)]
    pub cpu_speed_ghz: Option<f64>,
    /// Required RAM in GB.
    #[serde(default)]
    pub ram_gb: Option<f64>,
    /// Required free storage in GB.
    #[serde(default)]
    pub storage_gb: Option<f64>,
    /// Required GPU memory in GB.
    #[serde(default)]
    pub vram_gb: Option<f64>,
}

impl RequirementProfile {
    /// Create a profile with no thresholds set.
    pub const fn new(application_id: i64, kind: ProfileKind) -> Self {
        Self {
            application_id,
            kind,
            cpu_cores: None,
            cpu_speed_ghz: None,
            ram_gb: None,
            storage_gb: None,
            vram_gb: None,
        }
    }

    /// Set the CPU core count and clock speed thresholds.
    #[must_use]
    pub const fn with_cpu(mut self, cores: i64, speed_ghz: f64) -> Self {
        self.cpu_cores = Some(cores);
        self.cpu_speed_ghz = Some(speed_ghz);
        self
    }

    /// Set the RAM threshold.
    #[must_use]
    pub const fn with_ram_gb(mut self, gb: f64) -> Self {
        self.ram_gb = Some(gb);
        self
    }

    /// Set the free storage threshold.
    #[must_use]
    pub const fn with_storage_gb(mut self, gb: f64) -> Self {
        self.storage_gb = Some(gb);
        self
    }

    /// Set the GPU memory threshold.
    #[must_use]
    pub const fn with_vram_gb(mut self, gb: f64) -> Self {
        self.vram_gb = Some(gb);
        self
    }
}

/// Snapshot of the current host's hardware.
///
/// Taken once per comparison request and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemProfile {
    /// Physical CPU cores.
    pub cpu_cores: u32,
    /// Current CPU clock speed in GHz.
    pub cpu_speed_ghz: f64,
    /// Installed RAM in GB.
    pub ram_gb: f64,
    /// Free storage in GB.
    pub storage_gb: f64,
    /// GPU memory in GB; zero when no GPU was found.
    pub vram_gb: f64,
}

impl SystemProfile {
    /// Whether a GPU with memory was detected.
    #[must_use]
    pub fn has_gpu(&self) -> bool {
        self.vram_gb > 0.0
    }
}
