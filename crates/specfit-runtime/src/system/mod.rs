//! Hardware probe implementation for specfit-runtime.
//!
//! This module provides the `DefaultHardwareProbe` which implements
//! `HardwareProbe` from specfit-core. It samples the live host through
//! `sysinfo` and a one-shot `nvidia-smi` query.

mod gpu;
mod host;

use specfit_core::{HardwareProbe, ProbeConfig, ProbeError, SystemProfile};
use sysinfo::System;
use tracing::debug;

pub use gpu::get_nvidia_vram_gb;

/// Default implementation of `HardwareProbe`.
///
/// Every call to [`sample`](HardwareProbe::sample) builds fresh `sysinfo`
/// handles; nothing is cached between samples.
///
/// # Example
///
/// ```no_run
/// use specfit_core::{HardwareProbe, ProbeConfig};
/// use specfit_runtime::DefaultHardwareProbe;
///
/// let probe = DefaultHardwareProbe::new(ProbeConfig::default());
/// let system = probe.sample().expect("host is readable");
/// println!("{} cores", system.cpu_cores);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultHardwareProbe {
    config: ProbeConfig,
}

impl DefaultHardwareProbe {
    /// Create a probe that reports free storage for `config.storage_path`.
    pub const fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl HardwareProbe for DefaultHardwareProbe {
    fn sample(&self) -> Result<SystemProfile, ProbeError> {
        let sys = System::new_all();

        let (cpu_cores, cpu_speed_ghz) = host::cpu_reading(&sys)?;
        let ram_gb = host::ram_gb(&sys)?;
        let storage_gb = host::free_storage_gb(&self.config.storage_path)?;
        let vram_gb = get_nvidia_vram_gb();

        let profile = SystemProfile {
            cpu_cores,
            cpu_speed_ghz,
            ram_gb,
            storage_gb,
            vram_gb,
        };
        debug!(?profile, storage_path = %self.config.storage_path.display(), "Sampled host");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_probe_uses_default_storage_path() {
        let probe = DefaultHardwareProbe::default();
        assert_eq!(probe.config.storage_path, ProbeConfig::default().storage_path);
    }
}
