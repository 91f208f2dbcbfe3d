//! Hardware probe port.
//!
//! This port abstracts sampling of the live host from the core domain.
//! Implementations live in adapters (e.g. `specfit-runtime`).
//!
//! # Design Notes
//!
//! - Core owns the trait and error type
//! - Runtime owns the implementation (`sysinfo`, `nvidia-smi`)
//! - A missing GPU is a valid reading of zero VRAM, not an error

use thiserror::Error;

use crate::domain::SystemProfile;

/// A required metric could not be read.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// CPU core count or frequency is unsupported on this platform.
    #[error("Could not read CPU information: {0}")]
    Cpu(String),

    /// Installed memory could not be read.
    #[error("Could not read memory information: {0}")]
    Memory(String),

    /// Free storage could not be read.
    #[error("Could not read storage information: {0}")]
    Storage(String),
}

/// Port for sampling the current host.
#[cfg_attr(test, mockall::automock)]
pub trait HardwareProbe: Send + Sync {
    /// Take a fresh snapshot of the host's hardware.
    fn sample(&self) -> Result<SystemProfile, ProbeError>;
}
