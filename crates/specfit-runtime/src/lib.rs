//! Host hardware probing for specfit.
//!
//! [`system::DefaultHardwareProbe`] implements the core `HardwareProbe` port
//! using `sysinfo` for CPU, memory and disks, and `nvidia-smi` for GPU memory.

#![deny(unused_crate_dependencies)]

pub mod system;

pub use system::DefaultHardwareProbe;
