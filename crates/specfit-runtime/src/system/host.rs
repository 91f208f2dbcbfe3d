//! CPU, memory and disk readings from `sysinfo`.

use std::path::{Path, PathBuf};

use specfit_core::ProbeError;
use sysinfo::{Disks, System};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Physical core count and first-core frequency in GHz.
pub fn cpu_reading(sys: &System) -> Result<(u32, f64), ProbeError> {
    let cores = System::physical_core_count()
        .filter(|&n| n > 0)
        .ok_or_else(|| ProbeError::Cpu("physical core count is unavailable".to_string()))?;

    let mhz = sys
        .cpus()
        .first()
        .map(sysinfo::Cpu::frequency)
        .ok_or_else(|| ProbeError::Cpu("no CPU reported".to_string()))?;
    if mhz == 0 {
        return Err(ProbeError::Cpu(
            "CPU frequency is unsupported on this platform".to_string(),
        ));
    }

    let cores = u32::try_from(cores).unwrap_or(u32::MAX);
    Ok((cores, mhz as f64 / 1000.0))
}

/// Installed memory in whole GB.
pub fn ram_gb(sys: &System) -> Result<f64, ProbeError> {
    match sys.total_memory() {
        0 => Err(ProbeError::Memory("total memory reads as zero".to_string())),
        bytes => Ok((bytes as f64 / BYTES_PER_GB).round()),
    }
}

/// Free space on the disk holding `path`, in GB.
///
/// Relative paths are taken from the working directory and symlinks are
/// followed before the mount lookup.
pub fn free_storage_gb(path: &Path) -> Result<f64, ProbeError> {
    let resolved = resolve_path(path)?;
    let disks = Disks::new_with_refreshed_list();
    let mounts = disks
        .list()
        .iter()
        .map(|disk| (disk.mount_point(), disk.available_space()));

    select_mount(mounts, &resolved)
        .map(|bytes| bytes as f64 / BYTES_PER_GB)
        .ok_or_else(|| {
            ProbeError::Storage(format!("no mounted disk contains {}", resolved.display()))
        })
}

/// Absolute form of `path`. Paths that do not exist yet are made absolute
/// without touching the filesystem.
pub(crate) fn resolve_path(path: &Path) -> Result<PathBuf, ProbeError> {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .map_err(|e| ProbeError::Storage(format!("cannot resolve {}: {e}", path.display())))
}

/// Available bytes of the mount point that is the longest prefix of `path`.
pub(crate) fn select_mount<'a>(
    mounts: impl IntoIterator<Item = (&'a Path, u64)>,
    path: &Path,
) -> Option<u64> {
    mounts
        .into_iter()
        .filter(|(mount, _)| path.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
        .map(|(_, available)| available)
}
