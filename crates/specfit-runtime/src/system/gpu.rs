//! GPU memory detection.

use std::process::Command;

use tracing::debug;

/// Total memory of the first NVIDIA GPU in GB, or 0 when none is usable.
///
/// A host without a discrete GPU, without drivers, or with unreadable
/// `nvidia-smi` output reports zero VRAM rather than failing.
pub fn get_nvidia_vram_gb() -> f64 {
    let output = match Command::new("nvidia-smi")
        .args(["--query-gpu=memory.total", "--format=csv,noheader,nounits"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!(status = %output.status, "nvidia-smi exited unsuccessfully, assuming no GPU");
            return 0.0;
        }
        Err(e) => {
            debug!("nvidia-smi unavailable, assuming no GPU: {e}");
            return 0.0;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_vram_gb(&stdout).unwrap_or_else(|| {
        debug!(output = %stdout.trim(), "Unrecognized nvidia-smi output, assuming no GPU");
        0.0
    })
}

/// Parse `nvidia-smi` memory output (MiB per line) into whole GB.
///
/// With several GPUs only the first line counts.
pub(crate) fn parse_vram_gb(stdout: &str) -> Option<f64> {
    let mib: u64 = stdout.lines().next()?.trim().parse().ok()?;
    Some((mib as f64 / 1000.0).round())
}
