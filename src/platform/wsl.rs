//! Windows Subsystem for Linux detection and the Windows home directory.
//!
//! The probe reads `/proc/sys/kernel/osrelease`; WSL kernels carry
//! `microsoft` in their release string (`5.15.90.1-microsoft-standard-WSL2`).
//! Callers that already know the answer set `platform.wsl` in the config file
//! and skip the probe entirely.

use std::fs;
use std::path::PathBuf;

use crate::core::runner::{CommandRunner, CommandSpec};
use crate::error::{DlError, Result};

pub const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Whether a kernel release string belongs to a WSL kernel
pub fn is_wsl_release(release: &str) -> bool {
    release.to_ascii_lowercase().contains("microsoft")
}

/// Probe the running kernel
pub fn detect() -> bool {
    fs::read_to_string(OSRELEASE_PATH)
        .map(|release| is_wsl_release(&release))
        .unwrap_or(false)
}

/// Windows `%UserProfile%`, translated to a WSL path
pub fn native_home(runner: &dyn CommandRunner) -> Result<PathBuf> {
    let output = runner.run_checked(
        &CommandSpec::new("cmd.exe").args(["/c", "<nul set /p=%UserProfile%"]),
    )?;
    let windows_dir = output.stdout.trim();
    if windows_dir.is_empty() {
        return Err(DlError::platform("cmd.exe did not report %UserProfile%"));
    }

    let output = runner.run_checked(&CommandSpec::new("wslpath").arg(windows_dir))?;
    let wsl_dir = output.stdout.trim();
    if wsl_dir.is_empty() {
        return Err(DlError::platform(format!(
            "wslpath could not translate {}",
            windows_dir
        )));
    }

    Ok(PathBuf::from(wsl_dir))
}
