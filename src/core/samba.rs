//! Windows shares reached through a local drvfs mount.
//!
//! A samba remote stores paths as `drive:subpath` (`e:/media/renders`). The
//! share `\\node\drive` is mounted under `<mount_root>/<node>/<drive>` and the
//! artifact is then copied there like any local file.

use std::path::{Path, PathBuf};

use super::runner::{CommandRunner, CommandSpec};
use crate::error::{DlError, Result};
use crate::platform::MountProbe;

pub const DEFAULT_MOUNT_ROOT: &str = "/mnt";

/// A remote path split into its drive and the path within that drive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SambaPath {
    pub drive: String,
    pub subpath: String,
}

/// Split `drive:subpath`. Anything other than exactly one colon is rejected.
pub fn parse_remote_path(path: &str) -> Result<SambaPath> {
    let mut parts = path.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(drive), Some(subpath), None) if !drive.is_empty() => Ok(SambaPath {
            drive: drive.to_string(),
            subpath: subpath.to_string(),
        }),
        _ => Err(DlError::MalformedRemotePath(path.to_string())),
    }
}

/// Local directory where `\\node\drive` gets mounted.
///
/// Exactly one separator is placed between the node and the drive, whether or
/// not the drive was written with a leading slash.
pub fn mount_point(root: &Path, node: &str, drive: &str) -> PathBuf {
    let root = root.to_string_lossy();
    let root = root.trim_end_matches('/');
    let node = node.trim_matches('/');
    let drive = drive.trim_start_matches('/');
    PathBuf::from(format!("{}/{}/{}", root, node, drive))
}

/// Windows UNC name of a share
pub fn share_name(node: &str, drive: &str) -> String {
    format!(r"\\{}\{}", node, drive.trim_start_matches('/'))
}

/// Creates mount directories and mounts shares on demand
pub struct SambaMounter<'a> {
    runner: &'a dyn CommandRunner,
    probe: &'a dyn MountProbe,
    root: PathBuf,
}

impl<'a> SambaMounter<'a> {
    pub fn new(runner: &'a dyn CommandRunner, probe: &'a dyn MountProbe, root: PathBuf) -> Self {
        Self {
            runner,
            probe,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make `\\node\drive` reachable locally and return the mount point.
    ///
    /// Checks before acting, so calling this again for a share that is
    /// already mounted runs no commands.
    pub fn ensure_mounted(&self, node: &str, drive: &str) -> Result<PathBuf> {
        let mount_point = mount_point(&self.root, node, drive);
        let target = mount_point.to_string_lossy().to_string();

        if !self.probe.is_dir(&mount_point) {
            let mkdir = CommandSpec::new("mkdir").args(["-p", target.as_str()]).privileged();
            self.runner.run_checked(&mkdir)?;
        }

        if !self.probe.is_mount_point(&mount_point) {
            let mount = CommandSpec::new("mount")
                .args(["-t", "drvfs"])
                .arg(share_name(node, drive))
                .arg(target.as_str())
                .privileged();
            if let Err(e) = self.runner.run_checked(&mount) {
                // Somebody else may have mounted it in the meantime
                if !self.probe.is_mount_point(&mount_point) {
                    return Err(e);
                }
                log::debug!("{} was mounted concurrently", target);
            }
        }

        Ok(mount_point)
    }
}
