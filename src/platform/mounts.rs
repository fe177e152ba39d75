// Mount table probes

use std::path::Path;

/// Read-only view of the filesystem used before creating or mounting anything
pub trait MountProbe {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_mount_point(&self, path: &Path) -> bool;
}

/// Probes the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMountProbe;

impl MountProbe for SystemMountProbe {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_mount_point(&self, path: &Path) -> bool {
        is_mount_point(path)
    }
}

/// A path is a mount point when it lives on a different device than its parent
#[cfg(unix)]
pub fn is_mount_point(path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    let Ok(meta) = path.metadata() else {
        return false;
    };
    let Some(parent) = path.parent() else {
        // The filesystem root
        return true;
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    match parent.metadata() {
        Ok(parent_meta) => meta.dev() != parent_meta.dev() || meta.ino() == parent_meta.ino(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_mount_point(_path: &Path) -> bool {
    false
}
