// Platform-specific code module

pub mod fs;
pub mod mounts;
pub mod wsl;

// Re-exports for cleaner imports
pub use fs::copy_file;
pub use mounts::{is_mount_point, MountProbe, SystemMountProbe};
