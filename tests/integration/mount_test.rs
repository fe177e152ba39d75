use dl::core::SambaMounter;
use tempfile::TempDir;

use super::support::FakeSystem;

#[test]
fn test_mount_is_idempotent() {
    let root = TempDir::new().unwrap();
    let system = FakeSystem::new();
    let mounter = SambaMounter::new(&system, &system, root.path().to_path_buf());

    let first = mounter.ensure_mounted("bear", "e").unwrap();
    let second = mounter.ensure_mounted("bear", "e").unwrap();

    assert_eq!(first, second);
    assert_eq!(first, root.path().join("bear/e"));
    assert!(first.is_dir());
    assert_eq!(system.count("mkdir"), 1);
    assert_eq!(system.count("mount"), 1);
}

#[test]
fn test_already_mounted_runs_nothing() {
    let root = TempDir::new().unwrap();
    let point = root.path().join("bear").join("e");
    std::fs::create_dir_all(&point).unwrap();
    let system = FakeSystem::new().mounted(&point);
    let mounter = SambaMounter::new(&system, &system, root.path().to_path_buf());

    assert_eq!(mounter.ensure_mounted("bear", "/e").unwrap(), point);
    assert!(system.commands.borrow().is_empty());
}

#[test]
fn test_mount_failure_is_reported() {
    let root = TempDir::new().unwrap();
    let system = FakeSystem::new().failing("mount");
    let mounter = SambaMounter::new(&system, &system, root.path().to_path_buf());

    let err = mounter.ensure_mounted("bear", "e").unwrap_err();
    assert!(err.to_string().contains("sudo mount -t drvfs"));
    assert_eq!(system.count("mkdir"), 1);
}

#[test]
fn test_distinct_drives_get_distinct_mounts() {
    let root = TempDir::new().unwrap();
    let system = FakeSystem::new();
    let mounter = SambaMounter::new(&system, &system, root.path().to_path_buf());

    let e = mounter.ensure_mounted("bear", "e").unwrap();
    let c = mounter.ensure_mounted("bear", "c").unwrap();

    assert_ne!(e, c);
    assert_eq!(system.count("mount"), 2);
}
