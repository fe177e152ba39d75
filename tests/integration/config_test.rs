use dl::core::{Purpose, TransferMethod, Variables};
use dl::{Config, DlError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::support::FakeSystem;

const SAMPLE: &str = r#"
platform:
  wsl: false
local:
  mp3s: ${win_home}/Music
  vdest: $media/staging
  xdest: ${storage}/secret/videos
remotes:
  mslinn@gojira:
    mp3s: /data/media/mp3s
    vdest: /data/media/staging
    xdest: /data/secret/videos
  bear:
    disabled: true
    method: samba
    mp3s: e:/media/mp3s
  camille:
    method: samba
    mp3s: c:/Users/mslinn/Music
  clipJam:
    mp3s: $media/clipjam
"#;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("dl.config");
    fs::write(&path, contents).unwrap();
    path
}

fn vars() -> Variables {
    Variables::empty()
        .with("win_home", "/mnt/c/Users/mslinn")
        .with("media", "/data/media")
        .with("storage", "/data")
}

#[test]
fn test_load_expands_local_paths() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, SAMPLE);
    let config = Config::load_with(&path, &FakeSystem::new(), vars()).unwrap();

    assert_eq!(config.config_path(), path.as_path());
    assert_eq!(
        config.local_dir(Purpose::Audio),
        Some(Path::new("/mnt/c/Users/mslinn/Music"))
    );
    assert_eq!(
        config.local_dir(Purpose::Video),
        Some(Path::new("/data/media/staging"))
    );
    assert_eq!(
        config.local_dir(Purpose::RestrictedVideo),
        Some(Path::new("/data/secret/videos"))
    );
}

#[test]
fn test_load_expands_remote_paths_and_methods() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, SAMPLE);
    let config = Config::load_with(&path, &FakeSystem::new(), vars()).unwrap();

    let gojira = config.remote("mslinn@gojira").unwrap();
    assert_eq!(gojira.method, TransferMethod::Copy);
    assert_eq!(gojira.path_for(Purpose::Video), Some(Path::new("/data/media/staging")));

    let clip_jam = config.remote("clipJam").unwrap();
    assert_eq!(clip_jam.path_for(Purpose::Audio), Some(Path::new("/data/media/clipjam")));

    assert_eq!(config.remote("camille").unwrap().method, TransferMethod::Samba);
}

#[test]
fn test_active_remotes_skip_disabled_and_keep_order() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, SAMPLE);
    let config = Config::load_with(&path, &FakeSystem::new(), vars()).unwrap();

    assert_eq!(config.remotes().len(), 4);
    assert_eq!(
        config.active_remote_names(),
        vec!["mslinn@gojira", "camille", "clipJam"]
    );
    assert!(config.active_remotes().all(|r| !r.disabled));
}

#[test]
fn test_disabled_first_and_last_positions() {
    let raw = r#"
platform: {wsl: false}
remotes:
  first: {disabled: true}
  middle: {mp3s: /m}
  last: {disabled: true, mp3s: /l}
"#;
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, raw);
    let config = Config::load_with(&path, &FakeSystem::new(), Variables::empty()).unwrap();
    assert_eq!(config.active_remote_names(), vec!["middle"]);
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.config");
    let err = Config::load_with(&path, &FakeSystem::new(), Variables::empty()).unwrap_err();
    assert!(matches!(err, DlError::ConfigNotFound(ref p) if p == &path));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_bad_method_is_unreadable() {
    let raw = "platform: {wsl: false}\nremotes:\n  bear:\n    method: ftp\n";
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, raw);
    let err = Config::load_with(&path, &FakeSystem::new(), Variables::empty()).unwrap_err();
    match err {
        DlError::ConfigUnreadable { reason, .. } => assert!(reason.contains("bear")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_remote_without_purpose_path_loads() {
    // Missing destinations are only an error when used
    let raw = "platform: {wsl: false}\nremotes:\n  bear:\n    mp3s: /data/mp3s\n";
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, raw);
    let config = Config::load_with(&path, &FakeSystem::new(), Variables::empty()).unwrap();
    assert_eq!(config.remote("bear").unwrap().path_for(Purpose::Video), None);
}
