use dl::core::resolver::{resolve_in, PathSource};
use dl::core::{resolve, Purpose, Remote};
use dl::{Config, DlError};
use std::path::Path;

fn config() -> Config {
    Config::new(
        Remote::new("local")
            .with_path(Purpose::Audio, "/home/me/Music")
            .with_path(Purpose::Video, "/home/me/Videos"),
        vec![
            Remote::new("bear").with_path(Purpose::Audio, "/data/mp3s"),
            Remote::new("camille")
                .with_path(Purpose::Video, "c:/Videos")
                .disabled(true),
        ],
    )
}

#[test]
fn test_resolve_local_source() {
    let config = config();
    assert_eq!(
        resolve_in(&config, PathSource::Local, Purpose::Video).unwrap(),
        Path::new("/home/me/Videos")
    );
    let err = resolve_in(&config, PathSource::Local, Purpose::RestrictedVideo).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Remote local does not define a path for x-rated videos"
    );
}

#[test]
fn test_resolve_named_remote() {
    let config = config();
    assert_eq!(
        resolve_in(&config, PathSource::Remote("bear"), Purpose::Audio).unwrap(),
        Path::new("/data/mp3s")
    );
    // Disabled remotes can still be looked up by name
    assert_eq!(
        resolve_in(&config, PathSource::Remote("camille"), Purpose::Video).unwrap(),
        Path::new("c:/Videos")
    );
}

#[test]
fn test_resolve_unknown_remote() {
    let err = resolve_in(&config(), PathSource::Remote("nobody"), Purpose::Audio).unwrap_err();
    assert!(matches!(err, DlError::UndefinedDestination { ref remote, .. } if remote == "nobody"));
}

#[test]
fn test_resolve_video_missing_names_remote_and_purpose() {
    let config = config();
    let bear = config.remote("bear").unwrap();
    let err = resolve(bear, Purpose::Video).unwrap_err();
    assert!(matches!(
        err,
        DlError::UndefinedDestination { ref remote, purpose: Purpose::Video } if remote == "bear"
    ));
    assert!(!err.is_fatal());
    assert!(resolve(bear, Purpose::Audio).is_ok());
}
