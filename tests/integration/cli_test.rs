use dl::cli::{build_cli, describe, purpose_from};
use dl::core::{Purpose, Remote};
use dl::Config;

#[test]
fn test_url_is_required() {
    let err = build_cli(None).try_get_matches_from(["dl"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_video_dest_selects_video() {
    let matches = build_cli(None)
        .try_get_matches_from(["dl", "-V", "/tmp/out", "https://example.com/v"])
        .unwrap();
    assert_eq!(purpose_from(&matches), Purpose::Video);
    assert_eq!(matches.get_one::<String>("video-dest").unwrap(), "/tmp/out");
}

#[test]
fn test_help_describes_configuration() {
    let config = Config::new(
        Remote::new("local").with_path(Purpose::Audio, "/music"),
        vec![
            Remote::new("bear"),
            Remote::new("camille").disabled(true),
        ],
    );
    let help = build_cli(Some(describe(&config))).render_long_help().to_string();
    assert!(help.contains("MP3s are downloaded to /music"));
    assert!(help.contains("x-rated videos to (not configured)"));
    assert!(help.contains("Active remotes are: bear."));
}

