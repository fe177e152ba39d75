// Command-line definition

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

use crate::core::{Config, Purpose};

pub const CONFIG_ENV: &str = "DL_CONFIG";

/// Paragraph shown under `dl --help` describing the loaded configuration
pub fn describe(config: &Config) -> String {
    let dir = |purpose: Purpose| {
        config
            .local_dir(purpose)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not configured)".to_string())
    };
    let remotes = config.active_remote_names();
    let remotes = if remotes.is_empty() {
        "none".to_string()
    } else {
        remotes.join(", ")
    };

    format!(
        "Modify {} to suit; at present, MP3s are downloaded to {}, videos to {}, \
and x-rated videos to {}. Active remotes are: {}.",
        config.config_path().display(),
        dir(Purpose::Audio),
        dir(Purpose::Video),
        dir(Purpose::RestrictedVideo),
        remotes
    )
}

pub fn build_cli(description: Option<String>) -> Command {
    let mut about = String::from(
        "Downloads media.\nDefaults to just downloading an MP3, even when the original is a video, \
unless the -v, -x or -V options are provided.",
    );
    if let Some(description) = description {
        about.push_str("\n\n");
        about.push_str(&description);
    }

    Command::new("dl")
        .about(about)
        .disable_version_flag(true)
        .arg(
            Arg::new("url")
                .help("URL of the media to download")
                .required_unless_present_any(["completions", "version"])
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug mode (echo external commands and their output)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-video")
                .short('v')
                .short_alias('k')
                .long("keep-video")
                .help("Download video to the local vdest directory and remotes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("xrated")
                .short('x')
                .long("xrated")
                .help("Download video to the local xdest directory and remotes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("video-dest")
                .short('V')
                .long("video-dest")
                .alias("video_dest")
                .value_name("DIR")
                .help("Download video to the specified directory"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .env(CONFIG_ENV)
                .help("Configuration file (default: ~/dl.config)"),
        )
        .arg(
            Arg::new("no-remotes")
                .long("no-remotes")
                .help("Download only; skip copying to remotes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(clap::value_parser!(Shell))
                .help("Print a shell completion script and exit"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
}

/// Purpose selected by the action flags
pub fn purpose_from(matches: &clap::ArgMatches) -> Purpose {
    if matches.get_flag("xrated") {
        Purpose::RestrictedVideo
    } else if matches.get_flag("keep-video") || matches.contains_id("video-dest") {
        Purpose::Video
    } else {
        Purpose::Audio
    }
}
