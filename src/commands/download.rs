use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::cli::purpose_from;
use crate::core::{tools, Config, Distributor, Downloader, Purpose, SystemRunner};
use crate::error::DlError;
use crate::platform::SystemMountProbe;
use crate::ui;

/// Config file named on the command line (or `$DL_CONFIG`), else `~/dl.config`
pub fn config_path(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<String>("config") {
        Some(path) => Ok(Config::expand_path(path)),
        None => Ok(Config::default_path()?),
    }
}

/// Local directory the artifact is saved to.
///
/// `-V DIR` wins, then the configured directory for the purpose. Audio
/// additionally falls back to `~/Music/mp3s` when that directory exists.
pub fn output_dir(
    config: &Config,
    purpose: Purpose,
    video_dest: Option<&String>,
) -> crate::Result<PathBuf> {
    if let (Some(dir), false) = (video_dest, purpose == Purpose::RestrictedVideo) {
        return Ok(Config::expand_path(dir));
    }
    if let Some(dir) = config.local_dir(purpose) {
        return Ok(dir.to_path_buf());
    }
    if purpose.is_audio() {
        if let Some(fallback) = dirs::home_dir().map(|h| h.join("Music").join("mp3s")) {
            if fallback.is_dir() {
                return Ok(fallback);
            }
        }
    }
    Err(DlError::UndefinedDestination {
        remote: config.local().name.clone(),
        purpose,
    })
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    // 1. Extract arguments
    let url = matches.get_one::<String>("url").context("URL is required")?;
    let debug = matches.get_flag("debug");
    let purpose = purpose_from(matches);

    // 2. Load configuration
    let path = config_path(matches)?;
    let config = Config::load(&path, &SystemRunner::new(debug, None))
        .with_context(|| format!("Error loading config {}", path.display()))?;
    let runner = SystemRunner::new(debug, config.platform().command_timeout);

    // 3. Pick the local destination
    let destination = output_dir(&config, purpose, matches.get_one::<String>("video-dest"))?;

    if debug {
        ui::dimmed(&format!("Downloading from: {}", url));
        ui::dimmed(&format!("Purpose: {}", purpose.description()));
        ui::dimmed(&format!("Destination: {}", destination.display()));
        let remotes = config.active_remote_names();
        if !remotes.is_empty() {
            ui::dimmed(&format!("Active remotes: {}", remotes.join(", ")));
        }
        println!();
    }

    // 4. Download
    let yt_dlp = tools::ensure_for(purpose)?;
    let downloader = Downloader::new(&runner).with_program(yt_dlp).verbose(debug);
    let media = downloader.fetch(url, purpose, &destination)?;

    let size = fs::metadata(media.path()).map(|m| m.len()).unwrap_or(0);
    println!(
        "{} {} ({})",
        "✓ Downloaded".green().bold(),
        media.path().display(),
        ui::format_size(size)
    );

    // 5. Distribute
    if matches.get_flag("no-remotes") {
        ui::dimmed("Skipping remotes (--no-remotes)");
    } else {
        let probe = SystemMountProbe;
        let report = Distributor::new(&config, &runner, &probe).distribute(&media, purpose);
        ui::print_report(&report);
        if report.all_failed() {
            ui::warn("the file could not be copied to any remote");
        }
    }

    ui::success("Done!");
    Ok(())
}
