//! Media acquisition through yt-dlp.
//!
//! The title is looked up first (`--dump-json`), sanitized into a file name,
//! and then the actual download/transcode runs with an explicit output
//! template so the artifact path is known in advance.

use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use super::media_file::MediaFile;
use super::purpose::Purpose;
use super::runner::{CommandRunner, CommandSpec};
use super::tools::YT_DLP;
use crate::error::{DlError, Result};

pub const AUDIO_FORMAT: &str = "mp3";
pub const VIDEO_FORMAT: &str = "mp4";

/// Used when a title is missing or has no usable characters
pub const FALLBACK_NAME: &str = "no_name";

const MAX_NAME_LENGTH: usize = 200;

/// Turn a displayed title into a file name.
///
/// Keeps ASCII letters, digits and spaces, trims, and joins the remaining
/// words with single underscores. The result never ends in `_`, even when
/// truncation cuts right after a separator.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    let truncated: String = joined.chars().take(MAX_NAME_LENGTH).collect();
    truncated.trim_end_matches('_').to_string()
}

/// Accept only absolute http(s) URLs with a host
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| DlError::fetch_failed(format!("invalid URL '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(DlError::fetch_failed(format!(
                "unsupported URL scheme '{}' in '{}'",
                scheme, url
            )))
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(DlError::fetch_failed(format!("URL '{}' has no host", url)));
    }

    Ok(parsed)
}

pub struct Downloader<'a> {
    runner: &'a dyn CommandRunner,
    program: PathBuf,
    verbose: bool,
}

impl<'a> Downloader<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            program: PathBuf::from(YT_DLP),
            verbose: false,
        }
    }

    pub fn with_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.program = program.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Extension of the artifact produced for `purpose`
    pub fn extension(&self, purpose: Purpose) -> &'static str {
        if purpose.is_audio() {
            AUDIO_FORMAT
        } else {
            VIDEO_FORMAT
        }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(self.program.to_string_lossy())
    }

    fn verbosity_args(&self) -> [&'static str; 2] {
        if self.verbose {
            ["--verbose", "--progress"]
        } else {
            ["--quiet", "--no-warnings"]
        }
    }

    /// Sanitized title of the media behind `url`
    pub fn media_name(&self, url: &str) -> Result<String> {
        let spec = self
            .command()
            .args(["--dump-json", "--no-playlist", "--no-warnings"])
            .arg(url);

        let output = self
            .runner
            .run_checked(&spec)
            .map_err(|e| DlError::fetch_failed(format!("failed to extract media info: {}", e)))?;

        let info: serde_json::Value = serde_json::from_str(output.stdout.trim())
            .map_err(|e| DlError::fetch_failed(format!("failed to parse media info: {}", e)))?;

        let name = info
            .get("title")
            .and_then(|t| t.as_str())
            .map(sanitize_title)
            .unwrap_or_default();

        if name.is_empty() {
            Ok(FALLBACK_NAME.to_string())
        } else {
            Ok(name)
        }
    }

    /// Arguments that download `url` into `output_stem` plus the format's extension
    pub fn download_command(&self, url: &str, purpose: Purpose, output_stem: &Path) -> CommandSpec {
        let stem = output_stem.to_string_lossy();
        let spec = if purpose.is_audio() {
            self.command()
                .args(["--extract-audio", "--audio-format", AUDIO_FORMAT])
                .arg("--output")
                .arg(format!("{}.%(ext)s", stem))
        } else {
            self.command()
                .args(["--format", VIDEO_FORMAT, "--merge-output-format", VIDEO_FORMAT])
                .arg("--output")
                .arg(format!("{}.{}", stem, VIDEO_FORMAT))
        };
        spec.args(self.verbosity_args()).arg(url)
    }

    /// Download `url` into `output_dir` and return the artifact
    pub fn fetch(&self, url: &str, purpose: Purpose, output_dir: &Path) -> Result<MediaFile> {
        validate_url(url)?;

        let name = self.media_name(url)?;
        let stem = output_dir.join(&name);
        let artifact = output_dir.join(format!("{}.{}", name, self.extension(purpose)));
        log::info!("Saving {}", artifact.display());

        self.runner
            .run_checked(&self.download_command(url, purpose, &stem))
            .map_err(|e| DlError::fetch_failed(e.to_string()))?;

        if !artifact.is_file() {
            return Err(DlError::fetch_failed(format!(
                "yt-dlp finished but {} was not created",
                artifact.display()
            )));
        }

        if !purpose.is_audio() {
            let leftover = output_dir.join(format!("{}.webm", name));
            if leftover.is_file() {
                log::debug!("Removing leftover {}", leftover.display());
                if let Err(e) = fs::remove_file(&leftover) {
                    log::warn!("Could not remove {}: {}", leftover.display(), e);
                }
            }
        }

        Ok(MediaFile::new(artifact))
    }
}
