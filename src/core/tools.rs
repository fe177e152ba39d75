// External tool discovery (yt-dlp, ffmpeg)
use std::path::PathBuf;

use super::purpose::Purpose;
use crate::error::{DlError, Result};

pub const YT_DLP: &str = "yt-dlp";
pub const FFMPEG: &str = "ffmpeg";

const YT_DLP_HINT: &str = "Install it with `pip install yt-dlp` or download a release from https://github.com/yt-dlp/yt-dlp";

const FFMPEG_HINT: &str = "ffmpeg is required for audio extraction. \
Ubuntu/Debian: sudo apt-get install ffmpeg; macOS: brew install ffmpeg; \
Windows: https://ffmpeg.org/download.html";

/// Locate `tool` on the PATH
pub fn require(tool: &str, hint: &str) -> Result<PathBuf> {
    which::which(tool).map_err(|_| DlError::ToolMissing {
        tool: tool.to_string(),
        hint: hint.to_string(),
    })
}

/// Make sure everything needed to fetch media for `purpose` is installed.
///
/// Returns the path of the yt-dlp executable.
pub fn ensure_for(purpose: Purpose) -> Result<PathBuf> {
    let yt_dlp = require(YT_DLP, YT_DLP_HINT)?;
    if purpose.is_audio() {
        require(FFMPEG, FFMPEG_HINT)?;
    }
    log::debug!("Using {}", yt_dlp.display());
    Ok(yt_dlp)
}
