use std::fmt;
use std::str::FromStr;

use crate::error::DlError;

/// What a download is for. Selects which destination path of a remote applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Audio,
    Video,
    RestrictedVideo,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::Audio, Purpose::Video, Purpose::RestrictedVideo];

    /// Configuration key holding the directory for this purpose
    pub fn key(self) -> &'static str {
        match self {
            Purpose::Audio => "mp3s",
            Purpose::Video => "vdest",
            Purpose::RestrictedVideo => "xdest",
        }
    }

    /// Human readable name used in messages
    pub fn description(self) -> &'static str {
        match self {
            Purpose::Audio => "mp3s",
            Purpose::Video => "videos",
            Purpose::RestrictedVideo => "x-rated videos",
        }
    }

    pub fn is_audio(self) -> bool {
        self == Purpose::Audio
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Purpose {
    type Err = DlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp3s" | "mp3" | "audio" => Ok(Purpose::Audio),
            "vdest" | "video" | "videos" => Ok(Purpose::Video),
            "xdest" | "xrated" | "x-rated" => Ok(Purpose::RestrictedVideo),
            _ => Err(DlError::UnknownPurpose(s.to_string())),
        }
    }
}
