use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::purpose::Purpose;

/// Custom error type for dl
#[derive(Error, Debug)]
pub enum DlError {
    #[error("Configuration file {0:?} does not exist")]
    ConfigNotFound(PathBuf),

    #[error("Configuration file {path:?} could not be read: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },

    #[error("Remote {remote} does not define a path for {}", .purpose.description())]
    UndefinedDestination { remote: String, purpose: Purpose },

    #[error("Unknown purpose '{0}'")]
    UnknownPurpose(String),

    #[error("Invalid windows path '{0}': expected 'drive:/path'")]
    MalformedRemotePath(String),

    #[error("Download failed: {0}")]
    FetchFailed(String),

    #[error("{tool} not found. {hint}")]
    ToolMissing { tool: String, hint: String },

    #[error("Command `{command}` failed ({status}){}", format_output(.output))]
    ExternalCommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// Result type alias for dl
pub type Result<T> = std::result::Result<T, DlError>;

impl DlError {
    /// Create a config-unreadable error
    pub fn config_unreadable<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        DlError::ConfigUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch_failed<S: Into<String>>(msg: S) -> Self {
        DlError::FetchFailed(msg.into())
    }

    pub fn platform<S: Into<String>>(msg: S) -> Self {
        DlError::Platform(msg.into())
    }

    /// Whether this error ends the whole invocation.
    ///
    /// Errors scoped to a single remote are recorded in the distribution
    /// report instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            DlError::UndefinedDestination { .. }
                | DlError::UnknownPurpose(_)
                | DlError::MalformedRemotePath(_)
                | DlError::ExternalCommandFailed { .. }
        )
    }

    /// Process exit status for a fatal error
    pub fn exit_code(&self) -> i32 {
        match self {
            DlError::FetchFailed(_) | DlError::ToolMissing { .. } => 3,
            _ => 1,
        }
    }
}
