use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::purpose::Purpose;

/// Name of the pseudo-remote that stands for this machine
pub const LOCAL_NODE: &str = "local";

/// How files reach a remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMethod {
    /// `scp` to `node:path`
    #[default]
    #[serde(alias = "scp")]
    Copy,
    /// Mount the node's Windows share and copy locally
    Samba,
}

impl fmt::Display for TransferMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMethod::Copy => f.write_str("scp"),
            TransferMethod::Samba => f.write_str("samba"),
        }
    }
}

/// A remote descriptor exactly as written in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteSettings {
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub method: TransferMethod,
    #[serde(default)]
    pub mp3s: Option<String>,
    #[serde(default)]
    pub vdest: Option<String>,
    #[serde(default)]
    pub xdest: Option<String>,
}

/// A destination node with one optional directory per purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub disabled: bool,
    pub method: TransferMethod,
    pub mp3s: Option<PathBuf>,
    pub vdest: Option<PathBuf>,
    pub xdest: Option<PathBuf>,
}

impl Remote {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            disabled: false,
            method: TransferMethod::default(),
            mp3s: None,
            vdest: None,
            xdest: None,
        }
    }

    /// Build a remote from its settings, running `expand` over every path field
    pub fn from_settings<F>(name: &str, settings: RemoteSettings, expand: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let path = |value: Option<String>| value.map(|v| PathBuf::from(expand(&v)));
        Self {
            name: name.to_string(),
            disabled: settings.disabled,
            method: settings.method,
            mp3s: path(settings.mp3s),
            vdest: path(settings.vdest),
            xdest: path(settings.xdest),
        }
    }

    pub fn with_method(mut self, method: TransferMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_path<P: Into<PathBuf>>(mut self, purpose: Purpose, path: P) -> Self {
        let path = Some(path.into());
        match purpose {
            Purpose::Audio => self.mp3s = path,
            Purpose::Video => self.vdest = path,
            Purpose::RestrictedVideo => self.xdest = path,
        }
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Raw path field for `purpose`, if the remote defines one
    pub fn path_for(&self, purpose: Purpose) -> Option<&Path> {
        match purpose {
            Purpose::Audio => self.mp3s.as_deref(),
            Purpose::Video => self.vdest.as_deref(),
            Purpose::RestrictedVideo => self.xdest.as_deref(),
        }
    }
}
