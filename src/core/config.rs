use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::expand::Variables;
use super::purpose::Purpose;
use super::remote::{Remote, RemoteSettings, LOCAL_NODE};
use super::runner::CommandRunner;
use super::samba::DEFAULT_MOUNT_ROOT;
use crate::error::{DlError, Result};
use crate::platform::wsl;

pub const DEFAULT_CONFIG_FILE: &str = "dl.config";

/// Environment variable that overrides the local audio directory
pub const MP3S_ENV: &str = "mp3s";

/// Variable injected for the Windows home directory under WSL
pub const WIN_HOME_VAR: &str = "win_home";

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    local: Option<LocalSettings>,
    #[serde(default)]
    remotes: Option<serde_yaml::Mapping>,
    #[serde(default)]
    platform: Option<PlatformSettings>,
}

#[derive(Debug, Default, Deserialize)]
struct LocalSettings {
    #[serde(default)]
    mp3s: Option<String>,
    #[serde(default)]
    vdest: Option<String>,
    #[serde(default)]
    xdest: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlatformSettings {
    #[serde(default)]
    wsl: Option<bool>,
    #[serde(default)]
    mount_root: Option<String>,
    /// Seconds
    #[serde(default)]
    command_timeout: Option<u64>,
}

/// Resolved platform settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformOptions {
    pub wsl: bool,
    pub mount_root: PathBuf,
    pub command_timeout: Option<Duration>,
}

impl Default for PlatformOptions {
    fn default() -> Self {
        Self {
            wsl: false,
            mount_root: PathBuf::from(DEFAULT_MOUNT_ROOT),
            command_timeout: None,
        }
    }
}

/// Settings for one invocation. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    config_path: PathBuf,
    local: Remote,
    remotes: Vec<Remote>,
    platform: PlatformOptions,
}

impl Config {
    /// Assemble a config directly, mostly useful for tests
    pub fn new(local: Remote, remotes: Vec<Remote>) -> Self {
        Self {
            config_path: PathBuf::new(),
            local: Remote {
                name: LOCAL_NODE.to_string(),
                ..local
            },
            remotes,
            platform: PlatformOptions::default(),
        }
    }

    pub fn with_platform(mut self, platform: PlatformOptions) -> Self {
        self.platform = platform;
        self
    }

    /// Load `path`, expanding variables from the process environment
    pub fn load(path: &Path, runner: &dyn CommandRunner) -> Result<Self> {
        Self::load_with(path, runner, Variables::from_env())
    }

    pub fn load_with(path: &Path, runner: &dyn CommandRunner, vars: Variables) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DlError::ConfigNotFound(path.to_path_buf()),
            _ => DlError::config_unreadable(path, e.to_string()),
        })?;
        Self::parse(&raw, path, runner, vars)
    }

    /// Parse config text as if it had been read from `path`
    pub fn parse(
        raw: &str,
        path: &Path,
        runner: &dyn CommandRunner,
        mut vars: Variables,
    ) -> Result<Self> {
        let parsed: RawConfig = if raw.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(raw).map_err(|e| DlError::config_unreadable(path, e.to_string()))?
        };

        let platform_settings = parsed.platform.unwrap_or_default();
        let is_wsl = platform_settings.wsl.unwrap_or_else(wsl::detect);
        if is_wsl && !vars.contains(WIN_HOME_VAR) {
            match wsl::native_home(runner) {
                Ok(home) => vars.insert(WIN_HOME_VAR, home.to_string_lossy()),
                Err(e) => log::warn!("Could not determine the Windows home directory: {}", e),
            }
        }

        let expand = |value: &str| vars.expand(value);

        let local_settings = parsed.local.unwrap_or_default();
        let mut local = Remote::from_settings(
            LOCAL_NODE,
            RemoteSettings {
                mp3s: local_settings.mp3s,
                vdest: local_settings.vdest,
                xdest: local_settings.xdest,
                ..Default::default()
            },
            expand,
        );
        if let Some(mp3s) = vars.get(MP3S_ENV).filter(|v| !v.trim().is_empty()) {
            let dir = PathBuf::from(&mp3s);
            if !dir.is_dir() {
                return Err(DlError::config_unreadable(
                    path,
                    format!(
                        "{} environment variable points to {}, but that directory does not exist",
                        MP3S_ENV, mp3s
                    ),
                ));
            }
            log::debug!("Using ${} override for the audio directory: {}", MP3S_ENV, mp3s);
            local.mp3s = Some(dir);
        }

        let mut remotes = Vec::new();
        for (key, value) in parsed.remotes.unwrap_or_default() {
            let name = match key {
                serde_yaml::Value::String(s) => s,
                other => serde_yaml::to_string(&other)
                    .map(|s| s.trim().to_string())
                    .map_err(|e| DlError::config_unreadable(path, e.to_string()))?,
            };
            let settings: RemoteSettings = if value.is_null() {
                RemoteSettings::default()
            } else {
                serde_yaml::from_value(value).map_err(|e| {
                    DlError::config_unreadable(path, format!("remote '{}': {}", name, e))
                })?
            };
            remotes.push(Remote::from_settings(&name, settings, expand));
        }

        let platform = PlatformOptions {
            wsl: is_wsl,
            mount_root: platform_settings
                .mount_root
                .map(|root| PathBuf::from(expand(&root)))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MOUNT_ROOT)),
            command_timeout: platform_settings.command_timeout.map(Duration::from_secs),
        };

        Ok(Self {
            config_path: path.to_path_buf(),
            local,
            remotes,
            platform,
        })
    }

    /// `~/dl.config`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DlError::platform("Could not determine home directory"))?;
        Ok(home.join(DEFAULT_CONFIG_FILE))
    }

    /// Expand variables and a leading `~/` in a user-supplied config path
    pub fn expand_path(path: &str) -> PathBuf {
        let expanded = Variables::from_env().expand(path);
        if let Some(rest) = expanded.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(expanded)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The local pseudo-remote holding this machine's output directories
    pub fn local(&self) -> &Remote {
        &self.local
    }

    /// Every configured remote, in file order
    pub fn remotes(&self) -> &[Remote] {
        &self.remotes
    }

    pub fn remote(&self, name: &str) -> Option<&Remote> {
        self.remotes.iter().find(|r| r.name == name)
    }

    /// Remotes not marked `disabled`, in file order
    pub fn active_remotes(&self) -> impl Iterator<Item = &Remote> {
        self.remotes.iter().filter(|r| !r.disabled)
    }

    pub fn active_remote_names(&self) -> Vec<&str> {
        self.active_remotes().map(|r| r.name.as_str()).collect()
    }

    pub fn platform(&self) -> &PlatformOptions {
        &self.platform
    }

    /// Local output directory for `purpose`, if configured
    pub fn local_dir(&self, purpose: Purpose) -> Option<&Path> {
        self.local.path_for(purpose)
    }
}
