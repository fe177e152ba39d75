//! Fan-out of a downloaded artifact to every active remote.
//!
//! Each remote is handled on its own: a remote that is misconfigured or
//! unreachable is recorded in the [`DistributionReport`] and the loop moves
//! on. Nothing in here returns an error for a single remote.

use colored::Colorize;
use std::path::{Path, PathBuf};

use super::config::Config;
use super::media_file::MediaFile;
use super::purpose::Purpose;
use super::remote::{Remote, TransferMethod};
use super::resolver::resolve;
use super::runner::{CommandRunner, CommandSpec};
use super::samba::{parse_remote_path, SambaMounter};
use crate::error::Result;
use crate::platform::{copy_file, MountProbe};

/// Program used for the `copy` transfer method
pub const REMOTE_COPY_PROGRAM: &str = "scp";

/// Result of delivering the artifact to one remote
#[derive(Debug)]
pub struct RemoteOutcome {
    pub remote: String,
    pub method: TransferMethod,
    /// Where the file went, or why it did not get there
    pub result: Result<String>,
}

impl RemoteOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn message(&self) -> String {
        match &self.result {
            Ok(target) => format!("copied to {}", target),
            Err(e) => e.to_string(),
        }
    }
}

/// Per-remote outcomes of one distribution pass, in config order
#[derive(Debug, Default)]
pub struct DistributionReport {
    pub purpose: Option<Purpose>,
    pub outcomes: Vec<RemoteOutcome>,
}

impl DistributionReport {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// At least one remote was attempted and none succeeded
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.succeeded() == 0
    }

    pub fn outcome(&self, remote: &str) -> Option<&RemoteOutcome> {
        self.outcomes.iter().find(|o| o.remote == remote)
    }
}

/// Copies artifacts to remotes using the configured transfer methods
pub struct Distributor<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    mounter: SambaMounter<'a>,
}

impl<'a> Distributor<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner, probe: &'a dyn MountProbe) -> Self {
        let mounter = SambaMounter::new(runner, probe, config.platform().mount_root.clone());
        Self {
            config,
            runner,
            mounter,
        }
    }

    /// Deliver `media` to every active remote for `purpose`
    pub fn distribute(&self, media: &MediaFile, purpose: Purpose) -> DistributionReport {
        let mut report = DistributionReport {
            purpose: Some(purpose),
            outcomes: Vec::new(),
        };

        let remotes: Vec<&Remote> = self.config.active_remotes().collect();
        if remotes.is_empty() {
            log::info!("No active remotes configured");
            return report;
        }

        if !media.suits(purpose) {
            log::warn!(
                "{} does not look like {}; distributing anyway",
                media.file_name(),
                purpose.description()
            );
        }

        for remote in remotes {
            let result = self.copy_to(media, remote, purpose);
            if let Err(e) = &result {
                log::warn!("Failed to copy to {}: {}", remote.name, e);
            }
            report.outcomes.push(RemoteOutcome {
                remote: remote.name.clone(),
                method: remote.method,
                result,
            });
        }

        report
    }

    /// Copy `media` from the local pseudo-remote to `target`
    pub fn copy_to(&self, media: &MediaFile, target: &Remote, purpose: Purpose) -> Result<String> {
        let source = self.config.local();
        log::debug!(
            "{} -> {} ({}, {})",
            source.name,
            target.name,
            target.method,
            purpose
        );

        let remote_path = resolve(target, purpose)?;
        match target.method {
            TransferMethod::Copy => self.copy_remote(media, target, remote_path),
            TransferMethod::Samba => self.copy_samba(media, target, remote_path),
        }
    }

    fn copy_remote(&self, media: &MediaFile, target: &Remote, remote_path: &Path) -> Result<String> {
        let destination = format!("{}:{}", target.name, remote_path.display());
        println!(
            "{} {}/{} using {}",
            "Copying to".cyan(),
            destination,
            media.file_name(),
            REMOTE_COPY_PROGRAM
        );

        let spec = CommandSpec::new(REMOTE_COPY_PROGRAM)
            .arg(media.path().to_string_lossy())
            .arg(destination.as_str());
        self.runner.run_checked(&spec)?;

        Ok(format!("{}/{}", destination, media.file_name()))
    }

    fn copy_samba(&self, media: &MediaFile, target: &Remote, remote_path: &Path) -> Result<String> {
        let share = parse_remote_path(&remote_path.to_string_lossy())?;
        let mount_point = self.mounter.ensure_mounted(&target.name, &share.drive)?;
        let destination = samba_target(&mount_point, &share.subpath, &media.file_name());
        println!(
            "{} {} using samba",
            "Copying to".cyan(),
            destination.display()
        );

        copy_file(media.path(), &destination)?;
        Ok(destination.to_string_lossy().to_string())
    }
}

/// `{mount_point}{subpath}/{file_name}`
fn samba_target(mount_point: &Path, subpath: &str, file_name: &str) -> PathBuf {
    let subpath = subpath.trim_matches('/');
    let mut target = mount_point.to_path_buf();
    if !subpath.is_empty() {
        target.push(subpath);
    }
    target.push(file_name);
    target
}
