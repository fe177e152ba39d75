//! Destination lookup by purpose.
//!
//! Resolution is lazy: a remote that lacks the directory for a purpose is
//! only an error when something actually asks for that purpose.

use std::path::Path;

use super::config::Config;
use super::purpose::Purpose;
use super::remote::Remote;
use crate::error::{DlError, Result};

/// Where a directory lookup is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource<'a> {
    Local,
    Remote(&'a str),
}

/// Directory that `remote` uses for `purpose`
pub fn resolve(remote: &Remote, purpose: Purpose) -> Result<&Path> {
    remote
        .path_for(purpose)
        .ok_or_else(|| DlError::UndefinedDestination {
            remote: remote.name.clone(),
            purpose,
        })
}

/// Like [`resolve`], for a purpose given by name (`mp3s`, `vdest`, `xdest`, ...)
pub fn resolve_key<'r>(remote: &'r Remote, purpose: &str) -> Result<&'r Path> {
    resolve(remote, purpose.parse()?)
}

/// Resolve against the local settings or a named remote of `config`
pub fn resolve_in<'c>(
    config: &'c Config,
    source: PathSource<'_>,
    purpose: Purpose,
) -> Result<&'c Path> {
    match source {
        PathSource::Local => resolve(config.local(), purpose),
        PathSource::Remote(name) => {
            let remote = config
                .remote(name)
                .ok_or_else(|| DlError::UndefinedDestination {
                    remote: name.to_string(),
                    purpose,
                })?;
            resolve(remote, purpose)
        }
    }
}
