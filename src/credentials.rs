use std::path::Path;

use crate::error::{BackupError, Result};

/// Well-known config file name, probed in the current working directory
pub const CONFIG_FILE: &str = "ovh.toml";

/// The four-field authentication bundle required to call the OVH API.
/// A set is only ever constructed complete; partial credentials never
/// reach client construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    pub endpoint: String,
    pub application_key: String,
    pub application_secret: String,
    pub consumer_key: String,
}

/// Credential values as supplied on the command line, each possibly absent
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub endpoint: Option<String>,
    pub application_key: Option<String>,
    pub application_secret: Option<String>,
    pub consumer_key: Option<String>,
}

impl CredentialOverrides {
    /// Pick out the recognized credential fields, treating empty strings as
    /// absent. Returns a set only when all four fields are usable.
    pub fn complete(&self) -> Option<CredentialSet> {
        Some(CredentialSet {
            endpoint: non_empty(&self.endpoint)?,
            application_key: non_empty(&self.application_key)?,
            application_secret: non_empty(&self.application_secret)?,
            consumer_key: non_empty(&self.consumer_key)?,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

/// Where the OVH client should take its credentials from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Complete CLI credentials, passed to the client explicitly
    Explicit(CredentialSet),
    /// Fall back to the ovh.toml in the working directory; parsing is
    /// the client's job, the resolver only established the file exists
    ConfigFile,
}

/// Check for the well-known config file in the given directory
pub fn config_file_in(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

/// Decide whether a usable credential source exists. This is a cheap
/// fail-fast gate before any network activity; it does not validate that
/// the credentials are actually accepted by the API.
pub fn resolve(overrides: &CredentialOverrides) -> Result<CredentialSource> {
    let cwd = std::env::current_dir()?;
    resolve_in(overrides, &cwd)
}

pub fn resolve_in(overrides: &CredentialOverrides, dir: &Path) -> Result<CredentialSource> {
    if let Some(credentials) = overrides.complete() {
        return Ok(CredentialSource::Explicit(credentials));
    }

    if config_file_in(dir) {
        return Ok(CredentialSource::ConfigFile);
    }

    Err(BackupError::MissingConfiguration)
}
