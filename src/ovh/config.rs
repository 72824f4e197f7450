use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::credentials::CredentialSet;
use crate::error::{BackupError, Result};

/// One named profile in ovh.toml. The `[default]` section carries the
/// endpoint to use; the section named after that endpoint carries the keys:
///
/// ```toml
/// [default]
/// endpoint = "ovh-eu"
///
/// [ovh-eu]
/// application_key = "..."
/// application_secret = "..."
/// consumer_key = "..."
/// ```
#[derive(Debug, Deserialize)]
struct Profile {
    endpoint: Option<String>,
    application_key: Option<String>,
    application_secret: Option<String>,
    consumer_key: Option<String>,
}

/// Load credentials from a profile config file. A CLI `--endpoint` selects
/// the profile even when the keys come from the file; otherwise the
/// `[default]` section decides.
pub(crate) fn load(path: &Path, endpoint_override: Option<&str>) -> Result<CredentialSet> {
    let raw = fs::read_to_string(path).map_err(|source| BackupError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let profiles: BTreeMap<String, Profile> =
        toml::from_str(&raw).map_err(|source| BackupError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    let endpoint = match endpoint_override {
        Some(endpoint) => endpoint.to_string(),
        None => profiles
            .get("default")
            .and_then(|p| p.endpoint.clone())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| profile_error(path, "no endpoint in [default] and none given"))?,
    };

    let profile = profiles
        .get(&endpoint)
        .ok_or_else(|| profile_error(path, format!("no [{endpoint}] section")))?;

    Ok(CredentialSet {
        application_key: require_key(path, &endpoint, "application_key", &profile.application_key)?,
        application_secret: require_key(
            path,
            &endpoint,
            "application_secret",
            &profile.application_secret,
        )?,
        consumer_key: require_key(path, &endpoint, "consumer_key", &profile.consumer_key)?,
        endpoint,
    })
}

fn require_key(path: &Path, endpoint: &str, key: &str, value: &Option<String>) -> Result<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| profile_error(path, format!("missing {key} in [{endpoint}]")))
}

fn profile_error(path: &Path, detail: impl Into<String>) -> BackupError {
    BackupError::ConfigProfile {
        path: path.to_path_buf(),
        detail: detail.into(),
    }
}
