// OVH API client - the only point of contact with the provider
mod config;
mod sign;


use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::credentials::{CredentialSet, CONFIG_FILE};
use crate::error::{BackupError, Result};
use crate::exporter::ZoneExporter;

/// Endpoint identifiers accepted by `--endpoint`, mapped to API base URLs
const ENDPOINTS: &[(&str, &str)] = &[
    ("ovh-eu", "https://eu.api.ovh.com/1.0"),
    ("ovh-ca", "https://ca.api.ovh.com/1.0"),
    ("ovh-us", "https://api.us.ovhcloud.com/1.0"),
    ("kimsufi-eu", "https://eu.api.kimsufi.com/1.0"),
    ("kimsufi-ca", "https://ca.api.kimsufi.com/1.0"),
    ("soyoustart-eu", "https://eu.api.soyoustart.com/1.0"),
    ("soyoustart-ca", "https://ca.api.soyoustart.com/1.0"),
];

pub fn endpoint_base_url(endpoint: &str) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(name, _)| *name == endpoint)
        .map(|(_, url)| *url)
}

/// Error body returned by the OVH API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Authenticated OVH API client.
///
/// Every request is signed with the application secret and consumer key
/// using the server clock: the drift between local and server time is
/// fetched once from `/auth/time` on the first signed request and cached
/// for the client's lifetime.
pub struct OvhClient {
    http: reqwest::Client,
    base_url: &'static str,
    application_key: String,
    application_secret: String,
    consumer_key: String,
    time_delta: OnceCell<i64>,
}

impl OvhClient {
    /// Build a client from an explicit credential set
    pub fn new(credentials: CredentialSet) -> Result<Self> {
        let base_url = endpoint_base_url(&credentials.endpoint)
            .ok_or_else(|| BackupError::UnknownEndpoint(credentials.endpoint.clone()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            application_key: credentials.application_key,
            application_secret: credentials.application_secret,
            consumer_key: credentials.consumer_key,
            time_delta: OnceCell::new(),
        })
    }

    /// Build a client from the ovh.toml in the current working directory.
    /// `endpoint_override` selects the profile when given, otherwise the
    /// file's `[default]` section decides.
    pub fn from_config_file(endpoint_override: Option<&str>) -> Result<Self> {
        Self::from_config_path(Path::new(CONFIG_FILE), endpoint_override)
    }

    pub fn from_config_path(path: &Path, endpoint_override: Option<&str>) -> Result<Self> {
        let credentials = config::load(path, endpoint_override)?;
        Self::new(credentials)
    }

    /// Offset to add to local time to obtain server time, fetched once
    /// from the unauthenticated `/auth/time` endpoint
    async fn time_delta(&self) -> Result<i64> {
        self.time_delta
            .get_or_try_init(|| async {
                let url = format!("{}/auth/time", self.base_url);
                tracing::debug!("GET {url}");

                let response = self.http.get(&url).send().await?;
                let status = response.status();
                let text = response.text().await?;

                if !status.is_success() {
                    return Err(api_error(status.as_u16(), &text));
                }

                let server_time: i64 = serde_json::from_str(text.trim())?;
                let delta = server_time - chrono::Utc::now().timestamp();
                tracing::debug!("Server clock drift: {delta}s");
                Ok(delta)
            })
            .await
            .copied()
    }

    /// Signed GET request, deserializing the JSON response body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let timestamp = chrono::Utc::now().timestamp() + self.time_delta().await?;
        let signature = sign::signature(
            &self.application_secret,
            &self.consumer_key,
            "GET",
            &url,
            "",
            timestamp,
        );

        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header("X-Ovh-Application", &self.application_key)
            .header("X-Ovh-Consumer", &self.consumer_key)
            .header("X-Ovh-Timestamp", timestamp.to_string())
            .header("X-Ovh-Signature", signature)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Response status: {status}");

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

fn api_error(status: u16, body: &str) -> BackupError {
    // OVH errors carry a {"message": ...} body; fall back to the raw text
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string());

    BackupError::Api { status, message }
}

#[async_trait]
impl ZoneExporter for OvhClient {
    async fn list_zones(&self) -> Result<Vec<String>> {
        self.get("/domain/zone").await
    }

    async fn export_zone(&self, zone: &str) -> Result<String> {
        // The export endpoint returns the zone file as a JSON string
        self.get(&format!("/domain/zone/{zone}/export")).await
    }
}
