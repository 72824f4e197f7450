use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error(
        "Missing configuration: pass --endpoint, --application-key, --application-secret and \
         --consumer-key, or provide an ovh.toml in the current directory"
    )]
    MissingConfiguration,

    #[error("Unknown OVH endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file {path} has no usable profile: {detail}")]
    ConfigProfile { path: PathBuf, detail: String },

    #[error("Failed to create backup directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write zone file {path}: {source}")]
    ZoneWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("OVH API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BackupError>;
