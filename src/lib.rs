// OVH DNS backup tool - library modules
pub mod backup;
pub mod cli;
pub mod credentials;
pub mod error;
pub mod exporter;
pub mod ovh;

pub use backup::BackupReport;
pub use credentials::{CredentialOverrides, CredentialSet};
pub use error::{BackupError, Result};
pub use exporter::ZoneExporter;

#[cfg(test)]
mod backup_tests;
