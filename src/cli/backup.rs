use std::path::Path;

use crate::backup::{self, BackupReport};
use crate::credentials::{self, CredentialOverrides, CredentialSource};
use crate::error::Result;
use crate::ovh::OvhClient;

/// Resolve credentials, build the OVH client and run the backup.
///
/// Complete CLI credentials are passed to the client explicitly; otherwise
/// construction falls back to the ovh.toml in the working directory. With
/// neither, this fails before any network call.
pub async fn execute(
    overrides: &CredentialOverrides,
    destination_root: &Path,
) -> Result<BackupReport> {
    let client = match credentials::resolve(overrides)? {
        CredentialSource::Explicit(credentials) => OvhClient::new(credentials)?,
        CredentialSource::ConfigFile => {
            OvhClient::from_config_file(overrides.endpoint.as_deref())?
        }
    };

    println!("Backing up DNS zones...");
    println!("  Destination: {}", destination_root.display());

    let report = backup::run(&client, destination_root).await?;

    println!("\n✓ Backup completed successfully");
    println!("  Zones written: {}", report.zone_count);
    println!("  Location: {}", report.output_dir.display());

    Ok(report)
}
