use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{BackupError, Result};
use crate::exporter::ZoneExporter;

/// Outcome of one backup run
#[derive(Debug, Clone)]
pub struct BackupReport {
    /// Dated directory the zone files were written into
    pub output_dir: PathBuf,
    /// Number of zones successfully exported and written
    pub zone_count: usize,
}

/// Default backup root when the caller supplies no destination
pub fn default_destination() -> PathBuf {
    std::env::temp_dir()
}

/// Dated output directory for a run: `destination_root/YYYY-MM-DD`.
/// Deterministic per calendar day, so same-day reruns share the directory.
pub fn dated_output_dir(destination_root: &Path, date: NaiveDate) -> PathBuf {
    destination_root.join(date.format("%Y-%m-%d").to_string())
}

/// Export every zone the account owns into a dated directory under
/// `destination_root`, one file per zone named after the zone itself.
///
/// Zones are processed sequentially in provider order. Payloads are written
/// verbatim, overwriting any file left by an earlier run the same day. The
/// first export or write failure aborts the run; files written up to that
/// point stay on disk.
///
/// Zone names are provider-controlled DNS names and are used as file names
/// without sanitization. Known limitation: a name containing a path
/// separator would escape the output directory.
pub async fn run<E: ZoneExporter>(exporter: &E, destination_root: &Path) -> Result<BackupReport> {
    let today = chrono::Local::now().date_naive();
    run_for_date(exporter, destination_root, today).await
}

pub async fn run_for_date<E: ZoneExporter>(
    exporter: &E,
    destination_root: &Path,
    date: NaiveDate,
) -> Result<BackupReport> {
    let output_dir = dated_output_dir(destination_root, date);

    // Directory creation failure is fatal: continuing would report a
    // healthy zero-zone run while every write fails
    fs::create_dir_all(&output_dir).map_err(|source| BackupError::DirectoryCreation {
        path: output_dir.clone(),
        source,
    })?;

    tracing::info!("Backing up DNS zones to {}", output_dir.display());

    let zones = exporter.list_zones().await?;
    tracing::debug!("Provider listed {} zone(s)", zones.len());

    let mut zone_count = 0;
    for zone in &zones {
        let payload = exporter.export_zone(zone).await?;

        let zone_file = output_dir.join(zone);
        fs::write(&zone_file, &payload).map_err(|source| BackupError::ZoneWrite {
            path: zone_file.clone(),
            source,
        })?;

        tracing::info!("Exported zone {} ({} bytes)", zone, payload.len());
        zone_count += 1;
    }

    Ok(BackupReport {
        output_dir,
        zone_count,
    })
}
