use async_trait::async_trait;

use crate::error::Result;

/// Remote capability consumed by the backup loop: enumerate the account's
/// zones and fetch one zone's exported representation.
///
/// Implementations must return zones in provider order; the orchestrator
/// iterates them as-is. Any failure aborts the whole run, there is no
/// per-zone retry.
#[async_trait]
pub trait ZoneExporter {
    /// List all zone names owned by the authenticated account
    async fn list_zones(&self) -> Result<Vec<String>>;

    /// Fetch the full textual export of a zone. The payload is opaque to
    /// the backup tool and written to disk verbatim.
    async fn export_zone(&self, zone: &str) -> Result<String>;
}
