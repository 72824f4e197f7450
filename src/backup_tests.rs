#[cfg(test)]
mod tests {
    use crate::backup::{dated_output_dir, run_for_date};
    use crate::error::{BackupError, Result};
    use crate::exporter::ZoneExporter;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::path::Path;
    use tempfile::TempDir;

    struct MockExporter {
        zones: Vec<(&'static str, &'static str)>,
        fail_on: Option<&'static str>,
    }

    impl MockExporter {
        fn new(zones: Vec<(&'static str, &'static str)>) -> Self {
            Self {
                zones,
                fail_on: None,
            }
        }
    }

    #[async_trait]
    impl ZoneExporter for MockExporter {
        async fn list_zones(&self) -> Result<Vec<String>> {
            Ok(self.zones.iter().map(|(name, _)| name.to_string()).collect())
        }

        async fn export_zone(&self, zone: &str) -> Result<String> {
            if self.fail_on == Some(zone) {
                return Err(BackupError::Api {
                    status: 500,
                    message: format!("export of {zone} failed"),
                });
            }

            self.zones
                .iter()
                .find(|(name, _)| *name == zone)
                .map(|(_, payload)| payload.to_string())
                .ok_or(BackupError::Api {
                    status: 404,
                    message: "zone not found".to_string(),
                })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dated_output_dir_format() {
        let dir = dated_output_dir(Path::new("/tmp/out"), date(2026, 8, 28));
        assert_eq!(dir, Path::new("/tmp/out/2026-08-28"));
    }

    #[test]
    fn test_dated_output_dir_zero_padded() {
        let dir = dated_output_dir(Path::new("/tmp/out"), date(2026, 1, 5));
        assert_eq!(dir, Path::new("/tmp/out/2026-01-05"));
    }

    #[tokio::test]
    async fn test_backup_writes_all_zones() {
        let temp = TempDir::new().unwrap();
        let exporter = MockExporter::new(vec![("a.com", "ZONEA"), ("b.com", "ZONEB")]);

        let report = run_for_date(&exporter, temp.path(), date(2026, 8, 28))
            .await
            .unwrap();

        assert_eq!(report.zone_count, 2);
        assert_eq!(report.output_dir, temp.path().join("2026-08-28"));

        let a = std::fs::read_to_string(report.output_dir.join("a.com")).unwrap();
        let b = std::fs::read_to_string(report.output_dir.join("b.com")).unwrap();
        assert_eq!(a, "ZONEA");
        assert_eq!(b, "ZONEB");
    }

    #[tokio::test]
    async fn test_payload_written_verbatim() {
        let temp = TempDir::new().unwrap();
        // No trailing-newline normalization, content untouched
        let exporter = MockExporter::new(vec![("a.com", "$TTL 3600\n@ IN SOA dns.ovh.net.")]);

        let report = run_for_date(&exporter, temp.path(), date(2026, 8, 28))
            .await
            .unwrap();

        let written = std::fs::read_to_string(report.output_dir.join("a.com")).unwrap();
        assert_eq!(written, "$TTL 3600\n@ IN SOA dns.ovh.net.");
    }

    #[tokio::test]
    async fn test_empty_zone_list_still_creates_directory() {
        let temp = TempDir::new().unwrap();
        let exporter = MockExporter::new(vec![]);

        let report = run_for_date(&exporter, temp.path(), date(2026, 8, 28))
            .await
            .unwrap();

        assert_eq!(report.zone_count, 0);
        assert!(report.output_dir.exists());
        assert_eq!(std::fs::read_dir(&report.output_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_parents_are_created() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("backups");
        let exporter = MockExporter::new(vec![("a.com", "ZONEA")]);

        let report = run_for_date(&exporter, &root, date(2026, 8, 28)).await.unwrap();
        assert!(report.output_dir.join("a.com").exists());
    }

    #[tokio::test]
    async fn test_failure_aborts_run_but_keeps_earlier_files() {
        let temp = TempDir::new().unwrap();
        let mut exporter = MockExporter::new(vec![("a.com", "ZONEA"), ("b.com", "ZONEB")]);
        exporter.fail_on = Some("b.com");

        let result = run_for_date(&exporter, temp.path(), date(2026, 8, 28)).await;
        assert!(matches!(result, Err(BackupError::Api { status: 500, .. })));

        // The first zone was already written before the abort
        let output_dir = temp.path().join("2026-08-28");
        assert!(output_dir.join("a.com").exists());
        assert!(!output_dir.join("b.com").exists());
    }

    #[tokio::test]
    async fn test_same_day_rerun_overwrites_in_place() {
        let temp = TempDir::new().unwrap();
        let day = date(2026, 8, 28);

        let first = MockExporter::new(vec![("a.com", "OLD")]);
        let report = run_for_date(&first, temp.path(), day).await.unwrap();

        let second = MockExporter::new(vec![("a.com", "NEW")]);
        let rerun = run_for_date(&second, temp.path(), day).await.unwrap();

        assert_eq!(report.output_dir, rerun.output_dir);
        let contents = std::fs::read_to_string(rerun.output_dir.join("a.com")).unwrap();
        assert_eq!(contents, "NEW");
    }

    #[tokio::test]
    async fn test_directory_creation_failure_is_fatal() {
        let temp = TempDir::new().unwrap();

        // A regular file where the destination root should be makes
        // create_dir_all fail
        let blocked = temp.path().join("blocked");
        std::fs::write(&blocked, "not a directory").unwrap();

        let exporter = MockExporter::new(vec![("a.com", "ZONEA")]);
        let result = run_for_date(&exporter, &blocked, date(2026, 8, 28)).await;

        assert!(matches!(result, Err(BackupError::DirectoryCreation { .. })));
    }
}
