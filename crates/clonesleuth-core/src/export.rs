/// Export rendering — CSV for the clone table, JSON for scan reports.
use anyhow::Context;

use crate::model::{ClonedApp, ScanResult};

/// Render the clone table as CSV.
pub fn clones_to_csv(clones: &[ClonedApp]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Name",
        "Package",
        "Store",
        "Similarity %",
        "Risk",
        "Detected",
        "Status",
    ])?;
    for clone in clones {
        writer.write_record([
            clone.name.as_str(),
            clone.package_name.as_str(),
            clone.store.as_str(),
            &clone.similarity_score.to_string(),
            clone.risk_level.label(),
            &clone.detected_date.to_rfc3339(),
            clone.status.label(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Render a scan report as pretty-printed JSON in the published camelCase shape.
pub fn scan_result_to_json(result: &ScanResult) -> anyhow::Result<String> {
    serde_json::to_string_pretty(result).context("serializing scan report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_clones_csv_has_header_and_rows() {
        let clones = fixtures::cloned_apps();
        let csv = clones_to_csv(&clones).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Name,Package,Store,Similarity %,Risk,Detected,Status"
        );
        assert_eq!(lines.count(), clones.len());
        assert!(csv.contains("Super VPN Pro"));
        assert!(csv.contains("Takedown Pending"));
    }
}
