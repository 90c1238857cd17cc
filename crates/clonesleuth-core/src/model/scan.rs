/// Scan report model — the structured result produced by a package scan.
///
/// A [`ScanResult`] is created fully-formed by the scanner, is immutable
/// thereafter, and lives only in transient UI state until the user starts a
/// new scan or resets the view. Serialization uses camelCase member names so
/// exported reports match the service's published JSON shape.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file handed to the scanner: a name and a byte count.
///
/// This is the entire scan input. No file content is ever read — the
/// simulation only needs enough to label and size the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
}

/// The four fixed analysis categories every scan reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCategory {
    MalwareDetection,
    PermissionAnalysis,
    CodeSignatureVerification,
    PackageNameSimilarity,
}

impl ScanCategory {
    /// All categories in report order.
    pub const ALL: [ScanCategory; 4] = [
        ScanCategory::MalwareDetection,
        ScanCategory::PermissionAnalysis,
        ScanCategory::CodeSignatureVerification,
        ScanCategory::PackageNameSimilarity,
    ];

    /// The camelCase key used in serialized reports.
    pub fn key(&self) -> &'static str {
        match self {
            ScanCategory::MalwareDetection => "malwareDetection",
            ScanCategory::PermissionAnalysis => "permissionAnalysis",
            ScanCategory::CodeSignatureVerification => "codeSignatureVerification",
            ScanCategory::PackageNameSimilarity => "packageNameSimilarity",
        }
    }

    /// Human-readable label derived from the key: split on word boundaries
    /// and capitalize each word.
    pub fn label(&self) -> String {
        humanize_key(self.key())
    }
}

/// Split a camelCase key on its word boundaries and capitalize each word.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

/// One category's contribution to a scan report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category score in [0, 100]. Higher is safer.
    pub score: u8,
    /// At least one finding string. Never empty.
    pub details: Vec<String>,
    /// Hex display colour chosen by the scanner for this category.
    pub color: String,
}

/// The fixed four-category breakdown of a scan report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReports {
    pub malware_detection: CategoryReport,
    pub permission_analysis: CategoryReport,
    pub code_signature_verification: CategoryReport,
    pub package_name_similarity: CategoryReport,
}

impl CategoryReports {
    /// Iterate the categories in report order, paired with their identity.
    pub fn iter(&self) -> impl Iterator<Item = (ScanCategory, &CategoryReport)> {
        [
            (ScanCategory::MalwareDetection, &self.malware_detection),
            (ScanCategory::PermissionAnalysis, &self.permission_analysis),
            (
                ScanCategory::CodeSignatureVerification,
                &self.code_signature_verification,
            ),
            (
                ScanCategory::PackageNameSimilarity,
                &self.package_name_similarity,
            ),
        ]
        .into_iter()
    }
}

/// A completed package scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub id: Uuid,
    pub file_name: String,
    /// Human-readable size, pre-formatted by [`crate::model::size::format_file_size`].
    pub file_size: String,
    pub package_name: String,
    pub scan_date: DateTime<Utc>,
    /// Overall safety score in [0, 100]. Higher is safer.
    pub overall_score: u8,
    #[serde(rename = "results")]
    pub categories: CategoryReports,
}

impl ScanResult {
    /// The tri-level risk band shown inside the score ring.
    pub fn risk_band(&self) -> &'static str {
        risk_band(self.overall_score)
    }

    /// The installation recommendation for this report.
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_score(self.overall_score)
    }
}

/// Risk band label for an overall score.
pub fn risk_band(score: u8) -> &'static str {
    if score >= 70 {
        "Low Risk"
    } else if score >= 50 {
        "Medium Risk"
    } else {
        "High Risk"
    }
}

/// Installation recommendation, chosen by overall-score threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Score >= 70.
    Legitimate,
    /// Score in [50, 70).
    Review,
    /// Score < 50.
    Avoid,
}

impl Recommendation {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Recommendation::Legitimate
        } else if score >= 50 {
            Recommendation::Review
        } else {
            Recommendation::Avoid
        }
    }

    /// The full recommendation sentence shown under a report.
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::Legitimate => {
                "This application appears to be legitimate with no major security concerns detected."
            }
            Recommendation::Review => {
                "This application has some suspicious characteristics. Review the detailed analysis before installation."
            }
            Recommendation::Avoid => {
                "This application shows signs of being a potential clone or containing malicious code. Avoid installation."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("malwareDetection"), "Malware Detection");
        assert_eq!(
            humanize_key("codeSignatureVerification"),
            "Code Signature Verification"
        );
        assert_eq!(humanize_key("score"), "Score");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(
            ScanCategory::PackageNameSimilarity.label(),
            "Package Name Similarity"
        );
        assert_eq!(
            ScanCategory::PermissionAnalysis.label(),
            "Permission Analysis"
        );
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(Recommendation::from_score(85), Recommendation::Legitimate);
        assert_eq!(Recommendation::from_score(70), Recommendation::Legitimate);
        assert_eq!(Recommendation::from_score(69), Recommendation::Review);
        assert_eq!(Recommendation::from_score(50), Recommendation::Review);
        assert_eq!(Recommendation::from_score(45), Recommendation::Avoid);
        assert_eq!(Recommendation::from_score(0), Recommendation::Avoid);
    }

    #[test]
    fn test_risk_band_thresholds() {
        assert_eq!(risk_band(70), "Low Risk");
        assert_eq!(risk_band(55), "Medium Risk");
        assert_eq!(risk_band(49), "High Risk");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = CategoryReport {
            score: 90,
            details: vec!["No malware detected".to_owned()],
            color: "#22c55e".to_owned(),
        };
        let result = ScanResult {
            id: Uuid::nil(),
            file_name: "app.apk".to_owned(),
            file_size: "1 KB".to_owned(),
            package_name: "app.apk".to_owned(),
            scan_date: DateTime::<Utc>::MIN_UTC,
            overall_score: 88,
            categories: CategoryReports {
                malware_detection: report.clone(),
                permission_analysis: report.clone(),
                code_signature_verification: report.clone(),
                package_name_similarity: report,
            },
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"overallScore\""));
        assert!(json.contains("\"results\""));
        assert!(json.contains("\"malwareDetection\""));
        assert!(json.contains("\"codeSignatureVerification\""));
    }
}
