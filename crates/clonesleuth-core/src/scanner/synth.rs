/// Simulated scanner — a display stub standing in for a real analysis engine.
///
/// After a fixed simulated delay it synthesizes a plausible risk report from
/// random draws. No file content is ever inspected. A deployment with a real
/// backend replaces this with another [`Scanner`] implementation; everything
/// downstream consumes the same [`ScanResult`].
use chrono::Utc;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use uuid::Uuid;

use super::{sleep_cancellable, ScanError, Scanner};
use crate::model::size::format_file_size;
use crate::model::{CategoryReport, CategoryReports, FileDescriptor, ScanResult};

/// Default simulated analysis time.
pub const SCAN_DELAY: Duration = Duration::from_secs(3);

/// Probability that a scan comes back suspicious.
const SUSPICIOUS_PROBABILITY: f64 = 0.3;

const COLOR_SUCCESS: &str = "#22c55e";
const COLOR_DANGER: &str = "#f87171";
const COLOR_WARNING: &str = "#fb923c";

/// A scanner that fabricates results after a configurable delay.
pub struct SimulatedScanner {
    delay: Duration,
}

impl SimulatedScanner {
    pub fn new() -> Self {
        Self { delay: SCAN_DELAY }
    }

    /// Override the simulated delay. Tests use `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for SimulatedScanner {
    fn scan(&self, file: &FileDescriptor, cancel: &AtomicBool) -> Result<ScanResult, ScanError> {
        if sleep_cancellable(self.delay, cancel) {
            return Err(ScanError::Cancelled);
        }
        Ok(synthesize(file))
    }
}

/// Build a full report for `file` from random draws.
///
/// One "suspicious" coin flip picks between a lower-biased and a
/// higher-biased sampling branch; every category's score, findings, and
/// colour follow that single flip, while the overall score is sampled
/// independently within the branch's band.
fn synthesize(file: &FileDescriptor) -> ScanResult {
    let mut rng = rand::rng();
    let suspicious = rng.random::<f64>() > 1.0 - SUSPICIOUS_PROBABILITY;

    let overall_score = if suspicious {
        rng.random_range(30..70)
    } else {
        rng.random_range(70..100)
    };

    let malware_detection = if suspicious {
        CategoryReport {
            score: rng.random_range(30..80),
            details: details(&[
                "Suspicious code patterns detected",
                "Contains known malware signatures",
            ]),
            color: COLOR_DANGER.to_owned(),
        }
    } else {
        CategoryReport {
            score: rng.random_range(80..100),
            details: details(&["No malware detected", "Clean scan result"]),
            color: COLOR_SUCCESS.to_owned(),
        }
    };

    let permission_analysis = if suspicious {
        CategoryReport {
            score: rng.random_range(20..80),
            details: details(&["Excessive permission requests", "Unnecessary system access"]),
            color: COLOR_WARNING.to_owned(),
        }
    } else {
        CategoryReport {
            score: rng.random_range(70..100),
            details: details(&[
                "Standard permissions only",
                "No excessive privileges requested",
            ]),
            color: COLOR_SUCCESS.to_owned(),
        }
    };

    let code_signature_verification = if suspicious {
        CategoryReport {
            score: rng.random_range(10..80),
            details: details(&["Invalid signature detected", "Package signature mismatch"]),
            color: COLOR_DANGER.to_owned(),
        }
    } else {
        CategoryReport {
            score: rng.random_range(80..100),
            details: details(&["Valid code signature", "Properly signed package"]),
            color: COLOR_SUCCESS.to_owned(),
        }
    };

    let package_name_similarity = if suspicious {
        CategoryReport {
            score: rng.random_range(0..80),
            details: details(&[
                "Similar to legitimate package name",
                "Potential typosquatting",
            ]),
            color: COLOR_WARNING.to_owned(),
        }
    } else {
        CategoryReport {
            score: rng.random_range(70..100),
            details: details(&["Unique package name", "No similarity to known brands"]),
            color: COLOR_SUCCESS.to_owned(),
        }
    };

    ScanResult {
        id: Uuid::new_v4(),
        file_name: file.name.clone(),
        file_size: format_file_size(file.size_bytes),
        package_name: file.name.clone(),
        scan_date: Utc::now(),
        overall_score,
        categories: CategoryReports {
            malware_detection,
            permission_analysis,
            code_signature_verification,
            package_name_similarity,
        },
    }
}

fn details(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| (*s).to_owned()).collect()
}

/// The finding strings used by clean reports. Exposed so consumers and tests
/// can distinguish reassuring findings from negative ones.
pub const REASSURING_DETAILS: [&str; 8] = [
    "No malware detected",
    "Clean scan result",
    "Standard permissions only",
    "No excessive privileges requested",
    "Valid code signature",
    "Properly signed package",
    "Unique package name",
    "No similarity to known brands",
];

/// The finding strings used by suspicious reports.
pub const NEGATIVE_DETAILS: [&str; 8] = [
    "Suspicious code patterns detected",
    "Contains known malware signatures",
    "Excessive permission requests",
    "Unnecessary system access",
    "Invalid signature detected",
    "Package signature mismatch",
    "Similar to legitimate package name",
    "Potential typosquatting",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScanResult {
        synthesize(&FileDescriptor {
            name: "banking.apk".to_owned(),
            size_bytes: 4_200_000,
        })
    }

    #[test]
    fn test_synthesize_carries_file_identity() {
        let result = sample();
        assert_eq!(result.file_name, "banking.apk");
        assert_eq!(result.package_name, "banking.apk");
        assert_eq!(result.file_size, "4.01 MB");
    }

    #[test]
    fn test_synthesize_every_category_has_findings() {
        let result = sample();
        for (_, report) in result.categories.iter() {
            assert!(!report.details.is_empty());
            assert!(report.score <= 100);
        }
    }

    #[test]
    fn test_overall_score_in_band() {
        for _ in 0..100 {
            let result = sample();
            assert!((30..100).contains(&result.overall_score));
        }
    }
}
