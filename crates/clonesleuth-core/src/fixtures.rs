/// Hand-authored sample records backing the dashboard.
///
/// Every constructor returns a fresh owned value. Nothing here is shared or
/// mutable; the [`crate::store::AppStore`] takes ownership of these records
/// and is the only place they change.
use chrono::{DateTime, Utc};

use crate::model::{
    Alert, AlertKind, CloneStatus, ClonedApp, MonitoredApp, MonitoringStatus, RiskLevel,
};

/// Direction of a metric's recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricTrend {
    Positive,
    Negative,
    Neutral,
}

/// A headline statistic shown as a dashboard card.
#[derive(Debug, Clone)]
pub struct DashboardMetric {
    pub title: &'static str,
    pub value: String,
    pub change: Option<f32>,
    pub trend: MetricTrend,
}

/// Count of clones per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskDistribution {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl RiskDistribution {
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}

/// One week of the clone-detection trend series.
#[derive(Debug, Clone)]
pub struct TrendPoint {
    pub week_of: DateTime<Utc>,
    pub count: u32,
}

/// Aggregate scan counters shown on the scanner page.
#[derive(Debug, Clone, Copy)]
pub struct ScanVolume {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub failed: u32,
}

/// Parse a known-good RFC 3339 fixture timestamp.
///
/// Falls back to the epoch rather than panicking so a typo in fixture data
/// degrades to an obviously-wrong date instead of aborting startup.
fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

/// The monitored application portfolio.
pub fn monitored_apps() -> Vec<MonitoredApp> {
    vec![
        MonitoredApp {
            id: "1".to_owned(),
            name: "Secure Messaging Pro".to_owned(),
            package_name: "com.company.securemsg".to_owned(),
            description: "End-to-end encrypted messaging application".to_owned(),
            status: MonitoringStatus::Active,
            last_scanned: ts("2025-04-09T15:30:00Z"),
            clone_count: 3,
        },
        MonitoredApp {
            id: "2".to_owned(),
            name: "Cloud Bank".to_owned(),
            package_name: "com.cloudbank.mobile".to_owned(),
            description: "Mobile banking application".to_owned(),
            status: MonitoringStatus::Active,
            last_scanned: ts("2025-04-10T10:15:00Z"),
            clone_count: 5,
        },
        MonitoredApp {
            id: "3".to_owned(),
            name: "Super VPN".to_owned(),
            package_name: "com.supervpn.client".to_owned(),
            description: "Virtual private network service".to_owned(),
            status: MonitoringStatus::Active,
            last_scanned: ts("2025-04-10T08:45:00Z"),
            clone_count: 12,
        },
        MonitoredApp {
            id: "4".to_owned(),
            name: "Photo Editor Pro".to_owned(),
            package_name: "com.photoeditor.pro".to_owned(),
            description: "Advanced photo editing tools".to_owned(),
            status: MonitoringStatus::Paused,
            last_scanned: ts("2025-04-08T14:20:00Z"),
            clone_count: 1,
        },
        MonitoredApp {
            id: "5".to_owned(),
            name: "Fitness Tracker".to_owned(),
            package_name: "com.fitnesstracker.app".to_owned(),
            description: "Health and fitness tracking application".to_owned(),
            status: MonitoringStatus::Error,
            last_scanned: ts("2025-04-09T09:10:00Z"),
            clone_count: 0,
        },
    ]
}

/// Clones detected across marketplaces, newest first.
pub fn cloned_apps() -> Vec<ClonedApp> {
    vec![
        ClonedApp {
            id: "c1".to_owned(),
            original_app_id: "3".to_owned(),
            name: "Super VPN Pro".to_owned(),
            package_name: "com.supervpn.free".to_owned(),
            store: "Third-Party Store A".to_owned(),
            similarity_score: 92,
            risk_level: RiskLevel::Critical,
            detected_date: ts("2025-04-10T07:30:00Z"),
            status: CloneStatus::Active,
        },
        ClonedApp {
            id: "c2".to_owned(),
            original_app_id: "3".to_owned(),
            name: "SuperFast VPN".to_owned(),
            package_name: "net.fastsuper.vpn".to_owned(),
            store: "Alternative App Store".to_owned(),
            similarity_score: 87,
            risk_level: RiskLevel::High,
            detected_date: ts("2025-04-09T15:45:00Z"),
            status: CloneStatus::TakedownPending,
        },
        ClonedApp {
            id: "c3".to_owned(),
            original_app_id: "2".to_owned(),
            name: "Cloud Banking".to_owned(),
            package_name: "org.cloudbanking.app".to_owned(),
            store: "Third-Party Store B".to_owned(),
            similarity_score: 95,
            risk_level: RiskLevel::Critical,
            detected_date: ts("2025-04-09T09:20:00Z"),
            status: CloneStatus::Active,
        },
        ClonedApp {
            id: "c4".to_owned(),
            original_app_id: "1".to_owned(),
            name: "Secure Message".to_owned(),
            package_name: "com.secure.messenger".to_owned(),
            store: "Alternative App Store".to_owned(),
            similarity_score: 78,
            risk_level: RiskLevel::Medium,
            detected_date: ts("2025-04-08T13:10:00Z"),
            status: CloneStatus::TakedownPending,
        },
        ClonedApp {
            id: "c5".to_owned(),
            original_app_id: "2".to_owned(),
            name: "Cloud Bank Mobile".to_owned(),
            package_name: "com.cloud.banking".to_owned(),
            store: "Third-Party Store C".to_owned(),
            similarity_score: 89,
            risk_level: RiskLevel::High,
            detected_date: ts("2025-04-07T17:30:00Z"),
            status: CloneStatus::Removed,
        },
    ]
}

/// The alert feed, newest first.
pub fn recent_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "a1".to_owned(),
            kind: AlertKind::CloneDetected,
            title: "Critical Clone Detected".to_owned(),
            message: "\"Super VPN Pro\" clone of \"Super VPN\" detected with 92% similarity"
                .to_owned(),
            timestamp: ts("2025-04-10T07:30:00Z"),
            cloned_app_id: Some("c1".to_owned()),
            original_app_id: Some("3".to_owned()),
            risk_level: Some(RiskLevel::Critical),
            read: false,
        },
        Alert {
            id: "a2".to_owned(),
            kind: AlertKind::CloneDetected,
            title: "High Risk Clone Detected".to_owned(),
            message: "\"SuperFast VPN\" clone of \"Super VPN\" detected with 87% similarity"
                .to_owned(),
            timestamp: ts("2025-04-09T15:45:00Z"),
            cloned_app_id: Some("c2".to_owned()),
            original_app_id: Some("3".to_owned()),
            risk_level: Some(RiskLevel::High),
            read: false,
        },
        Alert {
            id: "a3".to_owned(),
            kind: AlertKind::RiskIncreased,
            title: "Risk Level Increased".to_owned(),
            message: "Risk level for \"Cloud Banking\" clone increased to CRITICAL".to_owned(),
            timestamp: ts("2025-04-09T12:15:00Z"),
            cloned_app_id: Some("c3".to_owned()),
            original_app_id: None,
            risk_level: Some(RiskLevel::Critical),
            read: true,
        },
        Alert {
            id: "a4".to_owned(),
            kind: AlertKind::TakedownStatus,
            title: "Takedown In Progress".to_owned(),
            message: "Takedown request for \"Cloud Bank Mobile\" has been acknowledged".to_owned(),
            timestamp: ts("2025-04-08T09:30:00Z"),
            cloned_app_id: Some("c5".to_owned()),
            original_app_id: None,
            risk_level: None,
            read: true,
        },
        Alert {
            id: "a5".to_owned(),
            kind: AlertKind::TakedownStatus,
            title: "Clone Removed".to_owned(),
            message: "\"Cloud Bank Mobile\" clone has been successfully removed".to_owned(),
            timestamp: ts("2025-04-07T18:45:00Z"),
            cloned_app_id: Some("c5".to_owned()),
            original_app_id: None,
            risk_level: None,
            read: true,
        },
    ]
}

/// Headline dashboard metrics.
pub fn dashboard_metrics() -> Vec<DashboardMetric> {
    vec![
        DashboardMetric {
            title: "Total Monitored Apps",
            value: "5".to_owned(),
            change: Some(1.0),
            trend: MetricTrend::Positive,
        },
        DashboardMetric {
            title: "Active Clones",
            value: "3".to_owned(),
            change: Some(2.0),
            trend: MetricTrend::Negative,
        },
        DashboardMetric {
            title: "Takedown Success Rate",
            value: "78%".to_owned(),
            change: Some(3.0),
            trend: MetricTrend::Positive,
        },
        DashboardMetric {
            title: "Average Detection Time",
            value: "4.2 hrs".to_owned(),
            change: Some(-0.8),
            trend: MetricTrend::Positive,
        },
    ]
}

/// Weekly clone-detection counts for the trend chart, oldest first.
pub fn detection_trend() -> Vec<TrendPoint> {
    vec![
        TrendPoint {
            week_of: ts("2025-03-10T00:00:00Z"),
            count: 2,
        },
        TrendPoint {
            week_of: ts("2025-03-17T00:00:00Z"),
            count: 3,
        },
        TrendPoint {
            week_of: ts("2025-03-24T00:00:00Z"),
            count: 1,
        },
        TrendPoint {
            week_of: ts("2025-03-31T00:00:00Z"),
            count: 4,
        },
        TrendPoint {
            week_of: ts("2025-04-07T00:00:00Z"),
            count: 5,
        },
    ]
}

/// Aggregate scan counters.
pub fn scan_volume() -> ScanVolume {
    ScanVolume {
        total: 124,
        completed: 122,
        in_progress: 2,
        failed: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_are_unique() {
        let apps = monitored_apps();
        let mut ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), apps.len());
    }

    #[test]
    fn test_clones_reference_monitored_apps() {
        let apps = monitored_apps();
        for clone in cloned_apps() {
            assert!(
                apps.iter().any(|a| a.id == clone.original_app_id),
                "clone {} references unknown app {}",
                clone.id,
                clone.original_app_id
            );
        }
    }

    #[test]
    fn test_fixture_timestamps_parse() {
        // A failed parse falls back to the epoch; fixture data must not.
        for app in monitored_apps() {
            assert!(app.last_scanned.timestamp() > 0);
        }
        for alert in recent_alerts() {
            assert!(alert.timestamp.timestamp() > 0);
        }
    }
}
