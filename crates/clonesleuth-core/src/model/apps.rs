/// Portfolio entities — monitored apps, detected clones, and alerts.
///
/// These are read-mostly records backing the dashboard tables and cards.
/// Their enumerated status fields drive badge colouring in the UI; all
/// mutation goes through [`crate::store::AppStore`].
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monitoring state of a protected application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringStatus {
    Active,
    Paused,
    Error,
}

impl MonitoringStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MonitoringStatus::Active => "Active",
            MonitoringStatus::Paused => "Paused",
            MonitoringStatus::Error => "Error",
        }
    }
}

/// Severity tag attached to a clone or alert, used for display styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// Lifecycle state of a detected clone.
///
/// Takedown is modelled purely as a state transition on the record; there is
/// no integration with any real removal process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloneStatus {
    Active,
    TakedownPending,
    Removed,
}

impl CloneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CloneStatus::Active => "Active",
            CloneStatus::TakedownPending => "Takedown Pending",
            CloneStatus::Removed => "Removed",
        }
    }
}

/// An application under clone monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredApp {
    pub id: String,
    pub name: String,
    pub package_name: String,
    pub description: String,
    pub status: MonitoringStatus,
    pub last_scanned: DateTime<Utc>,
    pub clone_count: u32,
}

/// A third-party application flagged as imitating a monitored original.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClonedApp {
    pub id: String,
    pub original_app_id: String,
    pub name: String,
    pub package_name: String,
    /// The marketplace the clone was found on.
    pub store: String,
    /// Resemblance percentage in [0, 100], used for ranking and risk display.
    pub similarity_score: u8,
    pub risk_level: RiskLevel,
    pub detected_date: DateTime<Utc>,
    pub status: CloneStatus,
}

/// Category of a user-facing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    CloneDetected,
    RiskIncreased,
    TakedownStatus,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::CloneDetected => "Clone Detected",
            AlertKind::RiskIncreased => "Risk Increased",
            AlertKind::TakedownStatus => "Takedown Status",
        }
    }
}

/// A notification row in the alerts feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub cloned_app_id: Option<String>,
    pub original_app_id: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub read: bool,
}
