/// Application-state store — the single owner of all portfolio data.
///
/// The store takes ownership of the fixture records at construction and is
/// the only mutation path: panels read through accessors and request changes
/// through explicit operations. Illegal transitions return typed errors
/// rather than panicking or silently succeeding.
use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::fixtures;
use crate::fixtures::RiskDistribution;
use crate::model::{Alert, AlertKind, CloneStatus, ClonedApp, MonitoredApp, RiskLevel};

/// Errors from store update operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown clone id: {0}")]
    UnknownClone(String),
    #[error("unknown alert id: {0}")]
    UnknownAlert(String),
    #[error("cannot {action} a clone in the {status} state")]
    InvalidTransition {
        action: &'static str,
        status: &'static str,
    },
}

/// View filter for the alerts feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFilter {
    All,
    Unread,
    Kind(AlertKind),
}

impl AlertFilter {
    fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unread => !alert.read,
            AlertFilter::Kind(kind) => alert.kind == *kind,
        }
    }
}

/// Owned application state: monitored apps, detected clones, and alerts.
pub struct AppStore {
    monitored: Vec<MonitoredApp>,
    clones: Vec<ClonedApp>,
    alerts: Vec<Alert>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

impl AppStore {
    /// Build a store seeded with the sample portfolio.
    pub fn with_sample_data() -> Self {
        Self {
            monitored: fixtures::monitored_apps(),
            clones: fixtures::cloned_apps(),
            alerts: fixtures::recent_alerts(),
        }
    }

    // ── Reads ──────────────────────────────────────────

    pub fn monitored_apps(&self) -> &[MonitoredApp] {
        &self.monitored
    }

    pub fn clones(&self) -> &[ClonedApp] {
        &self.clones
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn find_monitored(&self, id: &str) -> Option<&MonitoredApp> {
        self.monitored.iter().find(|a| a.id == id)
    }

    pub fn find_clone(&self, id: &str) -> Option<&ClonedApp> {
        self.clones.iter().find(|c| c.id == id)
    }

    pub fn unread_alert_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn alerts_filtered(&self, filter: AlertFilter) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| filter.matches(a)).collect()
    }

    pub fn active_clone_count(&self) -> usize {
        self.clones
            .iter()
            .filter(|c| c.status == CloneStatus::Active)
            .count()
    }

    /// Clones per risk level, across every lifecycle state.
    pub fn risk_distribution(&self) -> RiskDistribution {
        let mut dist = RiskDistribution::default();
        for clone in &self.clones {
            match clone.risk_level {
                RiskLevel::Critical => dist.critical += 1,
                RiskLevel::High => dist.high += 1,
                RiskLevel::Medium => dist.medium += 1,
                RiskLevel::Low => dist.low += 1,
            }
        }
        dist
    }

    // ── Updates ────────────────────────────────────────

    /// Mark a single alert as read.
    pub fn mark_alert_read(&mut self, id: &str) -> Result<(), StoreError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::UnknownAlert(id.to_owned()))?;
        alert.read = true;
        Ok(())
    }

    /// Mark every alert as read.
    pub fn mark_all_alerts_read(&mut self) {
        for alert in &mut self.alerts {
            alert.read = true;
        }
    }

    /// Request a takedown for an active clone.
    ///
    /// Transitions `Active -> TakedownPending` and prepends a takedown-status
    /// alert to the feed. This is a record-state change only.
    pub fn request_takedown(&mut self, clone_id: &str) -> Result<(), StoreError> {
        let clone = self
            .clones
            .iter_mut()
            .find(|c| c.id == clone_id)
            .ok_or_else(|| StoreError::UnknownClone(clone_id.to_owned()))?;

        if clone.status != CloneStatus::Active {
            return Err(StoreError::InvalidTransition {
                action: "request a takedown for",
                status: clone.status.label(),
            });
        }

        clone.status = CloneStatus::TakedownPending;
        info!("Takedown requested for clone {} ({})", clone.id, clone.name);

        let alert = Alert {
            id: format!("a-{}", Uuid::new_v4()),
            kind: AlertKind::TakedownStatus,
            title: "Takedown Requested".to_owned(),
            message: format!("Takedown request for \"{}\" has been submitted", clone.name),
            timestamp: Utc::now(),
            cloned_app_id: Some(clone.id.clone()),
            original_app_id: Some(clone.original_app_id.clone()),
            risk_level: None,
            read: false,
        };
        self.alerts.insert(0, alert);
        Ok(())
    }

    /// Confirm that a pending takedown completed.
    ///
    /// Transitions `TakedownPending -> Removed` and prepends an alert.
    pub fn confirm_removed(&mut self, clone_id: &str) -> Result<(), StoreError> {
        let clone = self
            .clones
            .iter_mut()
            .find(|c| c.id == clone_id)
            .ok_or_else(|| StoreError::UnknownClone(clone_id.to_owned()))?;

        if clone.status != CloneStatus::TakedownPending {
            return Err(StoreError::InvalidTransition {
                action: "confirm removal of",
                status: clone.status.label(),
            });
        }

        clone.status = CloneStatus::Removed;
        info!("Clone {} ({}) marked removed", clone.id, clone.name);

        let alert = Alert {
            id: format!("a-{}", Uuid::new_v4()),
            kind: AlertKind::TakedownStatus,
            title: "Clone Removed".to_owned(),
            message: format!("\"{}\" clone has been successfully removed", clone.name),
            timestamp: Utc::now(),
            cloned_app_id: Some(clone.id.clone()),
            original_app_id: Some(clone.original_app_id.clone()),
            risk_level: None,
            read: false,
        };
        self.alerts.insert(0, alert);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_counts() {
        let store = AppStore::with_sample_data();
        assert_eq!(store.monitored_apps().len(), 5);
        assert_eq!(store.clones().len(), 5);
        assert_eq!(store.alerts().len(), 5);
        assert_eq!(store.unread_alert_count(), 2);
        assert_eq!(store.active_clone_count(), 2);
    }

    #[test]
    fn test_risk_distribution() {
        let store = AppStore::with_sample_data();
        let dist = store.risk_distribution();
        assert_eq!(dist.critical, 2);
        assert_eq!(dist.high, 2);
        assert_eq!(dist.medium, 1);
        assert_eq!(dist.low, 0);
        assert_eq!(dist.total(), 5);
    }

    #[test]
    fn test_mark_all_alerts_read() {
        let mut store = AppStore::with_sample_data();
        assert!(store.unread_alert_count() > 0);
        store.mark_all_alerts_read();
        assert_eq!(store.unread_alert_count(), 0);
    }

    #[test]
    fn test_mark_single_alert_read() {
        let mut store = AppStore::with_sample_data();
        store.mark_alert_read("a1").unwrap();
        assert_eq!(store.unread_alert_count(), 1);
        assert!(matches!(
            store.mark_alert_read("nope"),
            Err(StoreError::UnknownAlert(_))
        ));
    }

    #[test]
    fn test_takedown_transitions_active_clone() {
        let mut store = AppStore::with_sample_data();
        let alerts_before = store.alerts().len();

        store.request_takedown("c1").unwrap();
        assert_eq!(
            store.find_clone("c1").unwrap().status,
            CloneStatus::TakedownPending
        );
        // A takedown-status alert is prepended to the feed.
        assert_eq!(store.alerts().len(), alerts_before + 1);
        assert_eq!(store.alerts()[0].kind, AlertKind::TakedownStatus);
        assert!(!store.alerts()[0].read);
    }

    #[test]
    fn test_takedown_rejects_non_active_clone() {
        let mut store = AppStore::with_sample_data();
        // c5 is already removed; c2 is already pending.
        assert!(matches!(
            store.request_takedown("c5"),
            Err(StoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            store.request_takedown("c2"),
            Err(StoreError::InvalidTransition { .. })
        ));
        assert!(matches!(
            store.request_takedown("missing"),
            Err(StoreError::UnknownClone(_))
        ));
    }

    #[test]
    fn test_confirm_removed_requires_pending() {
        let mut store = AppStore::with_sample_data();
        store.confirm_removed("c2").unwrap();
        assert_eq!(store.find_clone("c2").unwrap().status, CloneStatus::Removed);

        assert!(matches!(
            store.confirm_removed("c1"),
            Err(StoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_alert_filters() {
        let store = AppStore::with_sample_data();
        assert_eq!(store.alerts_filtered(AlertFilter::All).len(), 5);
        assert_eq!(store.alerts_filtered(AlertFilter::Unread).len(), 2);
        assert_eq!(
            store
                .alerts_filtered(AlertFilter::Kind(AlertKind::TakedownStatus))
                .len(),
            2
        );
    }
}
