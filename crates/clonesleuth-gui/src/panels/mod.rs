/// Page-level panels composed by the app shell.
pub mod alerts_panel;
pub mod dashboard_panel;
pub mod monitoring_panel;
pub mod result_panel;
pub mod scanner_panel;

use chrono::{DateTime, Utc};

/// Render a timestamp as a coarse relative age ("3 hours ago").
pub(crate) fn time_ago(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} hours ago");
    }
    let days = elapsed.num_days();
    if days < 365 {
        return format!("{days} days ago");
    }
    format!("{:.1} years ago", days as f64 / 365.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5)), "5 min ago");
        assert_eq!(time_ago(now - Duration::hours(3)), "3 hours ago");
        assert_eq!(time_ago(now - Duration::days(4)), "4 days ago");
    }
}
