/// Data model — scan reports, monitored portfolio entities, and formatting.
pub mod apps;
pub mod scan;
pub mod size;

pub use apps::{Alert, AlertKind, CloneStatus, ClonedApp, MonitoredApp, MonitoringStatus, RiskLevel};
pub use scan::{
    CategoryReport, CategoryReports, FileDescriptor, Recommendation, ScanCategory, ScanResult,
};
