/// Scan progress reporting — lightweight messages sent from background
/// threads to the UI thread via crossbeam channels.
use crate::model::ScanResult;

/// Progress updates from a package scan.
///
/// `Started` and `Complete` double as the user-facing notifications the
/// scanner emits at invocation and completion.
#[derive(Debug)]
pub enum ScanProgress {
    /// The scan thread has begun analysing the file.
    Started { file_name: String },
    /// Scanning completed successfully with the attached report.
    Complete { result: Box<ScanResult> },
    /// The scan failed. Recoverable; the orchestrator returns to a safe state.
    Failed { message: String },
    /// The scan was cancelled before completing.
    Cancelled,
}

/// Progress updates from the marketplace search ticker.
///
/// This drives a purely cosmetic progress bar; no results are produced.
#[derive(Debug)]
pub enum SearchProgress {
    /// The percentage counter advanced.
    Tick { percent: u8 },
    /// The counter reached 100% and the grace delay elapsed.
    Finished,
    /// The search was cancelled.
    Cancelled,
}
