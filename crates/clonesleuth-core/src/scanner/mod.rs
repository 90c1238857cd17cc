/// Scanner module — orchestrates background scan simulation.
///
/// Two independent mechanisms run here, one per scan mode:
/// - **Package scan:** [`start_scan`] runs a [`Scanner`] implementation on a
///   background thread and reports lifecycle events over a bounded channel.
/// - **Marketplace search:** [`start_store_search`] drives a cosmetic
///   percentage ticker for the store-search mode. It produces no results.
///
/// Both handles carry a cancel flag that their thread polls at sub-second
/// intervals, and both cancel on `Drop`, so no background timer can outlive
/// the state that owns it.
pub mod progress;
pub mod synth;

use crate::model::{FileDescriptor, ScanResult};
use progress::{ScanProgress, SearchProgress};

use crossbeam_channel::Receiver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// File extension accepted by the scanner intake. The check is a plain
/// name-suffix comparison; package contents are never validated.
pub const PACKAGE_EXTENSION: &str = ".apk";

/// Maximum number of progress messages that may queue up in a scan channel.
///
/// A single scan produces a handful of messages, so a small bound suffices;
/// the bound exists so a UI that stops draining cannot grow the heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// How often background threads re-check their cancel flag while sleeping.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interval between cosmetic search progress ticks.
pub const SEARCH_TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Percentage added per search tick.
pub const SEARCH_TICK_STEP: u8 = 5;

/// Pause between the counter reaching 100% and the finished message.
pub const SEARCH_FINISH_GRACE: Duration = Duration::from_millis(500);

/// Errors a scan can produce.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unsupported file format: {name} is not an .apk package")]
    UnsupportedFormat { name: String },
    #[error("scan cancelled")]
    Cancelled,
    #[error("scan failed: {0}")]
    Internal(String),
}

/// The scan capability boundary.
///
/// A real implementation (static analysis, signature database lookup,
/// similarity scoring) plugs in here without touching any presentation code.
/// `cancel` is polled by long-running implementations so callers can abort.
pub trait Scanner: Send + Sync {
    fn scan(&self, file: &FileDescriptor, cancel: &AtomicBool) -> Result<ScanResult, ScanError>;
}

/// Check a file name against the accepted package extension.
///
/// Callers run this before handing a file to [`start_scan`]; the scanner
/// itself never validates its input.
pub fn validate_package_file(name: &str) -> Result<(), ScanError> {
    if name.ends_with(PACKAGE_EXTENSION) {
        Ok(())
    } else {
        Err(ScanError::UnsupportedFormat {
            name: name.to_owned(),
        })
    }
}

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

impl Drop for ScanHandle {
    /// Dropping the handle cancels the scan so the background thread cannot
    /// keep running after its owner is gone.
    fn drop(&mut self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }
}

/// Start a scan of `file` on a background thread.
///
/// Sends `Started` immediately, then exactly one of `Complete`, `Failed`, or
/// `Cancelled`. Returns a [`ScanHandle`] for receiving progress and
/// requesting cancellation.
pub fn start_scan(scanner: Arc<dyn Scanner>, file: FileDescriptor) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("clonesleuth-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", file.name);
            let _ = progress_tx.send(ScanProgress::Started {
                file_name: file.name.clone(),
            });

            match scanner.scan(&file, &cancel_clone) {
                Ok(result) => {
                    // Cancellation requested while the result was being
                    // produced wins over the result itself.
                    if cancel_clone.load(Ordering::Relaxed) {
                        let _ = progress_tx.send(ScanProgress::Cancelled);
                    } else {
                        info!("Scan of {} complete (score {})", file.name, result.overall_score);
                        let _ = progress_tx.send(ScanProgress::Complete {
                            result: Box::new(result),
                        });
                    }
                }
                Err(ScanError::Cancelled) => {
                    info!("Scan of {} cancelled", file.name);
                    let _ = progress_tx.send(ScanProgress::Cancelled);
                }
                Err(e) => {
                    let _ = progress_tx.send(ScanProgress::Failed {
                        message: e.to_string(),
                    });
                }
            }
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    }
}

/// Options for a marketplace search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub package_query: String,
    pub app_name: String,
    pub official_stores: bool,
    pub third_party_stores: bool,
    pub deep_analysis: bool,
    pub high_similarity_only: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            package_query: String::new(),
            app_name: String::new(),
            official_stores: true,
            third_party_stores: true,
            deep_analysis: false,
            high_similarity_only: true,
        }
    }
}

/// Handle to a running marketplace search ticker.
pub struct SearchHandle {
    /// Receiver for tick/finish updates from the ticker thread.
    pub progress_rx: Receiver<SearchProgress>,
    cancel_flag: Arc<AtomicBool>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl SearchHandle {
    /// Request the ticker to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }
}

/// Start the cosmetic marketplace-search ticker with default timing.
///
/// The counter climbs by [`SEARCH_TICK_STEP`] every [`SEARCH_TICK_INTERVAL`],
/// self-terminates at 100%, and reports `Finished` after a short grace delay.
pub fn start_store_search(options: SearchOptions) -> SearchHandle {
    start_store_search_with(options, SEARCH_TICK_INTERVAL, SEARCH_FINISH_GRACE)
}

/// Start the search ticker with explicit timing. Used by tests to run the
/// full tick sequence without real-time delays.
pub fn start_store_search_with(
    options: SearchOptions,
    tick_interval: Duration,
    finish_grace: Duration,
) -> SearchHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<SearchProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("clonesleuth-search".into())
        .spawn(move || {
            info!(
                "Starting store search for {:?} (official: {}, third-party: {}, deep: {}, high-similarity: {})",
                options.package_query,
                options.official_stores,
                options.third_party_stores,
                options.deep_analysis,
                options.high_similarity_only,
            );

            let mut percent: u8 = 0;
            while percent < 100 {
                if sleep_cancellable(tick_interval, &cancel_clone) {
                    let _ = progress_tx.send(SearchProgress::Cancelled);
                    return;
                }
                percent = percent.saturating_add(SEARCH_TICK_STEP).min(100);
                let _ = progress_tx.send(SearchProgress::Tick { percent });
            }

            if sleep_cancellable(finish_grace, &cancel_clone) {
                let _ = progress_tx.send(SearchProgress::Cancelled);
                return;
            }
            let _ = progress_tx.send(SearchProgress::Finished);
        })
        .expect("failed to spawn search thread");

    SearchHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    }
}

/// Sleep for `duration`, re-checking `cancel` every [`CANCEL_POLL_INTERVAL`].
///
/// Returns `true` if cancellation was requested before the sleep finished.
pub(crate) fn sleep_cancellable(duration: Duration, cancel: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if cancel.load(Ordering::Relaxed) {
            return true;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return cancel.load(Ordering::Relaxed);
        }
        thread::sleep(remaining.min(CANCEL_POLL_INTERVAL));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_package_file() {
        assert!(validate_package_file("app.apk").is_ok());
        assert!(matches!(
            validate_package_file("app.txt"),
            Err(ScanError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            validate_package_file("apk"),
            Err(ScanError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_sleep_cancellable_honours_flag() {
        let cancel = AtomicBool::new(true);
        let start = Instant::now();
        assert!(sleep_cancellable(Duration::from_secs(10), &cancel));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
