/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Background
/// work (the package scan and the marketplace search ticker) communicates
/// via channels; state updates happen in `process_scan_messages()` and
/// `process_search_messages()`, which run once per frame.
use clonesleuth_core::model::{FileDescriptor, ScanResult};
use clonesleuth_core::scanner::progress::{ScanProgress, SearchProgress};
use clonesleuth_core::scanner::synth::SimulatedScanner;
use clonesleuth_core::scanner::{
    self, ScanHandle, Scanner, SearchHandle, SearchOptions,
};
use clonesleuth_core::store::{AlertFilter, AppStore};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

/// The current phase of the package-scan flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// No scan in progress. A file may be selected but not yet scanned.
    Idle,
    /// A scan is running; starting another is a no-op.
    Scanning,
    /// A scan finished and its report is held until the user resets.
    Complete,
    /// A scan failed. Recoverable via reset; the report area shows the error.
    Failed,
}

/// Which page the main panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    Scanner,
    Monitoring,
    Alerts,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Dashboard,
        ActiveView::Scanner,
        ActiveView::Monitoring,
        ActiveView::Alerts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Scanner => "Scanner",
            ActiveView::Monitoring => "Monitoring",
            ActiveView::Alerts => "Alerts",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "\u{1f4ca}",
            ActiveView::Scanner => "\u{1f50d}",
            ActiveView::Monitoring => "\u{1f4f1}",
            ActiveView::Alerts => "\u{1f514}",
        }
    }
}

/// Scan-mode tab on the scanner page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTab {
    PackageSearch,
    ApkUpload,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient toast notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub created: Instant,
}

/// Maximum number of progress messages drained from each channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread for a perceptible duration when it is eventually shown again.
pub const MAX_MESSAGES_PER_FRAME: usize = 64;

/// How long a toast stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Maximum toasts shown at once; the oldest is dropped beyond this.
pub const MAX_NOTICES: usize = 5;

/// All application state.
pub struct AppState {
    // ── Navigation ─────────────────────────────────────
    pub view: ActiveView,

    // ── Package scan ───────────────────────────────────
    pub phase: ScanPhase,
    pub selected_file: Option<FileDescriptor>,
    pub scan_result: Option<ScanResult>,
    pub scan_error: Option<String>,
    scan_handle: Option<ScanHandle>,
    scanner: Arc<dyn Scanner>,

    // ── Marketplace search (cosmetic ticker) ───────────
    pub search_active: bool,
    pub search_percent: u8,
    pub search_options: SearchOptions,
    search_handle: Option<SearchHandle>,

    // ── Scanner page inputs ────────────────────────────
    pub scan_tab: ScanTab,
    pub path_input: String,

    // ── Portfolio data ─────────────────────────────────
    pub store: AppStore,
    pub alert_filter: AlertFilter,

    // ── Notifications ──────────────────────────────────
    pub notices: Vec<Notice>,

    // ── Chrome ─────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    pub show_about: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state backed by the simulated scanner.
    pub fn new() -> Self {
        Self::with_scanner(Arc::new(SimulatedScanner::new()))
    }

    /// Create state with an explicit scanner implementation.
    ///
    /// Tests inject a zero-delay scanner; a real analysis backend would plug
    /// in here the same way.
    pub fn with_scanner(scanner: Arc<dyn Scanner>) -> Self {
        Self {
            view: ActiveView::Dashboard,
            phase: ScanPhase::Idle,
            selected_file: None,
            scan_result: None,
            scan_error: None,
            scan_handle: None,
            scanner,
            search_active: false,
            search_percent: 0,
            search_options: SearchOptions::default(),
            search_handle: None,
            scan_tab: ScanTab::PackageSearch,
            path_input: String::new(),
            store: AppStore::with_sample_data(),
            alert_filter: AlertFilter::All,
            notices: Vec::new(),
            dark_mode: true,
            show_about: false,
        }
    }

    // ── File selection ─────────────────────────────────

    /// Whether the start-scan action is currently available.
    pub fn can_start_scan(&self) -> bool {
        self.selected_file.is_some() && self.phase != ScanPhase::Scanning
    }

    /// Offer a file for scanning.
    ///
    /// Non-package names are rejected here, synchronously, with a transient
    /// notification; nothing else changes and the scanner is never invoked.
    pub fn select_file(&mut self, name: String, size_bytes: u64) {
        if self.phase == ScanPhase::Scanning || self.phase == ScanPhase::Complete {
            return;
        }
        if let Err(e) = scanner::validate_package_file(&name) {
            warn!("Rejected file {}: {}", name, e);
            self.push_notice(
                NoticeKind::Error,
                "Invalid File Format",
                "Please select an APK file.",
            );
            return;
        }
        // Selecting after a failure returns to a clean idle state.
        self.phase = ScanPhase::Idle;
        self.scan_error = None;
        self.push_notice(
            NoticeKind::Info,
            "File Selected",
            format!("{name} ready for scanning."),
        );
        self.selected_file = Some(FileDescriptor { name, size_bytes });
    }

    /// Resolve a typed-in path to a file selection.
    pub fn load_file_from_path(&mut self, path: &str) {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return;
        }
        let p = std::path::Path::new(trimmed);
        match std::fs::metadata(p) {
            Ok(meta) if meta.is_file() => {
                let name = p
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| trimmed.to_owned());
                self.select_file(name, meta.len());
            }
            _ => {
                self.push_notice(
                    NoticeKind::Error,
                    "File Not Found",
                    format!("Could not read {trimmed}."),
                );
            }
        }
    }

    /// Remove the selected file without scanning it.
    pub fn clear_file(&mut self) {
        if self.phase != ScanPhase::Scanning {
            self.selected_file = None;
        }
    }

    // ── Scan lifecycle ─────────────────────────────────

    /// Start scanning the selected file.
    ///
    /// A no-op while a scan is already running, or when no file is selected.
    pub fn start_scan(&mut self) {
        if self.phase == ScanPhase::Scanning {
            return;
        }
        let Some(file) = self.selected_file.clone() else {
            return;
        };
        self.phase = ScanPhase::Scanning;
        self.scan_result = None;
        self.scan_error = None;
        self.scan_handle = Some(scanner::start_scan(self.scanner.clone(), file));
    }

    /// Request cancellation of the running scan.
    ///
    /// The phase changes once the scan thread acknowledges with `Cancelled`.
    pub fn cancel_scan(&mut self) {
        if let Some(ref handle) = self.scan_handle {
            handle.cancel();
        }
    }

    /// Discard the held report (or failure) and return to `Idle`.
    ///
    /// Clears the file selection so a fresh file can be chosen.
    pub fn reset_scan(&mut self) {
        if self.phase == ScanPhase::Scanning {
            return;
        }
        self.phase = ScanPhase::Idle;
        self.scan_result = None;
        self.scan_error = None;
        self.selected_file = None;
    }

    /// Drain pending scan progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (state changed).
    pub fn process_scan_messages(&mut self) -> bool {
        let mut drained = Vec::new();
        if let Some(ref handle) = self.scan_handle {
            while drained.len() < MAX_MESSAGES_PER_FRAME {
                match handle.progress_rx.try_recv() {
                    Ok(msg) => drained.push(msg),
                    Err(_) => break,
                }
            }
        }
        if drained.is_empty() {
            return false;
        }

        for msg in drained {
            match msg {
                ScanProgress::Started { file_name } => {
                    self.push_notice(
                        NoticeKind::Info,
                        "Scan Started",
                        format!("Analyzing {file_name}..."),
                    );
                }
                ScanProgress::Complete { result } => {
                    self.push_notice(
                        NoticeKind::Success,
                        "Scan Complete",
                        format!("Analysis of {} finished.", result.file_name),
                    );
                    self.scan_result = Some(*result);
                    self.phase = ScanPhase::Complete;
                    self.scan_handle = None;
                }
                ScanProgress::Failed { message } => {
                    self.push_notice(NoticeKind::Error, "Scan Failed", message.clone());
                    self.scan_error = Some(message);
                    self.phase = ScanPhase::Failed;
                    self.scan_handle = None;
                }
                ScanProgress::Cancelled => {
                    self.push_notice(
                        NoticeKind::Info,
                        "Scan Cancelled",
                        "The scan was stopped before completing.",
                    );
                    // The selected file survives so the user can retry.
                    self.phase = ScanPhase::Idle;
                    self.scan_handle = None;
                }
            }
        }
        true
    }

    // ── Marketplace search ─────────────────────────────

    /// Start the cosmetic store-search progress ticker.
    pub fn start_store_search(&mut self) {
        if self.search_active {
            return;
        }
        self.search_active = true;
        self.search_percent = 0;
        self.search_handle = Some(scanner::start_store_search(self.search_options.clone()));
    }

    /// Cancel the store search and reset its progress display.
    pub fn cancel_store_search(&mut self) {
        if let Some(handle) = self.search_handle.take() {
            handle.cancel();
        }
        self.search_active = false;
        self.search_percent = 0;
    }

    /// Drain pending search ticker messages. Called once per frame.
    pub fn process_search_messages(&mut self) -> bool {
        let mut drained = Vec::new();
        if let Some(ref handle) = self.search_handle {
            while drained.len() < MAX_MESSAGES_PER_FRAME {
                match handle.progress_rx.try_recv() {
                    Ok(msg) => drained.push(msg),
                    Err(_) => break,
                }
            }
        }
        if drained.is_empty() {
            return false;
        }

        for msg in drained {
            match msg {
                SearchProgress::Tick { percent } => {
                    self.search_percent = percent;
                }
                SearchProgress::Finished | SearchProgress::Cancelled => {
                    self.search_active = false;
                    self.search_percent = 0;
                    self.search_handle = None;
                }
            }
        }
        true
    }

    // ── Portfolio intents ──────────────────────────────

    /// Request a takedown for a clone, surfacing the outcome as a toast.
    pub fn request_takedown(&mut self, clone_id: &str) {
        match self.store.request_takedown(clone_id) {
            Ok(()) => {
                let name = self
                    .store
                    .find_clone(clone_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| clone_id.to_owned());
                self.push_notice(
                    NoticeKind::Success,
                    "Takedown Requested",
                    format!("A takedown request for \"{name}\" has been submitted."),
                );
            }
            Err(e) => {
                self.push_notice(NoticeKind::Error, "Takedown Unavailable", e.to_string());
            }
        }
    }

    /// Mark every alert read.
    pub fn mark_all_alerts_read(&mut self) {
        self.store.mark_all_alerts_read();
    }

    // ── Notifications ──────────────────────────────────

    /// Queue a transient toast, evicting the oldest beyond [`MAX_NOTICES`].
    pub fn push_notice(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        if self.notices.len() >= MAX_NOTICES {
            self.notices.remove(0);
        }
        self.notices.push(Notice {
            kind,
            title: title.into(),
            message: message.into(),
            created: Instant::now(),
        });
    }

    /// Drop toasts older than [`NOTICE_TTL`]. Called once per frame.
    pub fn prune_notices(&mut self) {
        self.notices.retain(|n| n.created.elapsed() < NOTICE_TTL);
    }
}
