/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic.
///
/// **Scope:** All user-visible state transitions are covered:
///   - File selection and rejection of non-package names
///   - Scan lifecycle (start, progress messages, completion, cancellation)
///   - The idempotent start guard and reset semantics
///   - Marketplace search start/cancel
///   - Portfolio intents (takedown, mark-all-read) and toast notices
///
/// A real `SimulatedScanner` runs on a real background thread; a zero delay
/// keeps the suite fast and no mocking is needed.
use clonesleuth_core::scanner::synth::SimulatedScanner;
use clonesleuth_core::scanner::Scanner;
use clonesleuth_gui::state::{AppState, NoticeKind, ScanPhase};
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// State wired to a zero-delay scanner.
fn fast_state() -> AppState {
    let scanner: Arc<dyn Scanner> = Arc::new(SimulatedScanner::with_delay(Duration::ZERO));
    AppState::with_scanner(scanner)
}

/// State wired to a scanner slow enough that tests can observe `Scanning`.
fn slow_state() -> AppState {
    let scanner: Arc<dyn Scanner> = Arc::new(SimulatedScanner::with_delay(Duration::from_secs(30)));
    AppState::with_scanner(scanner)
}

/// Pump `process_scan_messages()` until the phase leaves `Scanning` or the
/// deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while state.phase == ScanPhase::Scanning {
        assert!(
            Instant::now() < deadline,
            "scan did not complete within 30 seconds"
        );
        state.process_scan_messages();
        std::thread::sleep(Duration::from_millis(5));
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

/// A freshly created `AppState` must start idle with nothing selected.
#[test]
fn new_state_is_idle() {
    let state = AppState::new();
    assert_eq!(state.phase, ScanPhase::Idle);
    assert!(state.selected_file.is_none());
    assert!(state.scan_result.is_none());
    assert!(!state.search_active);
}

/// Default state must start in dark mode.
#[test]
fn default_state_is_dark_mode() {
    let state = AppState::new();
    assert!(state.dark_mode, "dark mode must be the default");
}

// ── File selection ────────────────────────────────────────────────────────────

/// A package file is accepted and held for scanning.
#[test]
fn select_package_file() {
    let mut state = fast_state();
    state.select_file("app.apk".to_owned(), 25_000_000);
    let file = state.selected_file.as_ref().expect("file must be selected");
    assert_eq!(file.name, "app.apk");
    assert_eq!(file.size_bytes, 25_000_000);
    assert!(state.can_start_scan());
}

/// A non-package name is rejected synchronously: a toast appears, no file is
/// selected, the phase never leaves `Idle`, and no report is ever produced.
#[test]
fn select_rejects_non_package_file() {
    let mut state = fast_state();
    state.select_file("app.txt".to_owned(), 1000);

    assert_eq!(state.phase, ScanPhase::Idle);
    assert!(state.selected_file.is_none());
    assert!(!state.can_start_scan());
    assert!(state
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::Error && n.title == "Invalid File Format"));

    // Nothing was started, so pumping produces no report.
    assert!(!state.process_scan_messages());
    assert!(state.scan_result.is_none());
}

/// Loading from a real path picks up the file name and byte size.
#[test]
fn load_file_from_path_reads_metadata() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sample.apk");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&vec![0u8; 2048]).unwrap();

    let mut state = fast_state();
    state.load_file_from_path(&path.to_string_lossy());

    let file = state.selected_file.as_ref().expect("file must be selected");
    assert_eq!(file.name, "sample.apk");
    assert_eq!(file.size_bytes, 2048);
}

/// A missing path produces an error toast and selects nothing.
#[test]
fn load_file_from_missing_path_fails() {
    let mut state = fast_state();
    state.load_file_from_path("/definitely/not/here.apk");
    assert!(state.selected_file.is_none());
    assert!(state
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::Error && n.title == "File Not Found"));
}

// ── Scan lifecycle ────────────────────────────────────────────────────────────

/// Without a selected file, starting a scan is a no-op.
#[test]
fn start_scan_without_file_is_noop() {
    let mut state = fast_state();
    state.start_scan();
    assert_eq!(state.phase, ScanPhase::Idle);
}

/// A full scan run: Idle -> Scanning -> Complete with the report held.
#[test]
fn scan_completes_with_report() {
    let mut state = fast_state();
    state.select_file("app.apk".to_owned(), 25_000_000);
    state.start_scan();
    assert_eq!(state.phase, ScanPhase::Scanning);
    assert!(!state.can_start_scan());

    pump_until_done(&mut state);

    assert_eq!(state.phase, ScanPhase::Complete);
    let result = state.scan_result.as_ref().expect("report must be held");
    assert_eq!(result.file_name, "app.apk");
    assert_eq!(result.file_size, "23.84 MB");
    assert_eq!(result.categories.iter().count(), 4);

    // Both lifecycle toasts were surfaced.
    assert!(state.notices.iter().any(|n| n.title == "Scan Started"));
    assert!(state.notices.iter().any(|n| n.title == "Scan Complete"));
}

/// Starting a scan while one is already running is a no-op.
#[test]
fn start_scan_while_scanning_is_noop() {
    let mut state = slow_state();
    state.select_file("app.apk".to_owned(), 1_000_000);
    state.start_scan();
    assert_eq!(state.phase, ScanPhase::Scanning);

    // A second start must not restart or reset anything.
    state.start_scan();
    assert_eq!(state.phase, ScanPhase::Scanning);
    assert!(state.selected_file.is_some());
    assert!(state.scan_result.is_none());

    state.cancel_scan();
}

/// Cancelling returns to `Idle`, keeps the selected file, and holds no report.
#[test]
fn cancel_scan_returns_to_idle() {
    let mut state = slow_state();
    state.select_file("app.apk".to_owned(), 1_000_000);
    state.start_scan();
    state.cancel_scan();

    pump_until_done(&mut state);

    assert_eq!(state.phase, ScanPhase::Idle);
    assert!(state.scan_result.is_none());
    assert!(
        state.selected_file.is_some(),
        "the selected file survives a cancel so the user can retry"
    );
}

/// Resetting from `Complete` clears the report and re-enables selection.
#[test]
fn reset_from_complete_clears_report() {
    let mut state = fast_state();
    state.select_file("app.apk".to_owned(), 25_000_000);
    state.start_scan();
    pump_until_done(&mut state);
    assert_eq!(state.phase, ScanPhase::Complete);

    state.reset_scan();
    assert_eq!(state.phase, ScanPhase::Idle);
    assert!(state.scan_result.is_none());
    assert!(state.selected_file.is_none());

    // Selection works again after the reset.
    state.select_file("other.apk".to_owned(), 1024);
    assert!(state.can_start_scan());
}

// ── Marketplace search ────────────────────────────────────────────────────────

/// The search ticker starts, reports progress, and can be cancelled.
#[test]
fn store_search_start_and_cancel() {
    let mut state = fast_state();
    state.start_store_search();
    assert!(state.search_active);
    assert_eq!(state.search_percent, 0);

    // Wait for at least one tick to arrive.
    let deadline = Instant::now() + Duration::from_secs(30);
    while state.search_percent == 0 {
        assert!(Instant::now() < deadline, "no tick arrived");
        state.process_search_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(state.search_percent > 0);

    state.cancel_store_search();
    assert!(!state.search_active);
    assert_eq!(state.search_percent, 0);
}

/// Starting a search while one is active does not restart its progress.
#[test]
fn store_search_start_twice_is_noop() {
    let mut state = fast_state();
    state.start_store_search();
    let deadline = Instant::now() + Duration::from_secs(30);
    while state.search_percent == 0 {
        assert!(Instant::now() < deadline, "no tick arrived");
        state.process_search_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
    let percent = state.search_percent;
    state.start_store_search();
    assert!(state.search_percent >= percent, "progress must not reset");
    state.cancel_store_search();
}

// ── Portfolio intents ─────────────────────────────────────────────────────────

/// A takedown request transitions the clone and surfaces a success toast;
/// repeating it surfaces an error toast instead.
#[test]
fn takedown_intent_round_trip() {
    let mut state = fast_state();
    state.request_takedown("c1");
    assert!(state.notices.iter().any(|n| n.title == "Takedown Requested"));

    state.notices.clear();
    state.request_takedown("c1");
    assert!(state
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::Error && n.title == "Takedown Unavailable"));
}

/// Mark-all-read clears the unread counter.
#[test]
fn mark_all_alerts_read() {
    let mut state = fast_state();
    assert!(state.store.unread_alert_count() > 0);
    state.mark_all_alerts_read();
    assert_eq!(state.store.unread_alert_count(), 0);
}

// ── Notices ───────────────────────────────────────────────────────────────────

/// The toast queue is bounded: the oldest entry is evicted at capacity.
#[test]
fn notices_are_bounded() {
    let mut state = fast_state();
    for i in 0..10 {
        state.push_notice(NoticeKind::Info, format!("n{i}"), "msg");
    }
    assert_eq!(
        state.notices.len(),
        clonesleuth_gui::state::MAX_NOTICES,
        "queue must stay at its cap"
    );
    assert_eq!(state.notices[0].title, "n5", "oldest entries are evicted");
}
