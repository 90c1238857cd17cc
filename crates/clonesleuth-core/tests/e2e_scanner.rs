/// End-to-end scanner integration tests.
///
/// These tests exercise the real background-thread paths: `start_scan` with a
/// `SimulatedScanner`, cancellation, drop teardown, and the marketplace
/// search ticker. The synthesizer runs with a zero delay so the suite stays
/// fast; timing-sensitive assertions use generous deadlines instead of
/// sleeps of fixed length.
use clonesleuth_core::model::{FileDescriptor, Recommendation};
use clonesleuth_core::scanner::progress::{ScanProgress, SearchProgress};
use clonesleuth_core::scanner::synth::{
    SimulatedScanner, NEGATIVE_DETAILS, REASSURING_DETAILS,
};
use clonesleuth_core::scanner::{
    start_scan, start_store_search_with, validate_package_file, ScanError, Scanner, SearchOptions,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn apk_file() -> FileDescriptor {
    FileDescriptor {
        name: "app.apk".to_owned(),
        size_bytes: 25_000_000,
    }
}

/// Run the synthesizer synchronously with no delay.
fn scan_now(file: &FileDescriptor) -> clonesleuth_core::model::ScanResult {
    let scanner = SimulatedScanner::with_delay(Duration::ZERO);
    let cancel = AtomicBool::new(false);
    scanner.scan(file, &cancel).expect("scan must succeed")
}

/// Drain a scan handle until a terminal message arrives, within a deadline.
fn drain_to_terminal(handle: &clonesleuth_core::scanner::ScanHandle) -> ScanProgress {
    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        assert!(
            Instant::now() < deadline,
            "scanner did not finish within 30 seconds"
        );
        match handle.progress_rx.try_recv() {
            Ok(ScanProgress::Started { .. }) => continue,
            Ok(terminal) => return terminal,
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(5));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("scanner channel disconnected before a terminal message");
            }
        }
    }
}

// ── Synthesizer contract ─────────────────────────────────────────────────────

/// A 25 MB upload formats to binary megabytes with two decimal places, and
/// the report always carries exactly four categories with findings.
#[test]
fn synthesizer_formats_size_and_fills_categories() {
    let result = scan_now(&apk_file());

    assert_eq!(result.file_name, "app.apk");
    assert_eq!(result.file_size, "23.84 MB");
    assert_eq!(result.categories.iter().count(), 4);
    for (_, report) in result.categories.iter() {
        assert!(
            !report.details.is_empty(),
            "every category must have at least one finding"
        );
    }
}

/// All scores lie in [0, 100] across many samples.
#[test]
fn synthesizer_scores_stay_in_bounds() {
    let file = apk_file();
    for _ in 0..200 {
        let result = scan_now(&file);
        assert!(result.overall_score <= 100);
        for (_, report) in result.categories.iter() {
            assert!(report.score <= 100);
        }
    }
}

/// A clean overall band implies reassuring findings and success colours in
/// every category; a suspicious band implies negative findings and warning
/// colours. The two detail sets never mix within one report.
#[test]
fn synthesizer_bands_match_findings() {
    let file = apk_file();
    let mut saw_clean = false;
    let mut saw_suspicious = false;

    for _ in 0..300 {
        let result = scan_now(&file);
        if result.overall_score >= 70 {
            saw_clean = true;
            for (_, report) in result.categories.iter() {
                assert_eq!(report.color, "#22c55e");
                for detail in &report.details {
                    assert!(
                        REASSURING_DETAILS.contains(&detail.as_str()),
                        "clean report carried negative finding: {detail}"
                    );
                }
            }
        } else {
            saw_suspicious = true;
            assert!((30..70).contains(&result.overall_score));
            for (_, report) in result.categories.iter() {
                assert_ne!(report.color, "#22c55e");
                for detail in &report.details {
                    assert!(
                        NEGATIVE_DETAILS.contains(&detail.as_str()),
                        "suspicious report carried reassuring finding: {detail}"
                    );
                }
            }
        }
    }

    // With p(suspicious) = 0.3, 300 samples miss a branch with
    // probability < 1e-40.
    assert!(saw_clean, "no clean sample in 300 draws");
    assert!(saw_suspicious, "no suspicious sample in 300 draws");
}

/// Recommendation text variants follow the documented thresholds.
#[test]
fn recommendation_variants() {
    assert!(Recommendation::from_score(45)
        .text()
        .contains("Avoid installation"));
    assert!(Recommendation::from_score(85)
        .text()
        .contains("appears to be legitimate"));
    assert!(Recommendation::from_score(60).text().contains("Review"));
}

// ── Intake validation ────────────────────────────────────────────────────────

/// Non-package file names are rejected synchronously, before any scan.
#[test]
fn validate_rejects_other_extensions() {
    assert!(validate_package_file("app.apk").is_ok());
    assert!(matches!(
        validate_package_file("app.txt"),
        Err(ScanError::UnsupportedFormat { .. })
    ));
}

// ── Scan orchestration ───────────────────────────────────────────────────────

/// A started scan reports `Started` then `Complete` with the report attached.
#[test]
fn scan_reports_started_then_complete() {
    let scanner: Arc<dyn Scanner> = Arc::new(SimulatedScanner::with_delay(Duration::ZERO));
    let handle = start_scan(scanner, apk_file());

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut saw_started = false;
    loop {
        assert!(Instant::now() < deadline, "timed out");
        match handle.progress_rx.try_recv() {
            Ok(ScanProgress::Started { file_name }) => {
                assert_eq!(file_name, "app.apk");
                saw_started = true;
            }
            Ok(ScanProgress::Complete { result }) => {
                assert!(saw_started, "Complete must follow Started");
                assert_eq!(result.file_name, "app.apk");
                break;
            }
            Ok(other) => panic!("unexpected message: {other:?}"),
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(5));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("channel disconnected early");
            }
        }
    }
}

/// Cancelling during the simulated delay yields `Cancelled`, not a report.
#[test]
fn scan_cancel_during_delay() {
    let scanner: Arc<dyn Scanner> = Arc::new(SimulatedScanner::with_delay(Duration::from_secs(30)));
    let handle = start_scan(scanner, apk_file());
    handle.cancel();
    assert!(handle.is_cancelled());

    match drain_to_terminal(&handle) {
        ScanProgress::Cancelled => {}
        other => panic!("expected Cancelled, got {other:?}"),
    }
}

/// Dropping the handle cancels the background thread; the cloned receiver
/// observes the cancellation instead of a report.
#[test]
fn scan_handle_drop_stops_thread() {
    let scanner: Arc<dyn Scanner> = Arc::new(SimulatedScanner::with_delay(Duration::from_secs(30)));
    let handle = start_scan(scanner, apk_file());
    let rx = handle.progress_rx.clone();
    drop(handle);

    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        assert!(Instant::now() < deadline, "thread did not stop after drop");
        match rx.try_recv() {
            Ok(ScanProgress::Started { .. }) => continue,
            Ok(ScanProgress::Cancelled) => break,
            Ok(other) => panic!("expected Cancelled after drop, got {other:?}"),
            // Disconnection also proves the thread exited without a report.
            Err(crossbeam_channel::TryRecvError::Disconnected) => break,
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(5));
            }
        }
    }
}

// ── Marketplace search ticker ────────────────────────────────────────────────

/// The ticker climbs in fixed steps to exactly 100 and then finishes.
#[test]
fn search_ticker_reaches_one_hundred_then_finishes() {
    let handle = start_store_search_with(
        SearchOptions::default(),
        Duration::from_millis(1),
        Duration::from_millis(1),
    );

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut last_percent = 0u8;
    loop {
        assert!(Instant::now() < deadline, "ticker did not finish");
        match handle.progress_rx.try_recv() {
            Ok(SearchProgress::Tick { percent }) => {
                assert!(percent > last_percent, "percent must be monotonic");
                assert!(percent <= 100);
                last_percent = percent;
            }
            Ok(SearchProgress::Finished) => {
                assert_eq!(last_percent, 100, "Finished must follow the 100% tick");
                break;
            }
            Ok(SearchProgress::Cancelled) => panic!("ticker unexpectedly cancelled"),
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(1));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                panic!("ticker channel disconnected before Finished");
            }
        }
    }
}

/// Cancelling the ticker stops it mid-climb.
#[test]
fn search_ticker_cancels() {
    let handle = start_store_search_with(
        SearchOptions::default(),
        Duration::from_secs(30),
        Duration::from_millis(1),
    );
    handle.cancel();

    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        assert!(Instant::now() < deadline, "ticker did not cancel");
        match handle.progress_rx.try_recv() {
            Ok(SearchProgress::Cancelled) => break,
            Ok(SearchProgress::Tick { .. }) => continue,
            Ok(SearchProgress::Finished) => panic!("ticker finished after cancel"),
            Err(crossbeam_channel::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(5));
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => break,
        }
    }
}
