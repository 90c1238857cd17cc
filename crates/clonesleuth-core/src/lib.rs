/// CloneSleuth Core — data model, fixtures, and scan simulation.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — Scan reports, portfolio entities, and display formatting.
/// - [`fixtures`] — Hand-authored sample records backing the dashboard.
/// - [`store`] — Owned application-state store with explicit update operations.
/// - [`scanner`] — Background scan simulation with progress reporting.
/// - [`export`] — CSV and JSON renderings of scan data.
pub mod export;
pub mod fixtures;
pub mod model;
pub mod scanner;
pub mod store;
