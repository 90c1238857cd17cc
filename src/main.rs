//! CloneSleuth — app clone monitoring dashboard.
//!
//! Thin binary entry point. All logic lives in the `clonesleuth-core`
//! and `clonesleuth-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("CloneSleuth starting");

    let icon = clonesleuth_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the first
    // rendered frame arrives immediately and the OS never fills the window
    // with its default background.
    let state = clonesleuth_gui::CloneSleuthState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("CloneSleuth -- App Clone Monitor")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 560.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "CloneSleuth",
        options,
        Box::new(|cc| {
            Ok(Box::new(clonesleuth_gui::CloneSleuthApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
