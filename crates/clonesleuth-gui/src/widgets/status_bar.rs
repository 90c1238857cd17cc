/// Bottom status bar — scan state and portfolio statistics.
use crate::state::{AppState, ScanPhase};
use clonesleuth_core::model::size::format_count;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    ui.horizontal(|ui| {
        match state.phase {
            ScanPhase::Idle => {
                if state.search_active {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new(format!(
                            "Searching stores... {}%",
                            state.search_percent
                        ))
                        .size(12.0)
                        .color(color_normal),
                    );
                } else {
                    ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
                }
            }
            ScanPhase::Scanning => {
                ui.spinner();
                let file = state
                    .selected_file
                    .as_ref()
                    .map(|f| f.name.as_str())
                    .unwrap_or("package");
                ui.label(
                    egui::RichText::new(format!("Analyzing {file}..."))
                        .size(12.0)
                        .color(color_normal),
                );
            }
            ScanPhase::Complete => {
                if let Some(ref result) = state.scan_result {
                    ui.label(
                        egui::RichText::new("\u{2713} Scan complete")
                            .size(12.0)
                            .color(color_success),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} scored {}%",
                            result.file_name, result.overall_score
                        ))
                        .size(12.0)
                        .color(color_accent),
                    );
                }
            }
            ScanPhase::Failed => {
                let message = state
                    .scan_error
                    .as_deref()
                    .unwrap_or("The scan could not be completed");
                ui.label(
                    egui::RichText::new(format!("\u{26a0} {message}"))
                        .size(12.0)
                        .color(color_error),
                );
            }
        }

        // Right-aligned portfolio statistics.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let unread = state.store.unread_alert_count();
            if unread > 0 {
                ui.label(
                    egui::RichText::new(format!("{} unread alerts", format_count(unread as u64)))
                        .size(12.0)
                        .color(color_warning),
                );
                ui.separator();
            }

            ui.label(
                egui::RichText::new(format!(
                    "{} active clones",
                    format_count(state.store.active_clone_count() as u64)
                ))
                .size(12.0)
                .color(color_normal),
            );

            ui.separator();

            ui.label(
                egui::RichText::new(format!(
                    "{} apps monitored",
                    format_count(state.store.monitored_apps().len() as u64)
                ))
                .size(12.0)
                .color(color_normal),
            );
        });
    });
}
