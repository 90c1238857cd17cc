/// Scan report panel — pure rendering of a completed scan.
///
/// Stateless: consumes a report and emits the user's intent upward as a
/// [`ResultAction`] for the caller to apply.
use crate::theme::{parse_report_color, score_color};
use crate::widgets::progress_ring::progress_ring;
use crate::widgets::score_bar::score_bar;
use clonesleuth_core::export;
use clonesleuth_core::model::ScanResult;
use egui::Ui;
use tracing::warn;

/// What the user asked for from the report view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// Discard the report and return to file selection.
    Reset,
    /// Flag the scanned package to the review team.
    ReportClone,
    /// Put the serialized report on the clipboard.
    CopyJson(String),
}

/// Draw a completed scan report. Returns the action the user chose, if any.
pub fn result_panel(ui: &mut Ui, result: &ScanResult) -> Option<ResultAction> {
    let mut action = None;
    let color_muted = ui.visuals().weak_text_color();

    // ── Header ────────────────────────────────────────────────────────
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("Scan Results: {}", result.file_name))
                .size(15.0)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🔄 New Scan").clicked() {
                action = Some(ResultAction::Reset);
            }
            if ui
                .button("📋 Copy JSON")
                .on_hover_text("Copy the full report to the clipboard")
                .clicked()
            {
                match export::scan_result_to_json(result) {
                    Ok(json) => action = Some(ResultAction::CopyJson(json)),
                    Err(e) => warn!("Could not serialize report: {e}"),
                }
            }
        });
    });

    ui.add_space(8.0);

    ui.columns(2, |columns| {
        // ── Overall score ring ────────────────────────────────────────
        let ui = &mut columns[0];
        ui.vertical_centered(|ui| {
            progress_ring(
                ui,
                result.overall_score,
                160.0,
                score_color(result.overall_score),
                result.risk_band(),
            );
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Overall Safety Score").size(14.0).strong());
            ui.label(
                egui::RichText::new(format!(
                    "Scan completed on {}",
                    result.scan_date.format("%Y-%m-%d %H:%M UTC")
                ))
                .size(11.0)
                .color(color_muted),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("Size: {}", result.file_size))
                    .size(11.0)
                    .color(color_muted),
            );
        });

        // ── Category breakdown ────────────────────────────────────────
        let ui = &mut columns[1];
        ui.label(egui::RichText::new("Detailed Analysis").size(14.0).strong());
        ui.add_space(4.0);

        for (category, report) in result.categories.iter() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(category.label()).size(12.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{}%", report.score))
                            .size(12.0)
                            .strong(),
                    );
                });
            });
            let color = parse_report_color(&report.color, ui.visuals().hyperlink_color);
            let bar_width = ui.available_width();
            score_bar(ui, report.score as f32, bar_width, 8.0, color);
            for detail in &report.details {
                ui.label(
                    egui::RichText::new(format!("• {detail}"))
                        .size(10.0)
                        .color(color_muted),
                );
            }
            ui.add_space(6.0);
        }
    });

    // ── Recommendation ────────────────────────────────────────────────
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);
    ui.label(egui::RichText::new("Recommendation").size(14.0).strong());
    ui.label(egui::RichText::new(result.recommendation().text()).size(12.0));

    ui.add_space(6.0);
    if ui
        .button("🚩 Report as Clone")
        .on_hover_text("Flag this package for takedown review")
        .clicked()
    {
        action = Some(ResultAction::ReportClone);
    }

    action
}
