/// Monitoring panel — the protected-app portfolio and the clone table.
use crate::panels::time_ago;
use crate::state::{AppState, NoticeKind};
use crate::theme::{clone_status_color, monitoring_color, risk_color};
use crate::widgets::status_badge::status_badge;
use clonesleuth_core::export;
use clonesleuth_core::model::{CloneStatus, MonitoringStatus};
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use tracing::warn;

/// Draw the monitoring page.
pub fn monitoring_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("App Monitoring");
    ui.label(
        egui::RichText::new("Manage your monitored applications")
            .size(12.0)
            .color(color_muted),
    );
    ui.add_space(8.0);

    // ── Status summary ────────────────────────────────────────────────
    let apps = state.store.monitored_apps();
    let total = apps.len();
    let active = apps
        .iter()
        .filter(|a| a.status == MonitoringStatus::Active)
        .count();
    let paused = apps
        .iter()
        .filter(|a| a.status == MonitoringStatus::Paused)
        .count();
    let errored = apps
        .iter()
        .filter(|a| a.status == MonitoringStatus::Error)
        .count();

    ui.horizontal(|ui| {
        let accent = ui.visuals().hyperlink_color;
        summary_chip(ui, "Total Apps", total, accent);
        summary_chip(ui, "Active", active, monitoring_color(MonitoringStatus::Active));
        summary_chip(ui, "Paused", paused, monitoring_color(MonitoringStatus::Paused));
        summary_chip(ui, "Error", errored, monitoring_color(MonitoringStatus::Error));
    });

    ui.add_space(12.0);

    // ── Monitored apps table ──────────────────────────────────────────
    ui.label(egui::RichText::new("Monitored Apps").size(14.0).strong());
    ui.add_space(4.0);

    ui.push_id("monitored_apps_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            // The page scrolls as a whole; the tables render at full height.
            .vscroll(false)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(160.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["App", "Package Name", "Status", "Last Scanned", "Clones"] {
                    header.col(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .size(11.0)
                                .color(ui.visuals().hyperlink_color),
                        );
                    });
                }
            })
            .body(|mut body| {
                for app in state.store.monitored_apps() {
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            ui.label(egui::RichText::new(&app.name).size(12.0).strong())
                                .on_hover_text(&app.description);
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(&app.package_name)
                                    .size(11.0)
                                    .color(ui.visuals().weak_text_color()),
                            );
                        });
                        row.col(|ui| {
                            status_badge(ui, app.status.label(), monitoring_color(app.status));
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(time_ago(app.last_scanned))
                                    .size(11.0)
                                    .color(ui.visuals().weak_text_color()),
                            );
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(app.clone_count.to_string()).size(12.0));
                        });
                    });
                }
            });
    });

    ui.add_space(16.0);

    // ── Detected clones table ─────────────────────────────────────────
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Detected Clones").size(14.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("📤 Export CSV")
                .on_hover_text("Write the clone table to a CSV file")
                .clicked()
            {
                export_clones(state);
            }
        });
    });
    ui.add_space(4.0);

    // Collect the row data first so takedown clicks can mutate the store.
    let rows: Vec<(String, String, String, String, u8, _, _, chrono::DateTime<chrono::Utc>)> = state
        .store
        .clones()
        .iter()
        .map(|c| {
            (
                c.id.clone(),
                c.name.clone(),
                c.package_name.clone(),
                c.store.clone(),
                c.similarity_score,
                c.risk_level,
                c.status,
                c.detected_date,
            )
        })
        .collect();

    let mut takedown_request: Option<String> = None;

    ui.push_id("clones_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            // The page scrolls as a whole; the tables render at full height.
            .vscroll(false)
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(130.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in [
                    "Clone", "Package", "Store", "Similarity", "Risk", "Status", "Actions",
                ] {
                    header.col(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .size(11.0)
                                .color(ui.visuals().hyperlink_color),
                        );
                    });
                }
            })
            .body(|mut body| {
                for (id, name, package, store_name, similarity, risk, status, detected) in &rows {
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            ui.label(egui::RichText::new(name).size(12.0).strong())
                                .on_hover_text(format!("Detected {}", time_ago(*detected)));
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(package)
                                    .size(11.0)
                                    .color(ui.visuals().weak_text_color()),
                            );
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(store_name).size(11.0));
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(format!("{similarity}%")).size(12.0));
                        });
                        row.col(|ui| {
                            status_badge(ui, risk.label(), risk_color(*risk));
                        });
                        row.col(|ui| {
                            status_badge(ui, status.label(), clone_status_color(*status));
                        });
                        row.col(|ui| {
                            if *status == CloneStatus::Active
                                && ui
                                    .small_button("Request Takedown")
                                    .on_hover_text("Submit a takedown request for this clone")
                                    .clicked()
                            {
                                takedown_request = Some(id.clone());
                            }
                        });
                    });
                }
            });
    });

    if let Some(id) = takedown_request {
        state.request_takedown(&id);
    }
}

/// Small painted counter chip used in the status summary row.
fn summary_chip(ui: &mut Ui, label: &str, count: usize, color: egui::Color32) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::Vec2::new(120.0, 48.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
    painter.rect_stroke(
        rect,
        6.0,
        egui::Stroke::new(1.0, ui.visuals().window_stroke.color),
        egui::StrokeKind::Outside,
    );
    painter.text(
        rect.min + egui::Vec2::new(10.0, 8.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(10.0),
        ui.visuals().weak_text_color(),
    );
    painter.text(
        rect.min + egui::Vec2::new(10.0, 24.0),
        egui::Align2::LEFT_TOP,
        count.to_string(),
        egui::FontId::proportional(18.0),
        color,
    );
}

/// Write the clone table to a CSV file in the system temp directory.
fn export_clones(state: &mut AppState) {
    let csv = match export::clones_to_csv(state.store.clones()) {
        Ok(csv) => csv,
        Err(e) => {
            warn!("CSV export failed: {e}");
            state.push_notice(NoticeKind::Error, "Export Failed", e.to_string());
            return;
        }
    };
    let path = std::env::temp_dir().join("clonesleuth-clones.csv");
    match std::fs::write(&path, csv) {
        Ok(()) => {
            state.push_notice(
                NoticeKind::Success,
                "Export Complete",
                format!("Clone table written to {}", path.display()),
            );
        }
        Err(e) => {
            warn!("CSV export failed: {e}");
            state.push_notice(NoticeKind::Error, "Export Failed", e.to_string());
        }
    }
}
