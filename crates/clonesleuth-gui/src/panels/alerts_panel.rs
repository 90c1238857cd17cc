/// Alerts panel — the notification feed with filter tabs.
use crate::panels::time_ago;
use crate::state::AppState;
use crate::theme::risk_color;
use crate::widgets::status_badge::status_badge;
use clonesleuth_core::model::AlertKind;
use clonesleuth_core::store::AlertFilter;
use egui::Ui;

/// Draw the alerts page.
pub fn alerts_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Alerts");
            ui.label(
                egui::RichText::new("Manage notifications and threat alerts")
                    .size(12.0)
                    .color(color_muted),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let any_unread = state.store.unread_alert_count() > 0;
            if ui
                .add_enabled(any_unread, egui::Button::new("Mark All Read"))
                .clicked()
            {
                state.mark_all_alerts_read();
            }
        });
    });
    ui.add_space(8.0);

    // ── Filter tabs ───────────────────────────────────────────────────
    let filters = [
        (AlertFilter::All, "All"),
        (AlertFilter::Unread, "Unread"),
        (AlertFilter::Kind(AlertKind::CloneDetected), "Clone Detected"),
        (AlertFilter::Kind(AlertKind::RiskIncreased), "Risk Alerts"),
        (
            AlertFilter::Kind(AlertKind::TakedownStatus),
            "Takedown Status",
        ),
    ];
    ui.horizontal(|ui| {
        for (filter, label) in filters {
            if ui
                .selectable_label(state.alert_filter == filter, label)
                .clicked()
            {
                state.alert_filter = filter;
            }
        }
    });
    ui.add_space(8.0);

    // Collect card data first so the click handler can mutate the store.
    let cards: Vec<(String, String, String, AlertKind, Option<_>, bool, _)> = state
        .store
        .alerts_filtered(state.alert_filter)
        .into_iter()
        .map(|a| {
            (
                a.id.clone(),
                a.title.clone(),
                a.message.clone(),
                a.kind,
                a.risk_level,
                a.read,
                a.timestamp,
            )
        })
        .collect();

    if cards.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("🔔").size(32.0).color(color_muted));
            ui.label(egui::RichText::new("No alerts found").size(14.0).strong());
            ui.label(
                egui::RichText::new("There are no alerts matching your current filter.")
                    .size(11.0)
                    .color(color_muted),
            );
        });
        return;
    }

    let mut mark_read: Option<String> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (id, title, message, kind, risk, read, timestamp) in &cards {
                let icon = match kind {
                    AlertKind::CloneDetected => "⚠",
                    AlertKind::RiskIncreased => "📈",
                    AlertKind::TakedownStatus => "🛡",
                };

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).size(16.0));
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            let title_text = egui::RichText::new(title).size(13.0);
                            ui.label(if *read {
                                title_text
                            } else {
                                title_text.strong()
                            });
                            if let Some(level) = risk {
                                status_badge(ui, level.label(), risk_color(*level));
                            }
                            if !*read {
                                ui.label(
                                    egui::RichText::new("●")
                                        .size(10.0)
                                        .color(ui.visuals().hyperlink_color),
                                );
                            }
                        });
                        ui.label(
                            egui::RichText::new(message)
                                .size(11.0)
                                .color(ui.visuals().weak_text_color()),
                        );
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(time_ago(*timestamp))
                                    .size(10.0)
                                    .color(ui.visuals().weak_text_color()),
                            );
                            if !*read && ui.small_button("Mark read").clicked() {
                                mark_read = Some(id.clone());
                            }
                        });
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);
            }
        });

    if let Some(id) = mark_read {
        // The id came from the live feed a moment ago; a miss here is benign.
        let _ = state.store.mark_alert_read(&id);
    }
}
