/// Dashboard panel — headline metrics, risk distribution, the weekly
/// detection trend, and a preview of the latest alerts.
use crate::panels::time_ago;
use crate::state::{ActiveView, AppState};
use crate::theme::risk_color;
use crate::widgets::metric_card::metric_card;
use crate::widgets::score_bar::score_bar;
use crate::widgets::status_badge::status_badge;
use clonesleuth_core::fixtures;
use clonesleuth_core::model::RiskLevel;
use egui::{Rect, Ui, Vec2};

/// Draw the dashboard page.
pub fn dashboard_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("Dashboard");
    ui.label(
        egui::RichText::new("Monitor and manage app clone threats")
            .size(12.0)
            .color(color_muted),
    );
    ui.add_space(8.0);

    // ── Key metrics ───────────────────────────────────────────────────
    let metrics = fixtures::dashboard_metrics();
    let gap = 8.0;
    let card_width =
        ((ui.available_width() - gap * (metrics.len() - 1) as f32) / metrics.len() as f32).max(140.0);
    ui.horizontal(|ui| {
        for metric in &metrics {
            metric_card(ui, metric, card_width);
        }
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        // ── Risk distribution ─────────────────────────────────────────
        let ui = &mut columns[0];
        ui.heading("Risk Distribution");
        ui.add_space(4.0);

        let dist = state.store.risk_distribution();
        let total = dist.total().max(1);
        let rows = [
            (RiskLevel::Critical, dist.critical),
            (RiskLevel::High, dist.high),
            (RiskLevel::Medium, dist.medium),
            (RiskLevel::Low, dist.low),
        ];
        for (level, count) in rows {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [60.0, 16.0],
                    egui::Label::new(
                        egui::RichText::new(level.label())
                            .size(12.0)
                            .color(risk_color(level)),
                    ),
                );
                let pct = count as f32 / total as f32 * 100.0;
                let bar_width = ui.available_width() - 30.0;
                score_bar(ui, pct, bar_width, 8.0, risk_color(level));
                ui.label(
                    egui::RichText::new(count.to_string())
                        .size(12.0)
                        .color(ui.visuals().text_color()),
                );
            });
            ui.add_space(2.0);
        }

        ui.add_space(12.0);

        // ── Detection trend ───────────────────────────────────────────
        ui.heading("Clone Detection Trend");
        ui.add_space(4.0);
        let chart_width = ui.available_width().min(360.0);
        trend_chart(ui, chart_width, 110.0);

        // ── Clones per app ────────────────────────────────────────────
        ui.add_space(12.0);
        ui.heading("Clones per App");
        ui.add_space(4.0);
        let max_clones = state
            .store
            .monitored_apps()
            .iter()
            .map(|a| a.clone_count)
            .max()
            .unwrap_or(0)
            .max(1);
        for app in state.store.monitored_apps() {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [140.0, 16.0],
                    egui::Label::new(egui::RichText::new(&app.name).size(12.0)),
                );
                let pct = app.clone_count as f32 / max_clones as f32 * 100.0;
                let bar_width = ui.available_width() - 30.0;
                let bar_color = ui.visuals().hyperlink_color;
                score_bar(ui, pct, bar_width, 8.0, bar_color);
                ui.label(egui::RichText::new(app.clone_count.to_string()).size(12.0));
            });
            ui.add_space(2.0);
        }

        // ── Recent alerts ─────────────────────────────────────────────
        let ui = &mut columns[1];
        ui.horizontal(|ui| {
            ui.heading("Recent Alerts");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("View all").clicked() {
                    state.view = ActiveView::Alerts;
                }
            });
        });
        ui.add_space(4.0);

        let previews: Vec<(String, String, chrono::DateTime<chrono::Utc>, Option<RiskLevel>, bool)> =
            state
                .store
                .alerts()
                .iter()
                .take(4)
                .map(|a| {
                    (
                        a.title.clone(),
                        a.message.clone(),
                        a.timestamp,
                        a.risk_level,
                        a.read,
                    )
                })
                .collect();

        for (title, message, timestamp, risk, read) in previews {
            ui.horizontal(|ui| {
                let title_text = egui::RichText::new(&title).size(13.0);
                let title_text = if read { title_text } else { title_text.strong() };
                ui.label(title_text);
                if let Some(level) = risk {
                    status_badge(ui, level.label(), risk_color(level));
                }
            });
            ui.label(
                egui::RichText::new(&message)
                    .size(11.0)
                    .color(color_muted),
            );
            ui.label(
                egui::RichText::new(time_ago(timestamp))
                    .size(10.0)
                    .color(color_muted),
            );
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);
        }
    });
}

/// Paint the weekly detection counts as a simple vertical bar chart.
fn trend_chart(ui: &mut Ui, width: f32, height: f32) {
    let trend = fixtures::detection_trend();
    let max_count = trend.iter().map(|p| p.count).max().unwrap_or(0).max(1);

    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);

    let label_band = 16.0;
    let plot = Rect::from_min_max(
        rect.min + Vec2::new(8.0, 8.0),
        rect.max - Vec2::new(8.0, label_band),
    );

    let n = trend.len() as f32;
    let slot = plot.width() / n;
    let bar_width = (slot * 0.5).min(28.0);
    let accent = ui.visuals().hyperlink_color;

    for (i, point) in trend.iter().enumerate() {
        let frac = point.count as f32 / max_count as f32;
        let bar_height = plot.height() * frac;
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let bar = Rect::from_min_max(
            egui::pos2(cx - bar_width / 2.0, plot.bottom() - bar_height),
            egui::pos2(cx + bar_width / 2.0, plot.bottom()),
        );
        painter.rect_filled(bar, 2.0, accent);

        painter.text(
            egui::pos2(cx, bar.top() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            point.count.to_string(),
            egui::FontId::proportional(10.0),
            ui.visuals().text_color(),
        );
        painter.text(
            egui::pos2(cx, rect.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            point.week_of.format("%b %d").to_string(),
            egui::FontId::proportional(9.0),
            ui.visuals().weak_text_color(),
        );
    }
}
