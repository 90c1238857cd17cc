/// Headline metric card -- a painted card with a title, a large value, and
/// an optional change indicator.
use clonesleuth_core::fixtures::{DashboardMetric, MetricTrend};
use egui::{Rect, Ui, Vec2};

/// Draw one metric card at the given width.
pub fn metric_card(ui: &mut Ui, metric: &DashboardMetric, width: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, 72.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    // Card background.
    let card_bg = ui.visuals().faint_bg_color;
    painter.rect_filled(rect, 6.0, card_bg);
    painter.rect_stroke(
        rect,
        6.0,
        egui::Stroke::new(1.0, ui.visuals().window_stroke.color),
        egui::StrokeKind::Outside,
    );

    let inner = Rect::from_min_max(
        rect.min + Vec2::new(12.0, 10.0),
        rect.max - Vec2::new(12.0, 10.0),
    );

    // Title.
    painter.text(
        inner.left_top(),
        egui::Align2::LEFT_TOP,
        metric.title,
        egui::FontId::proportional(11.0),
        ui.visuals().weak_text_color(),
    );

    // Value.
    painter.text(
        inner.left_bottom(),
        egui::Align2::LEFT_BOTTOM,
        &metric.value,
        egui::FontId::proportional(22.0),
        ui.visuals().strong_text_color(),
    );

    // Change indicator, right-aligned.
    if let Some(change) = metric.change {
        let (arrow, color) = match metric.trend {
            MetricTrend::Positive => ("▲", egui::Color32::from_rgb(0xa6, 0xe3, 0xa1)),
            MetricTrend::Negative => ("▼", egui::Color32::from_rgb(0xf3, 0x8b, 0xa8)),
            MetricTrend::Neutral => ("–", ui.visuals().weak_text_color()),
        };
        painter.text(
            inner.right_bottom(),
            egui::Align2::RIGHT_BOTTOM,
            format!("{arrow} {change:+}"),
            egui::FontId::proportional(12.0),
            color,
        );
    }
}
