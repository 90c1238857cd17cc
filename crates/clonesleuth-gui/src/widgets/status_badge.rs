/// Status badge widget -- a small coloured pill for enumerated states
/// (monitoring status, risk level, clone status).
use egui::{Color32, Ui, Vec2};

/// Draw a pill-shaped badge with `text` in `color`.
pub fn status_badge(ui: &mut Ui, text: &str, color: Color32) {
    let font = egui::FontId::proportional(11.0);
    let galley = ui.painter().layout_no_wrap(text.to_owned(), font.clone(), color);
    let padding = Vec2::new(8.0, 3.0);
    let size = galley.size() + padding * 2.0;

    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    // Translucent fill in the badge colour, solid border and text.
    let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 36);
    painter.rect_filled(rect, size.y / 2.0, fill);
    painter.rect_stroke(
        rect,
        size.y / 2.0,
        egui::Stroke::new(1.0, color),
        egui::StrokeKind::Outside,
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        font,
        color,
    );
}
