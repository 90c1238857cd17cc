/// Circular proportion indicator -- a ring filled clockwise from twelve
/// o'clock to a percentage, with a headline value in the centre.
use egui::{Color32, Pos2, Stroke, Ui, Vec2};

/// Draw a progress ring sized by `score` (0-100).
///
/// `label` is the small caption under the percentage (e.g. a risk band).
pub fn progress_ring(ui: &mut Ui, score: u8, diameter: f32, color: Color32, label: &str) {
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::splat(diameter), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let stroke_width = (diameter * 0.08).max(4.0);
    let radius = diameter / 2.0 - stroke_width / 2.0;

    // Track circle.
    painter.circle_stroke(
        center,
        radius,
        Stroke::new(stroke_width, ui.visuals().extreme_bg_color),
    );

    // Filled arc, from the top, clockwise. egui has no arc primitive, so the
    // arc is a polyline with enough segments to look smooth at this size.
    let fraction = (score as f32 / 100.0).clamp(0.0, 1.0);
    if fraction > 0.0 {
        let segments = ((64.0 * fraction).ceil() as usize).max(2);
        let start_angle = -std::f32::consts::FRAC_PI_2;
        let sweep = fraction * std::f32::consts::TAU;
        let points: Vec<Pos2> = (0..=segments)
            .map(|i| {
                let angle = start_angle + sweep * (i as f32 / segments as f32);
                Pos2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(stroke_width, color)));
    }

    // Centre text: big percentage over a small caption.
    painter.text(
        center - Vec2::new(0.0, diameter * 0.06),
        egui::Align2::CENTER_CENTER,
        format!("{score}%"),
        egui::FontId::proportional(diameter * 0.22),
        ui.visuals().strong_text_color(),
    );
    painter.text(
        center + Vec2::new(0.0, diameter * 0.14),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(diameter * 0.09),
        ui.visuals().weak_text_color(),
    );
}
