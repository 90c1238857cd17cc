//! CloneSleuth application icon generator.
//!
//! Produces a procedural icon: two overlapping app cards (the original and
//! its imitation) with an alert dot on the imitation. The icon is rendered
//! at an arbitrary resolution as RGBA pixel data suitable for use as a
//! window icon.

/// Generate a CloneSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // The original card sits up-left, the clone overlaps down-right.
    let card_w = s * 0.52;
    let card_h = s * 0.62;
    let corner = s * 0.09;

    let orig_cx = s * 0.38;
    let orig_cy = s * 0.42;
    let clone_cx = s * 0.60;
    let clone_cy = s * 0.60;

    // Alert dot on the clone's top-right corner.
    let dot_cx = clone_cx + card_w * 0.5;
    let dot_cy = clone_cy - card_h * 0.5;
    let dot_r = s * 0.11;

    let orig_color = [0x89u8, 0xb4, 0xfa]; // blue, the protected app
    let clone_color = [0xf3u8, 0x8b, 0xa8]; // pink, the imitation
    let dot_color = [0xfau8, 0xb3, 0x87]; // amber alert

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Original card (behind). ─────────────────────────
            let d_orig = rounded_rect_dist(px, py, orig_cx, orig_cy, card_w, card_h, corner);
            let a_orig = smooth_edge(d_orig, 0.0);
            if a_orig > 0.0 {
                // Vertical shading, lighter at the top.
                let t = ((py - (orig_cy - card_h / 2.0)) / card_h).clamp(0.0, 1.0);
                cr = shade(orig_color[0], t);
                cg = shade(orig_color[1], t);
                cb = shade(orig_color[2], t);
                ca = a_orig;
            }

            // 2. Clone card (in front). ──────────────────────────
            let d_clone = rounded_rect_dist(px, py, clone_cx, clone_cy, card_w, card_h, corner);
            let a_clone = smooth_edge(d_clone, 0.0);
            if a_clone > 0.0 {
                let t = ((py - (clone_cy - card_h / 2.0)) / card_h).clamp(0.0, 1.0);
                cr = lerp_c(cr, shade(clone_color[0], t), a_clone);
                cg = lerp_c(cg, shade(clone_color[1], t), a_clone);
                cb = lerp_c(cb, shade(clone_color[2], t), a_clone);
                ca = ca + (1.0 - ca) * a_clone;
            }

            // 3. Alert dot. ──────────────────────────────────────
            let dd = ((px - dot_cx).powi(2) + (py - dot_cy).powi(2)).sqrt();
            let a_dot = smooth_edge(dd, dot_r);
            if a_dot > 0.0 {
                cr = lerp_c(cr, dot_color[0], a_dot);
                cg = lerp_c(cg, dot_color[1], a_dot);
                cb = lerp_c(cb, dot_color[2], a_dot);
                ca = ca + (1.0 - ca) * a_dot;
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Signed distance from a point to a rounded rectangle centred at (cx, cy).
fn rounded_rect_dist(px: f32, py: f32, cx: f32, cy: f32, w: f32, h: f32, r: f32) -> f32 {
    let qx = (px - cx).abs() - (w / 2.0 - r);
    let qy = (py - cy).abs() - (h / 2.0 - r);
    let ox = qx.max(0.0);
    let oy = qy.max(0.0);
    (ox * ox + oy * oy).sqrt() + qx.max(qy).min(0.0) - r
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Darken a channel toward the bottom of a card (t in [0, 1]).
fn shade(channel: u8, t: f32) -> u8 {
    (channel as f32 * (1.0 - 0.18 * t)).clamp(0.0, 255.0) as u8
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_icon_dimensions() {
        let pixels = render_icon(32);
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_render_icon_has_opaque_and_transparent_pixels() {
        let pixels = render_icon(64);
        let alphas: Vec<u8> = pixels.chunks_exact(4).map(|p| p[3]).collect();
        assert!(alphas.iter().any(|&a| a > 200), "icon must have solid areas");
        assert!(alphas.iter().any(|&a| a == 0), "corners must stay transparent");
    }
}
