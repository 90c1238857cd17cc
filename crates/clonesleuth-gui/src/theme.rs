/// Colour scheme and visual theme for CloneSleuth.
///
/// Provides both dark and light themes with a professional appearance.
/// All colour constants are defined here so the rest of the UI code
/// references semantically-named values rather than raw hex codes.
use clonesleuth_core::model::{CloneStatus, MonitoringStatus, RiskLevel};
use egui::{Color32, Stroke, Visuals};

/// Which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Toggle between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }
}

/// Semantic colour palette for CloneSleuth.
pub struct CloneSleuthTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
    pub header_bg: Color32,
    pub card_bg: Color32,
    pub card_border: Color32,
}

impl CloneSleuthTheme {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            surface_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_secondary: Color32::from_rgb(0xb8, 0xb8, 0xc4),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            accent_hover: Color32::from_rgb(0x6a, 0x9a, 0xf0),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
            selection: Color32::from_rgb(0x28, 0x3a, 0x5c),
            header_bg: Color32::from_rgb(0x22, 0x22, 0x34),
            card_bg: Color32::from_rgb(0x28, 0x3a, 0x5c),
            card_border: Color32::from_rgb(0x3a, 0x50, 0x72),
        }
    }

    /// Light theme — optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_secondary: Color32::from_rgb(0x4a, 0x4a, 0x5a),
            text_muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            accent_hover: Color32::from_rgb(0x2a, 0x5a, 0xc0),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            selection: Color32::from_rgba_premultiplied(0x3a, 0x6f, 0xd8, 0x30),
            header_bg: Color32::from_rgb(0xe8, 0xe8, 0xf0),
            card_bg: Color32::from_rgb(0xe4, 0xec, 0xf8),
            card_border: Color32::from_rgb(0xc2, 0xd0, 0xe4),
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Display colour for a clone/alert risk level.
pub fn risk_color(level: RiskLevel) -> Color32 {
    match level {
        RiskLevel::Critical => Color32::from_rgb(0xf3, 0x8b, 0xa8),
        RiskLevel::High => Color32::from_rgb(0xfa, 0xb3, 0x87),
        RiskLevel::Medium => Color32::from_rgb(0xf9, 0xe2, 0xaf),
        RiskLevel::Low => Color32::from_rgb(0xa6, 0xe3, 0xa1),
    }
}

/// Display colour for an app's monitoring status.
pub fn monitoring_color(status: MonitoringStatus) -> Color32 {
    match status {
        MonitoringStatus::Active => Color32::from_rgb(0xa6, 0xe3, 0xa1),
        MonitoringStatus::Paused => Color32::from_rgb(0xf9, 0xe2, 0xaf),
        MonitoringStatus::Error => Color32::from_rgb(0xf3, 0x8b, 0xa8),
    }
}

/// Display colour for a clone's lifecycle status.
pub fn clone_status_color(status: CloneStatus) -> Color32 {
    match status {
        CloneStatus::Active => Color32::from_rgb(0xf3, 0x8b, 0xa8),
        CloneStatus::TakedownPending => Color32::from_rgb(0xfa, 0xb3, 0x87),
        CloneStatus::Removed => Color32::from_rgb(0xa6, 0xe3, 0xa1),
    }
}

/// Display colour for an overall safety score: green at or above 70,
/// orange at or above 50, red below.
pub fn score_color(score: u8) -> Color32 {
    if score >= 70 {
        Color32::from_rgb(0xa6, 0xe3, 0xa1)
    } else if score >= 50 {
        Color32::from_rgb(0xfa, 0xb3, 0x87)
    } else {
        Color32::from_rgb(0xf3, 0x8b, 0xa8)
    }
}

/// Parse a `#rrggbb` string from a scan report into a colour.
///
/// Falls back to `fallback` on anything malformed rather than erroring;
/// report colours are display hints, not data.
pub fn parse_report_color(hex: &str, fallback: Color32) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return fallback;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color32::from_rgb(r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_color() {
        assert_eq!(
            parse_report_color("#22c55e", Color32::BLACK),
            Color32::from_rgb(0x22, 0xc5, 0x5e)
        );
        assert_eq!(
            parse_report_color("f87171", Color32::BLACK),
            Color32::from_rgb(0xf8, 0x71, 0x71)
        );
        assert_eq!(parse_report_color("nope", Color32::BLACK), Color32::BLACK);
        assert_eq!(parse_report_color("#12345", Color32::BLACK), Color32::BLACK);
    }

    #[test]
    fn test_score_color_thresholds() {
        assert_eq!(score_color(70), score_color(100));
        assert_ne!(score_color(69), score_color(70));
        assert_ne!(score_color(49), score_color(50));
    }
}
