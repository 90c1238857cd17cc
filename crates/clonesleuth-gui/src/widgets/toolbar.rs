/// Top action bar -- branding, quick scan access, alert count, and theme toggle.
use crate::state::{ActiveView, AppState, ScanPhase};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🛡 CloneSleuth")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Quick jump to the scanner page.
        if ui
            .button("🔍 Scan Now")
            .on_hover_text("Open the clone scanner")
            .clicked()
        {
            state.view = ActiveView::Scanner;
        }

        // Scan activity indicator.
        if state.phase == ScanPhase::Scanning {
            ui.spinner();
            ui.label(
                egui::RichText::new("Scanning...")
                    .size(12.0)
                    .color(ui.visuals().weak_text_color()),
            );
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About CloneSleuth").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            ui.separator();

            // ── Alerts shortcut with unread count ─────────────────
            let unread = state.store.unread_alert_count();
            let bell_label = if unread > 0 {
                egui::RichText::new(format!("🔔 {unread}"))
                    .color(egui::Color32::from_rgb(0xfa, 0xb3, 0x87))
            } else {
                egui::RichText::new("🔔")
            };
            if ui
                .button(bell_label)
                .on_hover_text("View alerts")
                .clicked()
            {
                state.view = ActiveView::Alerts;
            }
        });
    });
}
