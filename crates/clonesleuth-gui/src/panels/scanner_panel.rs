/// Scanner panel — the two scan modes side by side with aggregate counters.
///
/// The package-search tab drives the cosmetic marketplace progress ticker;
/// the APK-upload tab drives the real background scan. The two flows are
/// intentionally independent and never share progress state.
use crate::panels::result_panel::{self, ResultAction};
use crate::state::{AppState, NoticeKind, ScanPhase, ScanTab};
use crate::widgets::score_bar::score_bar;
use clonesleuth_core::fixtures;
use clonesleuth_core::model::size::format_file_size;
use egui::Ui;

/// Draw the scanner page.
pub fn scanner_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("App Scanner");
    ui.label(
        egui::RichText::new("Scan app stores for potential clones")
            .size(12.0)
            .color(color_muted),
    );
    ui.add_space(8.0);

    // ── Mode tabs ─────────────────────────────────────────────────────
    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.scan_tab == ScanTab::PackageSearch, "Package Name")
            .clicked()
        {
            state.scan_tab = ScanTab::PackageSearch;
        }
        if ui
            .selectable_label(state.scan_tab == ScanTab::ApkUpload, "APK Upload")
            .clicked()
        {
            state.scan_tab = ScanTab::ApkUpload;
        }
    });
    ui.add_space(8.0);

    match state.scan_tab {
        ScanTab::PackageSearch => package_search_tab(ui, state),
        ScanTab::ApkUpload => apk_upload_tab(ui, state),
    }

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);
    scan_volume_summary(ui, state);
}

// ── Package search mode ───────────────────────────────────────────────────────

fn package_search_tab(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let searching = state.search_active;

    ui.label("Package Name");
    ui.add_enabled(
        !searching,
        egui::TextEdit::singleline(&mut state.search_options.package_query)
            .hint_text("e.g., com.example.myapp"),
    );
    ui.label(
        egui::RichText::new("Enter the exact package name of your application")
            .size(10.0)
            .color(color_muted),
    );
    ui.add_space(4.0);

    ui.label("App Name (Optional)");
    ui.add_enabled(
        !searching,
        egui::TextEdit::singleline(&mut state.search_options.app_name)
            .hint_text("e.g., My Awesome App"),
    );

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Scan Options").strong());
    ui.add_enabled_ui(!searching, |ui| {
        ui.checkbox(
            &mut state.search_options.official_stores,
            "Official App Stores",
        )
        .on_hover_text("Google Play, Apple App Store");
        ui.checkbox(
            &mut state.search_options.third_party_stores,
            "Third-Party App Stores",
        )
        .on_hover_text("Alternative markets and stores");
        ui.checkbox(&mut state.search_options.deep_analysis, "Deep Code Analysis")
            .on_hover_text("Performs code similarity analysis");
        ui.checkbox(
            &mut state.search_options.high_similarity_only,
            "High Similarity Only (> 75%)",
        )
        .on_hover_text("Filter results by similarity score");
    });

    ui.add_space(8.0);

    if searching {
        ui.horizontal(|ui| {
            ui.label("Scanning Progress");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}%", state.search_percent));
            });
        });
        let bar_width = ui.available_width().min(360.0);
        let bar_color = ui.visuals().hyperlink_color;
        score_bar(ui, state.search_percent as f32, bar_width, 8.0, bar_color);
        ui.add_space(4.0);
        if ui.button("Cancel Scan").clicked() {
            state.cancel_store_search();
        }
    } else if ui
        .add_sized(
            [ui.available_width().min(320.0), 28.0],
            egui::Button::new("🔍 Start Scanning"),
        )
        .clicked()
    {
        state.start_store_search();
    }
}

// ── APK upload mode ───────────────────────────────────────────────────────────

fn apk_upload_tab(ui: &mut Ui, state: &mut AppState) {
    // A held report replaces the uploader until the user starts over.
    if state.phase == ScanPhase::Complete {
        if let Some(result) = state.scan_result.clone() {
            match result_panel::result_panel(ui, &result) {
                Some(ResultAction::Reset) => state.reset_scan(),
                Some(ResultAction::ReportClone) => {
                    state.push_notice(
                        NoticeKind::Success,
                        "Report Submitted",
                        format!(
                            "\"{}\" has been reported to the review team.",
                            result.file_name
                        ),
                    );
                }
                Some(ResultAction::CopyJson(json)) => {
                    ui.ctx().copy_text(json);
                    state.push_notice(
                        NoticeKind::Info,
                        "Report Copied",
                        "The JSON report is on the clipboard.",
                    );
                }
                None => {}
            }
            return;
        }
    }

    let color_muted = ui.visuals().weak_text_color();
    let scanning = state.phase == ScanPhase::Scanning;

    if state.phase == ScanPhase::Failed {
        let message = state
            .scan_error
            .clone()
            .unwrap_or_else(|| "The scan could not be completed.".to_owned());
        ui.label(
            egui::RichText::new(format!("\u{26a0} {message}"))
                .color(egui::Color32::from_rgb(0xf3, 0x8b, 0xa8)),
        );
        if ui.button("Start Over").clicked() {
            state.reset_scan();
        }
        ui.add_space(8.0);
    }

    // ── Drop zone / selected file card ────────────────────────────────
    let zone_height = 140.0;
    let (rect, _response) = ui.allocate_exact_size(
        egui::Vec2::new(ui.available_width(), zone_height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, ui.visuals().faint_bg_color);
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, ui.visuals().window_stroke.color),
        egui::StrokeKind::Outside,
    );

    if let Some(file) = state.selected_file.clone() {
        painter.text(
            rect.center() - egui::Vec2::new(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            "📦",
            egui::FontId::proportional(28.0),
            ui.visuals().text_color(),
        );
        painter.text(
            rect.center() + egui::Vec2::new(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            &file.name,
            egui::FontId::proportional(14.0),
            ui.visuals().strong_text_color(),
        );
        painter.text(
            rect.center() + egui::Vec2::new(0.0, 28.0),
            egui::Align2::CENTER_CENTER,
            format_file_size(file.size_bytes),
            egui::FontId::proportional(11.0),
            color_muted,
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if scanning {
                ui.spinner();
                ui.label("Scanning...");
                if ui.button("✖ Cancel").clicked() {
                    state.cancel_scan();
                }
            } else {
                if ui
                    .add_enabled(
                        state.can_start_scan(),
                        egui::Button::new("🔍 Start Scan"),
                    )
                    .clicked()
                {
                    state.start_scan();
                }
                if ui.button("✖ Remove").clicked() {
                    state.clear_file();
                }
            }
        });
    } else {
        painter.text(
            rect.center() - egui::Vec2::new(0.0, 16.0),
            egui::Align2::CENTER_CENTER,
            "⬆ Upload APK File",
            egui::FontId::proportional(15.0),
            ui.visuals().strong_text_color(),
        );
        painter.text(
            rect.center() + egui::Vec2::new(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            "Drag and drop your APK file anywhere in this window",
            egui::FontId::proportional(11.0),
            color_muted,
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Or enter a path:");
            let edit = ui.add(
                egui::TextEdit::singleline(&mut state.path_input)
                    .hint_text("/path/to/app.apk")
                    .desired_width(280.0),
            );
            let submitted =
                edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Load").clicked() || submitted {
                let path = state.path_input.clone();
                state.load_file_from_path(&path);
            }
        });
    }

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new("Supported file types: .apk · Maximum file size: 100MB")
            .size(10.0)
            .color(color_muted),
    );
}

// ── Aggregate counters ────────────────────────────────────────────────────────

fn scan_volume_summary(ui: &mut Ui, state: &AppState) {
    let volume = fixtures::scan_volume();
    let color_muted = ui.visuals().weak_text_color();
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);

    ui.heading("Scan Status");
    ui.add_space(4.0);

    // Live scans in this session add to the fixture baseline.
    let in_progress =
        volume.in_progress + u32::from(state.phase == ScanPhase::Scanning);

    egui::Grid::new("scan_volume_grid")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Total Scans").color(color_muted));
            ui.label(volume.total.to_string());
            ui.end_row();

            ui.label(egui::RichText::new("Completed").color(color_muted));
            ui.label(
                egui::RichText::new(format!("\u{2713} {}", volume.completed))
                    .color(color_success),
            );
            ui.end_row();

            ui.label(egui::RichText::new("In Progress").color(color_muted));
            ui.label(in_progress.to_string());
            ui.end_row();

            ui.label(egui::RichText::new("Failed").color(color_muted));
            let failed = egui::RichText::new(volume.failed.to_string());
            ui.label(if volume.failed > 0 {
                failed.color(color_error)
            } else {
                failed
            });
            ui.end_row();
        });
}
