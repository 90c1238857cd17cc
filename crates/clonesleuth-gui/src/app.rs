/// Main `eframe::App` implementation for CloneSleuth.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{ActiveView, AppState, NoticeKind, ScanPhase};
use crate::theme::{CloneSleuthTheme, ThemeMode};
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that setup work
/// completes before the OS window is created and the first rendered frame
/// arrives immediately.
pub struct CloneSleuthState {
    pub(crate) inner: AppState,
}

impl CloneSleuthState {
    /// Build the initial state. Call this before `eframe::run_native`.
    pub fn build() -> Self {
        Self {
            inner: AppState::new(),
        }
    }
}

/// The CloneSleuth application.
pub struct CloneSleuthApp {
    state: AppState,
}

impl CloneSleuthApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: CloneSleuthState) -> Self {
        // Apply initial dark visuals before the first frame.
        CloneSleuthTheme::dark().apply(&cc.egui_ctx);
        Self { state: state.inner }
    }

    /// Take any files dropped onto the window as scan candidates.
    fn intake_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let (name, size) = match (&file.path, &file.bytes) {
                (Some(path), _) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.name.clone());
                    let size = file
                        .bytes
                        .as_ref()
                        .map(|b| b.len() as u64)
                        .or_else(|| std::fs::metadata(path).ok().map(|m| m.len()))
                        .unwrap_or(0);
                    (name, size)
                }
                (None, Some(bytes)) => (file.name.clone(), bytes.len() as u64),
                (None, None) => (file.name.clone(), 0),
            };
            if name.is_empty() {
                continue;
            }
            tracing::info!("File dropped onto window: {} ({} bytes)", name, size);
            self.state.view = ActiveView::Scanner;
            self.state.scan_tab = crate::state::ScanTab::ApkUpload;
            self.state.select_file(name, size);
        }
    }

    /// Draw the transient toast stack in the top-right corner.
    fn draw_notices(&mut self, ctx: &egui::Context) {
        self.state.prune_notices();
        if self.state.notices.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notice_stack"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notice in &self.state.notices {
                    let accent = match notice.kind {
                        NoticeKind::Info => ui.visuals().hyperlink_color,
                        NoticeKind::Success => egui::Color32::from_rgb(0xa6, 0xe3, 0xa1),
                        NoticeKind::Error => egui::Color32::from_rgb(0xf3, 0x8b, 0xa8),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(280.0);
                        ui.label(
                            egui::RichText::new(&notice.title)
                                .size(12.0)
                                .strong()
                                .color(accent),
                        );
                        ui.label(egui::RichText::new(&notice.message).size(11.0));
                    });
                    ui.add_space(4.0);
                }
            });
    }
}

impl eframe::App for CloneSleuthApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling dark_mode takes effect
        // immediately on the next rendered frame.
        let mode = if self.state.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        CloneSleuthTheme::for_mode(mode).apply(ctx);

        // ── Process background messages ───────────────────────────────────
        let _scan_changed = self.state.process_scan_messages();
        let _search_changed = self.state.process_search_messages();
        self.intake_dropped_files(ctx);

        // Request continuous repaint while background work or toasts are live.
        let needs_repaint = self.state.phase == ScanPhase::Scanning
            || self.state.search_active
            || !self.state.notices.is_empty();
        if needs_repaint {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About CloneSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🛡 CloneSleuth")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A dashboard for monitoring app clones.\n\
                             Portfolio monitoring, threat alerts,\n\
                             and a simulated APK risk scanner.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.hyperlink_to(
                        "github.com/clonesleuth/CloneSleuth",
                        "https://github.com/clonesleuth/CloneSleuth",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Left navigation sidebar ───────────────────────────────────────
        egui::SidePanel::left("nav_panel")
            .default_width(170.0)
            .min_width(140.0)
            .max_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for view in ActiveView::ALL {
                    let selected = self.state.view == view;
                    if ui
                        .selectable_label(selected, format!("{} {}", view.icon(), view.label()))
                        .clicked()
                    {
                        self.state.view = view;
                    }
                    ui.add_space(2.0);
                }
            });

        // ── Central panel (active page) ───────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.view {
                ActiveView::Dashboard => {
                    panels::dashboard_panel::dashboard_panel(ui, &mut self.state)
                }
                ActiveView::Scanner => panels::scanner_panel::scanner_panel(ui, &mut self.state),
                ActiveView::Monitoring => {
                    panels::monitoring_panel::monitoring_panel(ui, &mut self.state)
                }
                ActiveView::Alerts => panels::alerts_panel::alerts_panel(ui, &mut self.state),
            });
        });

        // ── Transient notifications ───────────────────────────────────────
        self.draw_notices(ctx);
    }
}
