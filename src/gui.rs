// Card Editor - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and manages the file load lifecycle.

use crate::app::loader::FileLoader;
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;

/// The Card Editor application.
pub struct CardEditorApp {
    pub state: AppState,
    pub loader: FileLoader,
}

impl CardEditorApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            loader: FileLoader::new(),
        }
    }

    fn start_load(&mut self, path: std::path::PathBuf) {
        self.state.status_message = format!("Reading '{}'\u{2026}", path.display());
        self.loader.start(path, self.state.config.max_file_size);
    }

    fn export_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("JSON", constants::CARD_FILE_EXTENSIONS)
            .set_file_name(self.state.config.export_file_name.as_str());
        if let Some(dir) = self.state.current_file.as_ref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(dest) = dialog.save_file() {
            // Outcome is reported through the status bar.
            let _ = self.state.export_to(&dest);
        }
    }
}

impl eframe::App for CardEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect a finished background read.
        if let Some(outcome) = self.loader.poll() {
            match outcome.result {
                Ok(contents) => {
                    // Rejections are reported through the status bar.
                    let _ = self.state.apply_loaded(outcome.path, &contents);
                }
                Err(e) => self.state.apply_read_failure(&e),
            }
        }
        // Repaint while a read is in flight so its result appears promptly.
        if self.loader.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // pending_load: set at startup from the CLI path.
        if let Some(path) = self.state.pending_load.take() {
            self.start_load(path);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Card files", constants::CARD_FILE_EXTENSIONS)
                            .pick_file()
                        {
                            self.start_load(path);
                        }
                        ui.close_menu();
                    }
                    let can_export = self.state.current_file.is_some();
                    ui.add_enabled_ui(can_export, |ui| {
                        if ui.button("Export\u{2026}").clicked() {
                            self.export_dialog();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.loader.is_loading() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref path) = self.state.current_file {
                        ui.label(
                            egui::RichText::new(path.display().to_string())
                                .small()
                                .color(ui::theme::MUTED_TEXT),
                        );
                    }
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().strong());
                    }
                });
            });
        });

        // Central panel (card list)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::cards::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
