//! Control Panel Widget
//! Left side panel with file selection, search and trailer controls.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// User settings for the session
#[derive(Default, Clone)]
pub struct UserSettings {
    pub csv_path: Option<PathBuf>,
    pub search_query: String,
    pub selected_title: String,
}

/// Left side control panel with file selection, search box and trailer picker.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub titles: Vec<String>,
    pub progress: f32,
    pub status: String,
    pub trailer_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            titles: Vec::new(),
            progress: 0.0,
            status: "Ready".to_string(),
            trailer_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the trailer picker after a CSV load.
    pub fn update_titles(&mut self, mut titles: Vec<String>) {
        titles.sort();
        self.titles = titles;
        self.trailer_enabled = !self.titles.is_empty();
        if self.settings.selected_title.is_empty() {
            if let Some(first) = self.titles.first() {
                self.settings.selected_title = first.clone();
            }
        }
    }

    /// Forget per-dataset state (new file picked or load failed).
    pub fn clear_data(&mut self) {
        self.titles.clear();
        self.settings.search_query.clear();
        self.settings.selected_title.clear();
        self.trailer_enabled = false;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎬 CineScope")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Movie Dataset Explorer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Search Section =====
        ui.label(RichText::new("🔍 Search for a Movie").size(14.0).strong());
        ui.add_space(5.0);

        ui.add_enabled_ui(!self.titles.is_empty(), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.settings.search_query)
                    .hint_text("Enter movie name")
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Trailer Section =====
        ui.label(RichText::new("🎥 Watch Trailer").size(14.0).strong());
        ui.add_space(5.0);

        ui.add_enabled_ui(self.trailer_enabled, |ui| {
            ComboBox::from_id_salt("trailer_title")
                .width(ui.available_width() - 10.0)
                .selected_text(&self.settings.selected_title)
                .show_ui(ui, |ui| {
                    for title in &self.titles {
                        if ui
                            .selectable_label(self.settings.selected_title == *title, title)
                            .clicked()
                        {
                            self.settings.selected_title = title.clone();
                        }
                    }
                });

            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                let button = egui::Button::new(RichText::new("▶ Watch Trailer").size(14.0))
                    .min_size(egui::vec2(160.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::WatchTrailer;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Progress").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Opened") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    WatchTrailer,
}
