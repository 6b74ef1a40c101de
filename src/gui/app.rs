//! CineScope Main Application
//! Main window wiring the control panel, the movie viewer and the
//! background CSV loader together.

use crate::data::{read_movie_csv, DataLoader, MovieViews, Processor};
use crate::gui::{ControlPanel, ControlPanelAction, MovieViewer};
use egui::SidePanel;
use polars::prelude::*;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete {
        df: DataFrame,
        views: MovieViews,
        row_count: usize,
        column_count: usize,
    },
    Error(String),
}

/// Main application window.
pub struct CineScopeApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    viewer: MovieViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl CineScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            viewer: MovieViewer::new(),
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle CSV file selection; parsing and normalization run off-thread.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        // The normalized table is cached per file: picking the file that is
        // already loaded must not re-parse or re-synthesize
        if self.loader.get_dataframe().is_some()
            && self.control_panel.settings.csv_path.as_deref() == Some(path.as_path())
        {
            self.control_panel.set_progress(100.0, "File already loaded");
            return;
        }

        // Clear previous session
        self.viewer.clear();
        self.loader.clear();
        self.control_panel.clear_data();
        self.control_panel.settings.csv_path = Some(path.clone());
        self.control_panel.set_progress(0.0, "Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let path_str = path.to_string_lossy().to_string();

        // Load, normalize and derive views in a background thread
        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            let mut rng = rand::thread_rng();
            let loaded = read_movie_csv(&path_str, &mut rng);

            match loaded {
                Ok(df) => match Processor::build_views(&df) {
                    Ok(views) => {
                        let _ = tx.send(LoadResult::Complete {
                            row_count: df.height(),
                            column_count: df.width(),
                            df,
                            views,
                        });
                    }
                    Err(e) => {
                        let _ = tx.send(LoadResult::Error(e.to_string()));
                    }
                },
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(0.0, &status);
                    }
                    LoadResult::Complete {
                        df,
                        views,
                        row_count,
                        column_count,
                    } => {
                        log::info!("loaded {row_count} movies ({column_count} columns)");
                        self.loader.set_dataframe(df);
                        self.viewer.set_views(views);
                        self.control_panel
                            .update_titles(self.loader.get_unique_values("title"));
                        self.control_panel.set_progress(
                            100.0,
                            &format!("Loaded {} movies, {} columns", row_count, column_count),
                        );
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::warn!("CSV load failed: {error}");
                        // A failed load leaves no table and no views behind
                        self.loader.clear();
                        self.viewer.clear();
                        self.control_panel.clear_data();
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Open a YouTube trailer search for the selected title.
    fn handle_watch_trailer(&mut self) {
        let title = self.control_panel.settings.selected_title.clone();
        if title.is_empty() {
            self.control_panel.set_progress(0.0, "No movie selected");
            return;
        }

        let url = Processor::trailer_search_url(&title);
        match open::that(&url) {
            Ok(()) => {
                log::info!("opened trailer search for {title:?}");
                self.control_panel
                    .set_progress(100.0, &format!("Opened trailer search for \"{title}\""));
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: could not open browser: {e}"));
            }
        }
    }
}

impl eframe::App for CineScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::WatchTrailer => self.handle_watch_trailer(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Movie Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(
                ui,
                &self.control_panel.settings.search_query.clone(),
                self.loader.get_dataframe(),
            );
        });
    }
}
