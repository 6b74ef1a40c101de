//! Movie Viewer Widget
//! Central scrollable panel showing the sample table, search results and
//! the interactive charts.

use crate::charts::ChartPlotter;
use crate::data::{MovieRecord, MovieViews, Processor};
use egui::{RichText, ScrollArea};
use polars::prelude::DataFrame;

const SAMPLE_ROWS: usize = 5;
const OVERVIEW_PREVIEW_CHARS: usize = 60;

/// Central panel state: derived views plus the cached search result for the
/// last query, so typing only re-filters when the text actually changes.
pub struct MovieViewer {
    views: Option<MovieViews>,
    last_query: String,
    search_results: Vec<MovieRecord>,
}

impl Default for MovieViewer {
    fn default() -> Self {
        Self {
            views: None,
            last_query: String::new(),
            search_results: Vec::new(),
        }
    }
}

impl MovieViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install views for a freshly loaded table.
    pub fn set_views(&mut self, views: MovieViews) {
        self.views = Some(views);
        self.last_query.clear();
        self.search_results.clear();
    }

    /// Drop everything (load failed or a new file is being read).
    pub fn clear(&mut self) {
        self.views = None;
        self.last_query.clear();
        self.search_results.clear();
    }

    fn refresh_search(&mut self, query: &str, df: Option<&DataFrame>) {
        if query == self.last_query {
            return;
        }
        self.last_query = query.to_string();
        self.search_results.clear();

        let Some(df) = df else {
            return;
        };
        if query.is_empty() {
            return;
        }

        match Processor::search_by_title(df, query).and_then(|hits| {
            Processor::collect_records(&hits)
        }) {
            Ok(records) => self.search_results = records,
            Err(e) => log::warn!("title search failed: {e}"),
        }
    }

    /// Draw the viewer.
    pub fn show(&mut self, ui: &mut egui::Ui, query: &str, df: Option<&DataFrame>) {
        self.refresh_search(query, df);

        let Some(views) = &self.views else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // ===== Sample Data =====
                ui.label(RichText::new("📊 Sample Data").size(16.0).strong());
                ui.add_space(5.0);
                let sample_len = views.records.len().min(SAMPLE_ROWS);
                Self::draw_movie_table(ui, "sample_data", &views.records[..sample_len]);

                // ===== Search Results =====
                if !query.is_empty() {
                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(10.0);
                    ui.label(RichText::new("🔍 Search Results").size(16.0).strong());
                    ui.add_space(5.0);

                    if self.search_results.is_empty() {
                        ui.label(format!("No titles match \"{query}\""));
                    } else {
                        Self::draw_movie_table(ui, "search_results", &self.search_results);
                    }
                }

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                // ===== Scatter =====
                ui.label(RichText::new("📈 Popularity vs Rating").size(16.0).strong());
                ui.add_space(5.0);
                ChartPlotter::draw_scatter_chart(ui, views);

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                // ===== Top Rated =====
                ui.label(
                    RichText::new("🎬 Top 10 Rated Movies").size(16.0).strong(),
                );
                ui.add_space(5.0);
                ChartPlotter::draw_bar_chart(ui, &views.top_rated);

                ui.add_space(15.0);
            });
    }

    fn format_number(value: f64) -> String {
        if value.is_nan() {
            "-".to_string()
        } else if value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        }
    }

    fn preview(text: &str) -> String {
        if text.chars().count() > OVERVIEW_PREVIEW_CHARS {
            let mut short: String = text.chars().take(OVERVIEW_PREVIEW_CHARS - 1).collect();
            short.push('…');
            short
        } else {
            text.to_string()
        }
    }

    /// Draw a striped table of movie records.
    fn draw_movie_table(ui: &mut egui::Ui, id: &str, records: &[MovieRecord]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(id))
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        // Headers
                        ui.label(RichText::new("Title").strong().size(12.0));
                        ui.label(RichText::new("Genre").strong().size(12.0));
                        ui.label(RichText::new("Director").strong().size(12.0));
                        ui.label(RichText::new("Popularity").strong().size(12.0));
                        ui.label(RichText::new("Rating").strong().size(12.0));
                        ui.label(RichText::new("Reviews").strong().size(12.0));
                        ui.label(RichText::new("Overview").strong().size(12.0));
                        ui.end_row();

                        for record in records {
                            let title = if record.title.is_empty() {
                                "-"
                            } else {
                                &record.title
                            };
                            ui.label(RichText::new(title).size(12.0));
                            ui.label(RichText::new(&record.genres).size(12.0));
                            ui.label(RichText::new(&record.director).size(12.0));
                            ui.label(
                                RichText::new(Self::format_number(record.popularity)).size(12.0),
                            );
                            ui.label(RichText::new(Self::format_number(record.rating)).size(12.0));
                            ui.label(
                                RichText::new(Self::format_number(record.reviews)).size(12.0),
                            );
                            ui.label(RichText::new(Self::preview(&record.overview)).size(12.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
