//! Chart Plotter Module
//! Creates interactive movie visualizations using egui_plot.

use crate::data::{MovieRecord, MovieViews};
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};
use std::collections::HashMap;

/// Base color for the rating bars
pub const BAR_BASE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

/// Color palette for genres
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Creates the popularity/rating scatter and the top-rated bar chart.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a genre.
    pub fn get_genre_color(genre_index: usize) -> Color32 {
        PALETTE[genre_index % PALETTE.len()]
    }

    /// Point radius scaled by review count relative to the dataset maximum.
    /// Square root so marker area tracks the count.
    fn point_radius(reviews: f64, max_reviews: f64) -> f32 {
        if max_reviews <= 0.0 {
            return 3.0;
        }
        let t = (reviews / max_reviews).clamp(0.0, 1.0);
        2.0 + 6.0 * t.sqrt() as f32
    }

    /// Shade the bar by its rating so higher-rated movies stand out.
    fn bar_color(rating: f64) -> Color32 {
        let t = (rating / 10.0).clamp(0.0, 1.0) as f32;
        BAR_BASE_COLOR.gamma_multiply(0.35 + 0.65 * t)
    }

    /// Shorten long titles for axis labels.
    fn shorten(label: &str) -> String {
        const MAX_CHARS: usize = 14;
        if label.chars().count() > MAX_CHARS {
            let mut short: String = label.chars().take(MAX_CHARS - 1).collect();
            short.push('…');
            short
        } else {
            label.to_string()
        }
    }

    /// Draw the popularity vs rating scatter.
    /// One legend entry per genre, point size by review count.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, views: &MovieViews) {
        Plot::new("popularity_vs_rating")
            .height(360.0)
            .x_axis_label("Popularity")
            .y_axis_label("Rating")
            .allow_scroll(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (idx, genre) in views.genre_order.iter().enumerate() {
                    let Some(points) = views.scatter_by_genre.get(genre) else {
                        continue;
                    };
                    let color = Self::get_genre_color(idx);

                    // Bucket points by radius so same-sized markers share one
                    // plot item; entries with the same name merge in the legend
                    let mut by_radius: HashMap<u32, Vec<[f64; 2]>> = HashMap::new();
                    for point in points {
                        let radius = Self::point_radius(point.reviews, views.max_reviews);
                        by_radius
                            .entry((radius * 10.0) as u32)
                            .or_default()
                            .push([point.popularity, point.rating]);
                    }

                    for (radius_key, pts) in by_radius {
                        plot_ui.points(
                            Points::new(PlotPoints::from_iter(pts))
                                .radius(radius_key as f32 / 10.0)
                                .color(color.gamma_multiply(0.8))
                                .name(genre),
                        );
                    }
                }
            });
    }

    /// Draw the top-rated bar chart.
    /// X-axis: rank position labeled with the title, Y-axis: rating.
    pub fn draw_bar_chart(ui: &mut egui::Ui, top_rated: &[MovieRecord]) {
        let x_labels: Vec<String> = top_rated
            .iter()
            .map(|record| Self::shorten(&record.title))
            .collect();

        let bars: Vec<Bar> = top_rated
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.rating.is_nan())
            .map(|(i, record)| {
                Bar::new(i as f64, record.rating)
                    .width(0.6)
                    .fill(Self::bar_color(record.rating))
                    .name(format!("{} ({:.1})", record.title, record.rating))
            })
            .collect();

        Plot::new("top_rated_bars")
            .height(360.0)
            .x_axis_label("Title")
            .y_axis_label("Rating")
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}
