//! CineScope - Movie Dataset Explorer & Interactive Chart Viewer
//!
//! A Rust application for exploring movie metadata CSVs: search, charts,
//! and trailer links.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::CineScopeApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("CineScope"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CineScope",
        options,
        Box::new(|cc| Ok(Box::new(CineScopeApp::new(cc)))),
    )
}
