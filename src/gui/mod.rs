//! GUI module - User interface components

mod app;
mod control_panel;
mod movie_viewer;

pub use app::CineScopeApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use movie_viewer::MovieViewer;
