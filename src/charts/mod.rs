//! Charts module - Interactive chart rendering

mod plotter;

pub use plotter::ChartPlotter;
