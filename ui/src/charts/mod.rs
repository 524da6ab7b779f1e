//! Inline SVG charts for the progress dashboard.
//!
//! `model` turns a labelled series into positioned marks (pure and testable);
//! `view` only draws what the model computed.

mod model;
pub use model::{BarMark, ChartKind, ChartModel, PointMark, SeriesColor, SeriesSpec, Tick};

mod scale;
pub use scale::{blues, nice_ticks, LinearScale};

mod view;
pub use view::ProgressChart;

/// Colors shared by every chart on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub paper: &'static str,
    pub plot: &'static str,
    pub font: &'static str,
    pub grid: &'static str,
    pub font_size: u32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            paper: "#ffffff",
            plot: "#f9fafb",
            font: "#212529",
            grid: "#e5e7eb",
            font_size: 10,
        }
    }
}
