//! The progress dashboard: the fixed sample table drawn as three charts.

mod series;
pub use series::{calories_chart, weight_chart, workouts_chart, CALORIES_COLOR};

mod view;
pub use view::DashboardView;
