//! Routed pages. Each one subscribes to the global language code so it
//! re-renders when the locale changes elsewhere.

mod planner;
pub use planner::Planner;

mod dashboard;
pub use dashboard::Dashboard;
