use crate::charts::{ChartKind, SeriesColor, SeriesSpec};
use crate::core::progress::{
    calories_series, week_labels, weight_series, workout_series, ProgressRow,
};

pub const CALORIES_COLOR: &str = "#ffa500";
const WEIGHT_COLOR: &str = "#636efa";

pub fn weight_chart(rows: &[ProgressRow]) -> SeriesSpec {
    SeriesSpec {
        kind: ChartKind::Line,
        title: "Weight Loss Over Time".to_string(),
        x_label: "Week".to_string(),
        y_label: "Weight (kg)".to_string(),
        labels: week_labels(rows),
        values: weight_series(rows),
        color: SeriesColor::Solid(WEIGHT_COLOR.to_string()),
    }
}

pub fn workouts_chart(rows: &[ProgressRow]) -> SeriesSpec {
    SeriesSpec {
        kind: ChartKind::Bar,
        title: "Workouts Per Week".to_string(),
        x_label: "Week".to_string(),
        y_label: "Workout Count".to_string(),
        labels: week_labels(rows),
        values: workout_series(rows),
        color: SeriesColor::Continuous,
    }
}

pub fn calories_chart(rows: &[ProgressRow]) -> SeriesSpec {
    SeriesSpec {
        kind: ChartKind::Area,
        title: "Weekly Calories Burned".to_string(),
        x_label: "Week".to_string(),
        y_label: "Calories Burned".to_string(),
        labels: week_labels(rows),
        values: calories_series(rows),
        color: SeriesColor::Solid(CALORIES_COLOR.to_string()),
    }
}
