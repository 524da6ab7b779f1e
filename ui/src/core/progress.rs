//! Sample progress history shown on the dashboard.
//!
//! The table is demo content: it is rebuilt on every render from the same
//! constants and nothing ever writes to it.

const WEIGHTS_KG: [f64; 6] = [75.0, 74.2, 73.5, 72.8, 72.1, 71.4];
const WORKOUT_COUNTS: [u32; 6] = [3, 4, 4, 5, 4, 5];
const CALORIES_BURNED: [u32; 6] = [1200, 1400, 1450, 1600, 1550, 1650];

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRow {
    pub week: String,
    pub weight_kg: f64,
    pub workout_count: u32,
    pub calories_burned: u32,
}

/// Six weekly rows, `Week 1` through `Week 6`.
pub fn progress_table() -> Vec<ProgressRow> {
    WEIGHTS_KG
        .iter()
        .zip(WORKOUT_COUNTS)
        .zip(CALORIES_BURNED)
        .enumerate()
        .map(|(idx, ((&weight_kg, workout_count), calories_burned))| ProgressRow {
            week: format!("Week {}", idx + 1),
            weight_kg,
            workout_count,
            calories_burned,
        })
        .collect()
}

pub fn week_labels(rows: &[ProgressRow]) -> Vec<String> {
    rows.iter().map(|row| row.week.clone()).collect()
}

pub fn weight_series(rows: &[ProgressRow]) -> Vec<f64> {
    rows.iter().map(|row| row.weight_kg).collect()
}

pub fn workout_series(rows: &[ProgressRow]) -> Vec<f64> {
    rows.iter().map(|row| f64::from(row.workout_count)).collect()
}

pub fn calories_series(rows: &[ProgressRow]) -> Vec<f64> {
    rows.iter().map(|row| f64::from(row.calories_burned)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_six_labelled_weeks() {
        let rows = progress_table();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].week, "Week 1");
        assert_eq!(rows[5].week, "Week 6");
    }

    #[test]
    fn spot_values_never_change() {
        for _ in 0..2 {
            let rows = progress_table();
            assert_eq!(rows[2].weight_kg, 73.5);
            assert_eq!(rows[4].workout_count, 4);
            assert_eq!(rows[5].calories_burned, 1650);
        }
    }

    #[test]
    fn series_follow_row_order() {
        let rows = progress_table();
        assert_eq!(workout_series(&rows), vec![3.0, 4.0, 4.0, 5.0, 4.0, 5.0]);
        assert_eq!(calories_series(&rows)[1], 1400.0);
        assert_eq!(weight_series(&rows)[3], 72.8);
        assert_eq!(week_labels(&rows)[2], "Week 3");
    }
}
