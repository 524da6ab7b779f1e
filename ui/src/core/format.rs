//! Formatting helpers for presenting plan and progress values.

use time::{macros::format_description, Date, OffsetDateTime};

/// `June 01, 2024` style date used in the generated plan.
pub fn format_long_date(date: Date) -> String {
    date.format(&format_description!("[month repr:long] [day], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Value for an `<input type="date">` (`2024-06-01`).
pub fn format_date_input(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Parses the value an `<input type="date">` reports. Empty or partial
/// input yields `None`.
pub fn parse_date_input(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), &format_description!("[year]-[month]-[day]")).ok()
}

/// Today's calendar date, local when the offset is known, UTC otherwise.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Axis tick label: integers without a fraction, everything else with one decimal.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn long_date_pads_day_and_spells_month() {
        assert_eq!(format_long_date(date!(2024 - 06 - 01)), "June 01, 2024");
        assert_eq!(format_long_date(date!(2025 - 12 - 24)), "December 24, 2025");
    }

    #[test]
    fn date_input_values_parse() {
        assert_eq!(parse_date_input("2024-06-01"), Some(date!(2024 - 06 - 01)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("2024-13-01"), None);
        assert_eq!(format_date_input(date!(2024 - 02 - 09)), "2024-02-09");
    }

    #[test]
    fn ticks_drop_trailing_zero() {
        assert_eq!(format_tick(1200.0), "1200");
        assert_eq!(format_tick(73.5), "73.5");
    }
}
