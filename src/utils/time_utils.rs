use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    /// Short month/day label for chart axes, no zero padding (e.g. `3/5`).
    pub const AXIS_TIME_FORMAT: &str = "%-m/%-d";
}

/// Local calendar date of an epoch-ms timestamp as `YYYY-MM-DD`.
/// Empty string for timestamps chrono can't represent.
pub fn epoch_ms_to_local_date(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            local_date_string(&dt)
        }
        chrono::LocalResult::None => String::new(),
    }
}

pub fn local_date_string(dt: &DateTime<Local>) -> String {
    dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// `YYYY-MM-DD` -> `M/D`. Falls back to the input if it doesn't parse.
pub fn date_to_axis_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, TimeUtils::STANDARD_TIME_FORMAT) {
        Ok(day) => day.format(TimeUtils::AXIS_TIME_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn is_weekend<D: Datelike>(day: &D) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_ms_formats_as_local_calendar_date() {
        // Noon avoids any DST edge in whatever zone the tests run in
        let noon = Local
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .single()
            .unwrap();
        assert_eq!(epoch_ms_to_local_date(noon.timestamp_millis()), "2024-03-05");
    }

    #[test]
    fn axis_label_drops_year_and_padding() {
        assert_eq!(date_to_axis_label("2024-03-05"), "3/5");
        assert_eq!(date_to_axis_label("2023-12-25"), "12/25");
        assert_eq!(date_to_axis_label("not a date"), "not a date");
    }

    #[test]
    fn weekend_detection() {
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert!(is_weekend(&saturday));
        assert!(!is_weekend(&monday));
    }
}
