use chrono::{Duration, NaiveDate};

/// Calendar-day shift, crossing month and year boundaries.
pub fn shift_day(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::days(delta)
}

/// Canonical `YYYY-MM-DD` key. Attendance records store their date as this
/// exact string, so matching is plain string equality.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Long display form, "Wednesday, May 1, 2024". Display only, never used for
/// matching.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short weekday label ("Mon", "Tue") used for chart axes.
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
