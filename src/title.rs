//! Title Formatter.
//!
//! Pure token substitution over a fixed date vocabulary. All occurrences of
//! each token are replaced, unknown tokens pass through unchanged, and an
//! empty format yields an empty name. Dates are always the user's local
//! calendar date; callers resolve "today" through [`today_local`] so that
//! users west or east of UTC never see yesterday's or tomorrow's date.

use chrono::{Datelike, Local, NaiveDate};

/// Weekday names, Sunday-indexed.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The local calendar date, the only notion of "today" in this crate.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Expands the recognized `{{...}}` tokens in `format` against `date`.
pub fn format_title(format: &str, date: NaiveDate) -> String {
    if format.is_empty() {
        return String::new();
    }
    let substitutions = [
        ("{{date}}", date.format("%Y-%m-%d").to_string()),
        ("{{year}}", date.format("%Y").to_string()),
        ("{{quarter}}", quarter_of(date).to_string()),
        ("{{month}}", date.format("%m").to_string()),
        ("{{week}}", format!("{:02}", week_of_year(date))),
        ("{{weekday}}", weekday_name(date).to_string()),
        ("{{day}}", date.format("%d").to_string()),
    ];
    let mut out = format.to_string();
    for (token, value) in substitutions {
        if out.contains(token) {
            out = out.replace(token, &value);
        }
    }
    out
}

/// Quarter of the year, 1 through 4.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() + 2) / 3
}

/// Week of the year: `ceil((day_of_year + first_weekday_offset) / 7)` where
/// the offset is the Sunday-indexed weekday of January 1st.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let day_of_year = date.ordinal();
    let weekday = date.weekday().num_days_from_sunday();
    let jan_first_offset =
        (weekday as i64 - (day_of_year as i64 - 1)).rem_euclid(7) as u32;
    (day_of_year + jan_first_offset).div_ceil(7)
}

/// Sunday-indexed weekday name for `date`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}
