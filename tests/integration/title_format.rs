use chrono::NaiveDate;
use notestencil::title::{format_title, quarter_of, week_of_year, weekday_name};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_format_yields_empty_name() {
    assert_eq!(format_title("", date(2024, 3, 15)), "");
}

#[test]
fn unknown_tokens_pass_through_unchanged() {
    let now = date(2024, 3, 15);
    assert_eq!(format_title("{{unknown}}", now), "{{unknown}}");
    assert_eq!(format_title("{{year}}-{{unknown}}", now), "2024-{{unknown}}");
}

#[test]
fn year_month_day_equals_date() {
    let now = date(2024, 3, 15);
    assert_eq!(
        format_title("{{year}}-{{month}}-{{day}}", now),
        format_title("{{date}}", now)
    );
}

#[test]
fn date_token_expands_zero_padded() {
    assert_eq!(format_title("{{date}}-note", date(2024, 3, 15)), "2024-03-15-note");
    assert_eq!(format_title("{{month}}/{{day}}", date(2024, 1, 2)), "01/02");
}

#[test]
fn every_occurrence_is_replaced() {
    assert_eq!(format_title("{{day}} and {{day}}", date(2024, 3, 5)), "05 and 05");
}

#[test]
fn quarters_follow_the_calendar() {
    assert_eq!(quarter_of(date(2024, 1, 10)), 1);
    assert_eq!(quarter_of(date(2024, 3, 31)), 1);
    assert_eq!(quarter_of(date(2024, 4, 1)), 2);
    assert_eq!(quarter_of(date(2024, 9, 30)), 3);
    assert_eq!(quarter_of(date(2024, 12, 25)), 4);
}

#[test]
fn week_of_year_counts_from_january_first() {
    // 2024-01-01 is a Monday: offset 1, ceil(2 / 7) = 1.
    assert_eq!(week_of_year(date(2024, 1, 1)), 1);
    assert_eq!(format_title("{{week}}", date(2024, 1, 1)), "01");
    // Day 75 + offset 1 = 76, ceil(76 / 7) = 11.
    assert_eq!(week_of_year(date(2024, 3, 15)), 11);
    // 2023-01-01 is a Sunday: offset 0, week of Dec 31 = ceil(365 / 7) = 53.
    assert_eq!(week_of_year(date(2023, 12, 31)), 53);
}

#[test]
fn weekday_names_are_sunday_indexed() {
    assert_eq!(weekday_name(date(2024, 3, 15)), "Friday");
    assert_eq!(weekday_name(date(2024, 3, 17)), "Sunday");
    assert_eq!(format_title("{{weekday}}", date(2024, 3, 16)), "Saturday");
}
