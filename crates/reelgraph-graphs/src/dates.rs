//! Year extraction and best-effort date parsing for the `date_added` column.
//!
//! Two strategies coexist on purpose. The trend and genre analyses read the
//! year as the token after the first comma ("September 9, 2021" -> "2021").
//! The freshness heatmap parses the whole value with [`parse_date_lenient`],
//! which accepts many more layouts.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date layouts with a four-digit year, tried in order by [`parse_date_lenient`].
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d.%m.%Y",
];

/// Layouts with a two-digit year, month before day. `%y` maps 00-68 to 20xx.
const SHORT_YEAR_FORMATS: &[&str] = &[
    "%B %d, %y",
    "%b %d, %y",
    "%m/%d/%y",
    "%d-%b-%y",
    "%m-%d-%y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// `%Y` also reads one to three digits, so "9/9/21" would land in year 9.
const FOUR_DIGIT_YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

/// The raw year token: the text after the first comma, trimmed.
///
/// Returns `None` when the value has no comma.
pub fn year_token(date_text: &str) -> Option<&str> {
    date_text.split(',').nth(1).map(str::trim)
}

/// Parses a token made of exactly four ASCII digits.
pub fn parse_four_digit_year(token: &str) -> Option<i32> {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Year added by the token rule, `None` when missing or not a 4-digit year.
pub fn year_added(date_added: Option<&str>) -> Option<i32> {
    date_added
        .and_then(year_token)
        .and_then(parse_four_digit_year)
}

/// Parses a date written in any of the common catalog layouts.
///
/// Whitespace is trimmed and collapsed first. Besides full dates this accepts
/// two-digit years ("9/9/21"), date-times, RFC 3339 timestamps,
/// "September 2021" (first of the month) and a bare year (first of January).
/// Anything else yields `None`.
pub fn parse_date_lenient(text: &str) -> Option<NaiveDate> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    parse_month_year(&normalized)
        .or_else(|| parse_with(&normalized, DATE_FORMATS).filter(has_four_digit_year))
        .or_else(|| parse_with(&normalized, SHORT_YEAR_FORMATS))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
                .map(|dt| dt.date())
                .filter(has_four_digit_year)
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(&normalized)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| parse_four_digit_year(&normalized).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)))
}

fn parse_with(text: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .filter_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .find(has_four_digit_year)
}

fn has_four_digit_year(date: &NaiveDate) -> bool {
    FOUR_DIGIT_YEARS.contains(&date.year())
}

/// "September 2021" or "Sep 2021", read as the first of that month.
fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let (month, year) = text.split_once(' ')?;
    let year = parse_four_digit_year(year)?;
    let padded = format!("1 {month} {year}");
    ["%d %B %Y", "%d %b %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&padded, format).ok())
}

/// Year of a leniently parsed date.
pub fn parsed_year(date_added: Option<&str>) -> Option<i32> {
    date_added.and_then(parse_date_lenient).map(|date| date.year())
}
