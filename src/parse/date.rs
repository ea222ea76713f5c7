// src/parse/date.rs
//! Game-date detection. Recap posts open with either the post date as the
//! author typed it ("Feb 14") or the relative stamp the site shows
//! ("3 hrs ago", "Yesterday at 9:12 PM").

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use regex::Regex;

static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([a-z]{3,9})\.?\s+(\d{1,2})\b").expect("valid month-day regex")
});

static HOURS_AGO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(?:h|hr|hrs|hour|hours)\s+ago\b").expect("valid hours-ago regex")
});

static MINUTES_AGO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(?:m|min|mins|minute|minutes)\s+ago\b").expect("valid minutes-ago regex")
});

static YESTERDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*yesterday\s+at\b").expect("valid yesterday regex")
});

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Resolve a date line against `now`. `None` if the line isn't one.
///
/// Explicit "Mon DD" dates land in `now`'s year.
pub fn parse_date_line(line: &str, now: NaiveDateTime) -> Option<NaiveDate> {
    if let Some(date) = month_day(line, now.year()) {
        return Some(date);
    }
    if let Some(n) = first_number(&HOURS_AGO_RE, line) {
        return now.checked_sub_signed(Duration::try_hours(n)?).map(|t| t.date());
    }
    if let Some(n) = first_number(&MINUTES_AGO_RE, line) {
        return now.checked_sub_signed(Duration::try_minutes(n)?).map(|t| t.date());
    }
    if YESTERDAY_RE.is_match(line) {
        return now.date().pred_opt();
    }
    None
}

fn month_day(line: &str, year: i32) -> Option<NaiveDate> {
    let caps = MONTH_DAY_RE.captures(line)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "Feb", "feb", "February", "Sept" → 2, 2, 2, 9. Needs at least three letters.
fn month_number(word: &str) -> Option<u32> {
    let lc = word.to_ascii_lowercase();
    if lc.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&lc))
        .map(|i| i as u32 + 1)
}

fn first_number(re: &Regex, line: &str) -> Option<i64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}
