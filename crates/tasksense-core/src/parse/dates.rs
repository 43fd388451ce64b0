//! Date expression resolution.
//!
//! Resolves relative phrases ("today", "tomorrow", "next week",
//! "next month") and absolute date patterns (slash dates, ISO dates,
//! "Mon DD") into concrete timestamps relative to an injected "now".
//!
//! Relative phrases are offsets from the reference instant; absolute
//! dates resolve to midnight of the named day. A pattern match that does
//! not form a real calendar date is silently discarded and scanning
//! continues with the next pattern.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

use super::keywords::contains_word;

/// Relative phrases in fixed check order, with their day offsets.
const RELATIVE_PHRASES: &[(&str, i64)] = &[
    ("today", 0),
    ("tomorrow", 1),
    ("next week", 7),
    ("next month", 30),
];

static SLASH_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2,4})").unwrap());

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap());

static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)([a-z]*) (\d{1,2})")
        .unwrap()
});

/// Month abbreviations with their full names, indexed by month number - 1.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Resolve a due date from lowercased text.
///
/// Relative phrases are checked first (word-bounded, in fixed order),
/// then each absolute pattern in turn. The first successful resolution
/// wins; no signal yields `None`.
pub fn resolve_due_date(lower: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    for (phrase, days) in RELATIVE_PHRASES {
        if contains_word(lower, phrase) {
            return Some(now + Duration::days(*days));
        }
    }

    if let Some(caps) = SLASH_DATE_RE.captures(lower) {
        if let Some(date) = parse_slash_date(&caps) {
            return midnight(date);
        }
    }
    if let Some(caps) = ISO_DATE_RE.captures(lower) {
        if let Some(date) = parse_iso_date(&caps) {
            return midnight(date);
        }
    }
    if let Some(caps) = MONTH_DAY_RE.captures(lower) {
        if let Some(date) = parse_month_day(&caps, now.year()) {
            return midnight(date);
        }
    }

    None
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// M/D/Y with a 2- or 4-digit year; 2-digit years land in the 2000s.
fn parse_slash_date(caps: &regex::Captures) -> Option<NaiveDate> {
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_iso_date(caps: &regex::Captures) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// "Mon DD" with the reference year. The month word must be a known
/// abbreviation or full month name; "january" counts, "janitor" does not.
fn parse_month_day(caps: &regex::Captures, year: i32) -> Option<NaiveDate> {
    let prefix = &caps[1];
    let rest = &caps[2];
    let day: u32 = caps[3].parse().ok()?;

    let index = MONTHS.iter().position(|(abbrev, _)| *abbrev == prefix)?;
    let (abbrev, full) = MONTHS[index];
    let word_len = abbrev.len() + rest.len();
    let recognized = rest.is_empty()
        || (full.len() == word_len && full.ends_with(rest))
        || (prefix == "sep" && rest == "t");
    if !recognized {
        return None;
    }

    NaiveDate::from_ymd_opt(year, index as u32 + 1, day)
}
