//! Free-text date parsing for timeline ordering
//!
//! Portfolio entries carry human-written date strings ("Oct 2024",
//! "July 2025 – Present", "Jan 2024 – May 2024"). This module reduces them
//! to a single integer so heterogeneous entries can be merged into one
//! chronological sequence.

use regex::Regex;
use std::sync::OnceLock;

/// Sort key for entries with no recoverable date. Defined to order after
/// every dated entry.
pub const UNDATED: u32 = 0;

/// Range separator in date strings; only the text before it keys the entry.
const RANGE_SEPARATOR: char = '–';

/// Regex for the year-only fallback: first run of four ASCII digits.
fn year_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[0-9]{4}").unwrap())
}

/// English month names and their standard three-letter abbreviations.
fn month_number(token: &str) -> Option<u32> {
    match token {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Derive an integer sort key from a free-text date or date-range string.
///
/// The start of a range governs the key: "July 2025 – Present" keys the
/// same as "July 2025". A resolvable month/year pair yields
/// `year * 100 + month`, which compares chronologically because the month
/// never overflows into the year digits. Failing that, the first four-digit
/// run anywhere in the string yields `year * 100` (January of that year).
/// Failing that, [`UNDATED`].
///
/// Total over all inputs, including the empty string; never errors.
pub fn sort_key(input: &str) -> u32 {
    let start = input
        .split(RANGE_SEPARATOR)
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let mut words = start.split_whitespace();

    if let (Some(month_token), Some(year_token)) = (words.next(), words.next()) {
        if let (Some(month), Ok(year)) = (month_number(month_token), year_token.parse::<u32>()) {
            if year > 0 {
                return year * 100 + month;
            }
        }
    }

    // Year-only fallback scans the whole input, not just the range start.
    if let Some(found) = year_regex().find(input) {
        if let Ok(year) = found.as_str().parse::<u32>() {
            return year * 100;
        }
    }

    UNDATED
}
