//! Input validation for dates and amounts
//!
//! Pure checks shared by the record codec and the interactive prompts.
//! Nothing here panics: invalid input yields `false` or `None`.

use chrono::NaiveDate;

/// Date format used for expense records and prompts
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a YYYY-MM-DD calendar date
///
/// Only the exact `dddd-dd-dd` layout is accepted; chrono alone would also
/// take padded or signed fields.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_date_layout(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn has_date_layout(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Check whether `s` is a real calendar date in YYYY-MM-DD form
pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Parse a strictly positive, finite amount
pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Check whether `s` is a number strictly greater than zero
pub fn is_valid_amount(s: &str) -> bool {
    parse_amount(s).is_some()
}

/// Parse a budget value: any finite number >= 0
pub fn parse_budget(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
