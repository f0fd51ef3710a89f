// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Calendar date helpers used by daily rotation.
//!
//! Dates are always rendered and parsed as `YYYY-MM-DD` in the local time zone.

use jiff::Zoned;
use jiff::civil::Date;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current local date as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// let today = daylog::date::today();
/// assert!(daylog::date::is_valid_date(&today));
/// ```
pub fn today() -> String {
    format_date(Zoned::now().date())
}

/// Return `true` if `s` is a real calendar date written exactly as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// assert!(daylog::date::is_valid_date("2024-02-29"));
/// assert!(!daylog::date::is_valid_date("2023-02-29"));
/// assert!(!daylog::date::is_valid_date("2024-2-9"));
/// ```
pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Return the number of whole days from the date `s` to today.
///
/// Dates in the future give a negative number. An unparsable `s` gives `0`, so callers that need to
/// tell the two apart must check [`is_valid_date`] first.
pub fn diff_days(s: &str) -> i64 {
    match parse_date(s) {
        Some(date) => days_between(date, Zoned::now().date()),
        None => 0,
    }
}

pub(crate) fn format_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(s: &str) -> Option<Date> {
    let shaped = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    Date::strptime(DATE_FORMAT, s).ok()
}

pub(crate) fn days_between(from: Date, to: Date) -> i64 {
    to.since(from)
        .map(|span| i64::from(span.get_days()))
        .unwrap_or_default()
}
