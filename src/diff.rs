//! diff.rs
//!
//! Human-readable calendar difference between two instants, e.g.
//!     "2 Jahre 3 Monate"
//!
//! Chrono does not provide a year/month/day diff, so the calendar-aware
//! borrowing rules are implemented here. Both ends are widened to whole days:
//! the start is the beginning of its day and the end is the beginning of the
//! following day, so a single date counts as one full day.
//!
//! The breakdown handles:
//!   • second/minute/hour underflow (borrowing from the next larger unit)
//!   • day underflow (borrowing from the month before the end month)
//!   • start days that do not exist in the borrowed month (31/01 → 02/03)
//!   • month underflow (borrowing from years)
//!   • leap years
//!
//! Only years and months are rendered. Spans under one month render as a day
//! count instead.

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Timelike};
use tracing::{debug, trace};

use crate::strings::{StringTable, Unit};

/// Shown when neither years, months nor days are left. Not localized.
const JOINED_TODAY: &str = "Joined Today";

/// Field-wise breakdown of a span. All fields are non-negative once built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Difference {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl Difference {
    /// Breakdown of `end - start`. Requires `start <= end`.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let mut years = end.year() - start.year();
        let mut months = end.month() as i32 - start.month() as i32;
        let mut days = end.day() as i32 - start.day() as i32;
        let mut hours = end.hour() as i32 - start.hour() as i32;
        let mut minutes = end.minute() as i32 - start.minute() as i32;
        let mut seconds = end.second() as i32 - start.second() as i32;

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
            days -= 1;
        }

        // Fix day underflow
        if days < 0 {
            let (prev_year, prev_month) = previous_month(end.year(), end.month());
            let days_in_last_full_month = days_in_month(prev_year, prev_month) as i32;
            let start_day = start.day() as i32;

            trace!(days, days_in_last_full_month, start_day, "borrowing days from previous month");

            days = if days_in_last_full_month < start_day {
                // The start day does not exist in the borrowed month.
                days_in_last_full_month + days + (start_day - days_in_last_full_month)
            } else {
                days_in_last_full_month + days
            };
            months -= 1;
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

/// Calendar difference between two instants rendered with the built-in
/// German table. The order of the arguments does not matter.
pub fn precise_diff(d1: NaiveDateTime, d2: NaiveDateTime) -> String {
    precise_diff_with(StringTable::german(), d1, d2)
}

/// Same as [`precise_diff`] with caller-supplied display words.
pub fn precise_diff_with(strings: &StringTable, d1: NaiveDateTime, d2: NaiveDateTime) -> String {
    let (start, end) = inclusive_bounds(d1, d2);
    if start == end {
        debug!(%start, "no difference between normalized bounds");
        return strings.nodiff.to_string();
    }

    let diff = Difference::between(start, end);
    debug!(
        %start,
        %end,
        years = diff.years,
        months = diff.months,
        days = diff.days,
        hours = diff.hours,
        minutes = diff.minutes,
        seconds = diff.seconds,
        "computed calendar difference"
    );

    render(strings, &diff)
}

/// Orders the pair and widens it to whole days: start of the first day up to
/// the start of the day after the last one.
fn inclusive_bounds(d1: NaiveDateTime, d2: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let (first, last) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };

    let start = first.date().and_time(NaiveTime::MIN);
    // No day follows the last representable date; the end stays on it.
    let end_day = last
        .date()
        .checked_add_days(Days::new(1))
        .unwrap_or(last.date());

    (start, end_day.and_time(NaiveTime::MIN))
}

fn render(strings: &StringTable, diff: &Difference) -> String {
    if diff.years == 0 && diff.months == 0 {
        return if diff.days >= 1 {
            strings.pluralize(Unit::Day, diff.days)
        } else {
            JOINED_TODAY.to_string()
        };
    }

    let mut parts = Vec::with_capacity(2);
    if diff.years != 0 {
        parts.push(strings.pluralize(Unit::Year, diff.years));
    }
    if diff.months != 0 {
        parts.push(strings.pluralize(Unit::Month, diff.months));
    }

    parts.join(&*strings.delimiter)
}

/// Month before `month`, rolling back into the previous year for January.
fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
