use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::diff;

/// Method form of [`diff::precise_diff`] on chrono's date types.
pub trait PreciseDiff {
    /// Calendar difference between `self` and `other` using the built-in
    /// German table.
    fn precise_diff(&self, other: &Self) -> String;
}

impl PreciseDiff for NaiveDateTime {
    fn precise_diff(&self, other: &Self) -> String {
        diff::precise_diff(*self, *other)
    }
}

impl PreciseDiff for NaiveDate {
    fn precise_diff(&self, other: &Self) -> String {
        diff::precise_diff(self.and_time(NaiveTime::MIN), other.and_time(NaiveTime::MIN))
    }
}

/// Zoned values are compared on their local wall-clock date and time.
impl<Tz: TimeZone> PreciseDiff for DateTime<Tz> {
    fn precise_diff(&self, other: &Self) -> String {
        diff::precise_diff(self.naive_local(), other.naive_local())
    }
}
