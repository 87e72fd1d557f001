use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Calendar units a difference can be broken down into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Display words used when rendering a difference.
///
/// Every field falls back to the built-in German word, so a JSON table only
/// needs to list the entries it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringTable {
    pub nodiff: Cow<'static, str>,
    pub year: Cow<'static, str>,
    pub years: Cow<'static, str>,
    pub month: Cow<'static, str>,
    pub months: Cow<'static, str>,
    pub day: Cow<'static, str>,
    pub days: Cow<'static, str>,
    pub hour: Cow<'static, str>,
    pub hours: Cow<'static, str>,
    pub minute: Cow<'static, str>,
    pub minutes: Cow<'static, str>,
    pub second: Cow<'static, str>,
    pub seconds: Cow<'static, str>,
    pub delimiter: Cow<'static, str>,
}

static GERMAN: StringTable = StringTable {
    nodiff: Cow::Borrowed(""),
    year: Cow::Borrowed("Jahr"),
    years: Cow::Borrowed("Jahre"),
    month: Cow::Borrowed("Monat"),
    months: Cow::Borrowed("Monate"),
    day: Cow::Borrowed("Tag"),
    days: Cow::Borrowed("Tage"),
    hour: Cow::Borrowed("Stunde"),
    hours: Cow::Borrowed("Stunden"),
    minute: Cow::Borrowed("Minute"),
    minutes: Cow::Borrowed("Minuten"),
    second: Cow::Borrowed("Sekunde"),
    seconds: Cow::Borrowed("Sekunden"),
    delimiter: Cow::Borrowed(" "),
};

impl StringTable {
    /// The built-in German table.
    pub fn german() -> &'static StringTable {
        &GERMAN
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Singular word for a count of exactly 1, plural otherwise (0 included).
    pub fn word(&self, unit: Unit, count: i32) -> &str {
        let singular = count == 1;
        match unit {
            Unit::Year if singular => &self.year,
            Unit::Year => &self.years,
            Unit::Month if singular => &self.month,
            Unit::Month => &self.months,
            Unit::Day if singular => &self.day,
            Unit::Day => &self.days,
            Unit::Hour if singular => &self.hour,
            Unit::Hour => &self.hours,
            Unit::Minute if singular => &self.minute,
            Unit::Minute => &self.minutes,
            Unit::Second if singular => &self.second,
            Unit::Second => &self.seconds,
        }
    }

    /// Returns `"<count> <word>"`.
    pub fn pluralize(&self, unit: Unit, count: i32) -> String {
        format!("{count} {}", self.word(unit, count))
    }
}

impl Default for StringTable {
    fn default() -> Self {
        GERMAN.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn singular_only_for_exactly_one() {
        let table = StringTable::german();
        assert_eq!(table.pluralize(Unit::Year, 1), "1 Jahr");
        assert_eq!(table.pluralize(Unit::Year, 2), "2 Jahre");
        assert_eq!(table.pluralize(Unit::Month, 1), "1 Monat");
        assert_eq!(table.pluralize(Unit::Day, 0), "0 Tage");
        assert_eq!(table.pluralize(Unit::Second, -1), "-1 Sekunden");
        assert_eq!(table.word(Unit::Hour, 1), "Stunde");
        assert_eq!(table.word(Unit::Minute, 5), "Minuten");
    }

    #[test]
    fn partial_json_keeps_german_defaults() {
        let table = StringTable::from_json_str(r#"{ "day": "day", "days": "days" }"#).unwrap();
        assert_eq!(table.pluralize(Unit::Day, 3), "3 days");
        assert_eq!(table.pluralize(Unit::Year, 3), "3 Jahre");
        assert_eq!(table.delimiter, " ");
        assert_eq!(table.nodiff, "");
    }

    #[test]
    fn default_matches_builtin_table() {
        assert_eq!(&StringTable::default(), StringTable::german());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = StringTable::from_json_str("{ \"day\": 3 }").unwrap_err();
        assert!(matches!(err, Error::StringTable(_)));
    }
}
