use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use crate::error::{Error, Result};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date or date-time string into an instant.
///
/// Accepted forms:
///   - `YYYY-MM-DD` (midnight)
///   - `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`
///   - RFC 3339, keeping the local wall-clock time and dropping the offset
pub fn parse_instant(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(zoned.naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(instant);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    trace!(input, "no supported date format matched");
    Err(Error::InvalidInstant {
        input: input.to_string(),
    })
}
