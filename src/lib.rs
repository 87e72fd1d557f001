//! Calendar-aware, human-readable differences between dates.
//!
//! ```
//! use chrono::NaiveDate;
//! use precise_range::PreciseDiff;
//!
//! let joined = NaiveDate::from_ymd_opt(2019, 12, 15).unwrap();
//! let left = NaiveDate::from_ymd_opt(2021, 2, 20).unwrap();
//! assert_eq!(joined.precise_diff(&left), "1 Jahr 2 Monate");
//! ```

pub mod diff;
pub mod error;
pub mod ext;
pub mod logger;
pub mod parse;
pub mod strings;

pub use diff::{precise_diff, precise_diff_with};
pub use error::{Error, Result};
pub use ext::PreciseDiff;
pub use parse::parse_instant;
pub use strings::{StringTable, Unit};
