//! Error types for time-scale and calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion or time-scale movement.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// An input value was NaN or infinite.
    NonFinite(&'static str),
    /// A Julian Date falls outside the representable calendar range.
    OutOfCalendarRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::OutOfCalendarRange(jd) => {
                write!(f, "JD {jd} is outside the supported calendar range")
            }
        }
    }
}

impl Error for TimeError {}
