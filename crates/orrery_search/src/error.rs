//! Error types for event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use orrery_core::CoreError;

/// Errors from event search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A search configuration or bracket failed validation.
    InvalidConfig(&'static str),
    /// An underlying ephemeris evaluation failed.
    Core(CoreError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
            Self::Core(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<CoreError> for SearchError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}
