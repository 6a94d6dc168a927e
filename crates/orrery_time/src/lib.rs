//! Time scales for ephemeris work: Julian Dates, ΔT, and calendar conversion.
//!
//! This crate provides:
//! - A scale-tagged Julian Date type (`Jd<Ut>`, `Jd<Tt>`, `Jd<Tai>`)
//! - Proleptic Gregorian calendar ↔ Julian Date conversions
//! - The NASA piecewise-polynomial ΔT model (−500 to +2150 and beyond)
//! - UT ↔ TT ↔ TAI conversion chain

pub mod calendar;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod scales;

pub use calendar::{calendar_to_jd, decimal_year, jd_to_calendar, GREGORIAN_EPOCH_JD};
pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{
    julian_centuries, julian_millennia, Jd, Tai, TimeScale, Tt, Ut, J2000_JD, SECONDS_PER_DAY,
};
pub use scales::{tai_to_tt, tt_to_tai, tt_to_ut, ut_to_tt, TT_MINUS_TAI_SECONDS};
