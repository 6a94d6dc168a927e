//! UT ↔ TT ↔ TAI conversion chain.

use crate::calendar::decimal_year_of_jd_value;
use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{Jd, Tai, Tt, Ut, SECONDS_PER_DAY};

/// TT runs ahead of TAI by a fixed 32.184 s.
pub const TT_MINUS_TAI_SECONDS: f64 = 32.184;

/// Universal Time to Terrestrial Time: TT = UT + ΔT.
pub fn ut_to_tt(jd_ut: Jd<Ut>) -> Result<Jd<Tt>, TimeError> {
    if !jd_ut.is_finite() {
        return Err(TimeError::NonFinite("Julian Date"));
    }
    let year = decimal_year_of_jd_value(jd_ut.value())?;
    Ok(Jd::new(jd_ut.value() + delta_t_seconds(year) / SECONDS_PER_DAY))
}

/// Terrestrial Time to Universal Time: UT = TT − ΔT.
///
/// ΔT is looked up at the TT-derived year rather than iterated to a fixed
/// point; ΔT varies by far less than a second across any ΔT-sized offset,
/// so the approximation stays well inside the model's own accuracy.
pub fn tt_to_ut(jd_tt: Jd<Tt>) -> Result<Jd<Ut>, TimeError> {
    if !jd_tt.is_finite() {
        return Err(TimeError::NonFinite("Julian Date"));
    }
    let year = decimal_year_of_jd_value(jd_tt.value())?;
    Ok(Jd::new(jd_tt.value() - delta_t_seconds(year) / SECONDS_PER_DAY))
}

/// Terrestrial Time to International Atomic Time.
pub fn tt_to_tai(jd_tt: Jd<Tt>) -> Result<Jd<Tai>, TimeError> {
    if !jd_tt.is_finite() {
        return Err(TimeError::NonFinite("Julian Date"));
    }
    Ok(Jd::new(jd_tt.value() - TT_MINUS_TAI_SECONDS / SECONDS_PER_DAY))
}

/// International Atomic Time to Terrestrial Time.
pub fn tai_to_tt(jd_tai: Jd<Tai>) -> Result<Jd<Tt>, TimeError> {
    if !jd_tai.is_finite() {
        return Err(TimeError::NonFinite("Julian Date"));
    }
    Ok(Jd::new(jd_tai.value() + TT_MINUS_TAI_SECONDS / SECONDS_PER_DAY))
}
