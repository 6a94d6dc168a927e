//! Proleptic Gregorian calendar ↔ Julian Date conversions.
//!
//! The calendar type is `chrono::NaiveDateTime`. The inverse conversion
//! rounds to the nearest millisecond: a single f64 day count has up to
//! ~160 µs of granularity near year 9999, so anything finer than a
//! millisecond is representation noise, not signal.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;
use crate::julian::{Jd, Ut, SECONDS_PER_DAY};

/// Julian Date of proleptic Gregorian 0001-01-01T00:00:00.
pub const GREGORIAN_EPOCH_JD: f64 = 1_721_425.5;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Convert a proleptic Gregorian date/time to a UT Julian Date.
pub fn calendar_to_jd(datetime: NaiveDateTime) -> Jd<Ut> {
    let days = f64::from(datetime.date().num_days_from_ce() - 1);
    let seconds = f64::from(datetime.time().num_seconds_from_midnight())
        + f64::from(datetime.time().nanosecond()) * 1e-9;
    Jd::new(GREGORIAN_EPOCH_JD + days + seconds / SECONDS_PER_DAY)
}

/// Convert a UT Julian Date back to a proleptic Gregorian date/time,
/// rounded to the nearest millisecond.
pub fn jd_to_calendar(jd: Jd<Ut>) -> Result<NaiveDateTime, TimeError> {
    let value = jd.value();
    if !value.is_finite() {
        return Err(TimeError::NonFinite("Julian Date"));
    }
    let millis_total = ((value - GREGORIAN_EPOCH_JD) * SECONDS_PER_DAY * 1e3).round();
    if millis_total.abs() >= 9.2e18 {
        return Err(TimeError::OutOfCalendarRange(value));
    }
    let millis_total = millis_total as i64;
    let day = millis_total.div_euclid(MILLIS_PER_DAY);
    let millis = millis_total.rem_euclid(MILLIS_PER_DAY);

    let days_from_ce =
        i32::try_from(day + 1).map_err(|_| TimeError::OutOfCalendarRange(value))?;
    let date = NaiveDate::from_num_days_from_ce_opt(days_from_ce)
        .ok_or(TimeError::OutOfCalendarRange(value))?;
    let seconds = (millis / 1_000) as u32;
    let nanos = (millis % 1_000) as u32 * 1_000_000;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)
        .ok_or(TimeError::OutOfCalendarRange(value))?;
    Ok(NaiveDateTime::new(date, time))
}

/// Decimal year in the convention the ΔT fit expects:
/// `year + (month − 0.5) / 12`, i.e. each month resolved to its midpoint.
pub fn decimal_year(datetime: NaiveDateTime) -> f64 {
    f64::from(datetime.date().year()) + (f64::from(datetime.date().month()) - 0.5) / 12.0
}

/// Decimal year of a raw Julian Date day count (any scale; month precision
/// is all ΔT needs, so the scale tag is irrelevant here).
pub(crate) fn decimal_year_of_jd_value(jd: f64) -> Result<f64, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite("Julian Date"));
    }
    let day = (jd - GREGORIAN_EPOCH_JD).floor();
    if day.abs() >= 9.0e18 {
        return Err(TimeError::OutOfCalendarRange(jd));
    }
    let days_from_ce =
        i32::try_from(day as i64 + 1).map_err(|_| TimeError::OutOfCalendarRange(jd))?;
    let date = NaiveDate::from_num_days_from_ce_opt(days_from_ce)
        .ok_or(TimeError::OutOfCalendarRange(jd))?;
    Ok(f64::from(date.year()) + (f64::from(date.month()) - 0.5) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn epoch_constant() {
        let jd = calendar_to_jd(datetime(1, 1, 1, 0, 0, 0));
        assert_eq!(jd.value(), GREGORIAN_EPOCH_JD);
    }

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(datetime(2000, 1, 1, 12, 0, 0));
        assert_eq!(jd.value(), 2_451_545.0);
    }

    #[test]
    fn sputnik_launch_jd() {
        // 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(datetime(1957, 10, 4, 19, 26, 24));
        assert!((jd.value() - 2_436_116.31).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn millisecond_roundtrip_near_j2000() {
        let t = datetime(2000, 1, 1, 12, 0, 0)
            .with_nanosecond(1_000_000)
            .unwrap();
        let back = jd_to_calendar(calendar_to_jd(t)).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn roundtrip_far_past_and_future() {
        for t in [
            datetime(1, 6, 15, 3, 4, 5),
            datetime(9999, 12, 31, 23, 59, 59),
        ] {
            assert_eq!(jd_to_calendar(calendar_to_jd(t)).unwrap(), t);
        }
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(
            jd_to_calendar(Jd::new(f64::NAN)),
            Err(TimeError::NonFinite("Julian Date"))
        );
        assert_eq!(
            jd_to_calendar(Jd::new(f64::INFINITY)),
            Err(TimeError::NonFinite("Julian Date"))
        );
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            jd_to_calendar(Jd::new(1e12)),
            Err(TimeError::OutOfCalendarRange(_))
        ));
    }

    #[test]
    fn decimal_year_mid_month() {
        let y = decimal_year(datetime(2000, 1, 15, 0, 0, 0));
        assert!((y - 2000.0416666).abs() < 1e-6, "got {y}");
        let y = decimal_year(datetime(1977, 2, 18, 3, 36, 0));
        assert!((y - 1977.125).abs() < 1e-9, "got {y}");
    }
}
