//! Scale-tagged Julian Dates.
//!
//! A Julian Date is meaningless without knowing which time scale its day
//! count runs in, so `Jd` carries the scale as a zero-sized type parameter.
//! Arithmetic is only defined between instants on the same scale; moving
//! between scales goes through the explicit converters in [`crate::scales`].

use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium.
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Marker trait for the time scale a Julian Date runs in.
pub trait TimeScale: Copy + std::fmt::Debug + 'static {
    /// Short label used in `Display` output, e.g. `"TT"`.
    const LABEL: &'static str;
}

/// Universal Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ut;

/// Terrestrial Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tt;

/// International Atomic Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tai;

impl TimeScale for Ut {
    const LABEL: &'static str = "UT";
}

impl TimeScale for Tt {
    const LABEL: &'static str = "TT";
}

impl TimeScale for Tai {
    const LABEL: &'static str = "TAI";
}

/// A Julian Date on the time scale `S`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Jd<S: TimeScale> {
    days: f64,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Jd<S> {
    /// Wrap a raw day count on scale `S`.
    pub const fn new(days: f64) -> Self {
        Self {
            days,
            _scale: PhantomData,
        }
    }

    /// The raw day count.
    pub const fn value(self) -> f64 {
        self.days
    }

    /// Whether the day count is a finite number.
    pub fn is_finite(self) -> bool {
        self.days.is_finite()
    }
}

impl<S: TimeScale> Add<f64> for Jd<S> {
    type Output = Self;

    fn add(self, days: f64) -> Self {
        Self::new(self.days + days)
    }
}

impl<S: TimeScale> Sub<f64> for Jd<S> {
    type Output = Self;

    fn sub(self, days: f64) -> Self {
        Self::new(self.days - days)
    }
}

impl<S: TimeScale> Sub for Jd<S> {
    type Output = f64;

    /// Elapsed days between two instants on the same scale.
    fn sub(self, other: Self) -> f64 {
        self.days - other.days
    }
}

impl<S: TimeScale> Display for Jd<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD({}) {:.6}", S::LABEL, self.days)
    }
}

/// Julian centuries elapsed since J2000.0 on the TT scale.
pub fn julian_centuries(jd_tt: Jd<Tt>) -> f64 {
    (jd_tt.value() - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian millennia elapsed since J2000.0 on the TT scale.
pub fn julian_millennia(jd_tt: Jd<Tt>) -> f64 {
    (jd_tt.value() - J2000_JD) / DAYS_PER_MILLENNIUM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_scale_arithmetic() {
        let a: Jd<Tt> = Jd::new(2_451_545.0);
        let b = a + 1.5;
        assert_eq!(b.value(), 2_451_546.5);
        assert_eq!(b - a, 1.5);
        assert_eq!((b - 1.5).value(), a.value());
    }

    #[test]
    fn centuries_at_j2000_are_zero() {
        assert_eq!(julian_centuries(Jd::new(J2000_JD)), 0.0);
        assert_eq!(julian_millennia(Jd::new(J2000_JD)), 0.0);
    }

    #[test]
    fn centuries_one_century_later() {
        let t = julian_centuries(Jd::new(J2000_JD + DAYS_PER_CENTURY));
        assert!((t - 1.0).abs() < 1e-15);
    }

    #[test]
    fn display_carries_scale_label() {
        let jd: Jd<Ut> = Jd::new(2_451_545.0);
        assert_eq!(jd.to_string(), "JD(UT) 2451545.000000");
    }
}
