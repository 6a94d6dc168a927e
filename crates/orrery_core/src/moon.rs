//! Geocentric lunar longitude.
//!
//! Truncated ELP-2000/82 longitude series: the 59 main periodic terms plus
//! the Venus, Jupiter and flattening additives, good to about 10″.
//! Mean-equinox-of-date, without nutation; callers needing the apparent
//! longitude add their nutation model's Δψ.
//!
//! Source: Chapront-Touzé & Chapront, ELP-2000/82, as truncated in Meeus,
//! "Astronomical Algorithms", 2nd ed., chapter 47.

use std::f64::consts::TAU;

use orrery_time::{julian_centuries, Jd, Tt};

use crate::CoreError;

/// One longitude term: `amplitude · eⁿ · sin(d·D + m·M + mp·M′ + f·F)`,
/// amplitude in 1e-6 degree, n = |m|.
struct MoonTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    amplitude: f64,
}

const fn mt(d: i8, m: i8, mp: i8, f: i8, amplitude: f64) -> MoonTerm {
    MoonTerm {
        d,
        m,
        mp,
        f,
        amplitude,
    }
}

#[rustfmt::skip]
static LONGITUDE_TERMS: [MoonTerm; 59] = [
    mt(0, 0, 1, 0, 6288774.0),
    mt(2, 0, -1, 0, 1274027.0),
    mt(2, 0, 0, 0, 658314.0),
    mt(0, 0, 2, 0, 213618.0),
    mt(0, 1, 0, 0, -185116.0),
    mt(0, 0, 0, 2, -114332.0),
    mt(2, 0, -2, 0, 58793.0),
    mt(2, -1, -1, 0, 57066.0),
    mt(2, 0, 1, 0, 53322.0),
    mt(2, -1, 0, 0, 45758.0),
    mt(0, 1, -1, 0, -40923.0),
    mt(1, 0, 0, 0, -34720.0),
    mt(0, 1, 1, 0, -30383.0),
    mt(2, 0, 0, -2, 15327.0),
    mt(0, 0, 1, 2, -12528.0),
    mt(0, 0, 1, -2, 10980.0),
    mt(4, 0, -1, 0, 10675.0),
    mt(0, 0, 3, 0, 10034.0),
    mt(4, 0, -2, 0, 8548.0),
    mt(2, 1, -1, 0, -7888.0),
    mt(2, 1, 0, 0, -6766.0),
    mt(1, 0, -1, 0, -5163.0),
    mt(1, 1, 0, 0, 4987.0),
    mt(2, -1, 1, 0, 4036.0),
    mt(2, 0, 2, 0, 3994.0),
    mt(4, 0, 0, 0, 3861.0),
    mt(2, 0, -3, 0, 3665.0),
    mt(0, 1, -2, 0, -2689.0),
    mt(2, 0, -1, 2, -2602.0),
    mt(2, -1, -2, 0, 2390.0),
    mt(1, 0, 1, 0, -2348.0),
    mt(2, -2, 0, 0, 2236.0),
    mt(0, 1, 2, 0, -2120.0),
    mt(0, 2, 0, 0, -2069.0),
    mt(2, -2, -1, 0, 2048.0),
    mt(2, 0, 1, -2, -1773.0),
    mt(2, 0, 0, 2, -1595.0),
    mt(4, -1, -1, 0, 1215.0),
    mt(0, 0, 2, 2, -1110.0),
    mt(3, 0, -1, 0, -892.0),
    mt(2, 1, 1, 0, -810.0),
    mt(4, -1, -2, 0, 759.0),
    mt(0, 2, -1, 0, -713.0),
    mt(2, 2, -1, 0, -700.0),
    mt(2, 1, -2, 0, 691.0),
    mt(2, -1, 0, -2, 596.0),
    mt(4, 0, 1, 0, 549.0),
    mt(0, 0, 4, 0, 537.0),
    mt(4, -1, 0, 0, 520.0),
    mt(1, 0, -2, 0, -487.0),
    mt(2, 1, 0, -2, -399.0),
    mt(0, 0, 2, -2, -381.0),
    mt(1, 1, 1, 0, 351.0),
    mt(3, 0, -2, 0, -340.0),
    mt(4, 0, -3, 0, 330.0),
    mt(2, -1, 2, 0, 327.0),
    mt(0, 2, 1, 0, -323.0),
    mt(1, 1, -1, 0, 299.0),
    mt(2, 0, 3, 0, 294.0),
];

/// Geocentric lunar longitude for the mean equinox of date, radians,
/// normalized to [0, 2π).
pub fn lunar_longitude(jd_tt: Jd<Tt>) -> Result<f64, CoreError> {
    if !jd_tt.is_finite() {
        return Err(CoreError::NonFinite("Julian Date"));
    }
    let c = julian_centuries(jd_tt);
    let c2 = c * c;
    let c3 = c2 * c;
    let c4 = c3 * c;

    // Mean elements in degrees.
    let lp = 218.3164477 + 481267.88123421 * c - 0.0015786 * c2 + c3 / 538_841.0
        - c4 / 65_194_000.0;
    let d = 297.85019021 + 445267.1114034 * c - 0.0018819 * c2 + c3 / 545_868.0
        - c4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * c - 0.0001536 * c2 + c3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * c + 0.0087414 * c2 + c3 / 69_699.0
        - c4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * c - 0.0036539 * c2 - c3 / 3_526_000.0
        + c4 / 863_310_000.0;

    // Eccentricity factor applied once per power of M in the argument.
    let e = 1.0 - 0.002516 * c - 0.0000074 * c2;

    let mut sum = 0.0;
    for term in &LONGITUDE_TERMS {
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m
            + f64::from(term.mp) * mp
            + f64::from(term.f) * f)
            .to_radians();
        sum += term.amplitude * e.powi(i32::from(term.m.abs())) * arg.sin();
    }
    sum += 3958.0 * (119.75 + 131.849 * c).to_radians().sin()
        + 1962.0 * (lp - f).to_radians().sin()
        + 318.0 * (53.09 + 479_264.29 * c).to_radians().sin();

    Ok((lp + sum * 1e-6).to_radians().rem_euclid(TAU))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1992 April 12.0 TD: geometric λ = 133°.162655 (apparent is 16.595″
    /// further along once nutation is added).
    #[test]
    fn longitude_1992_april() {
        let lon = lunar_longitude(Jd::new(2_448_724.5)).unwrap();
        let expected = 133.162_655_f64.to_radians();
        assert!((lon - expected).abs() < 1e-5, "got {lon}, want {expected}");
    }

    #[test]
    fn longitude_is_normalized() {
        for jd in [2_415_020.5, 2_443_192.6, 2_451_545.0, 2_469_000.25] {
            let lon = lunar_longitude(Jd::new(jd)).unwrap();
            assert!((0.0..TAU).contains(&lon), "JD {jd}: {lon}");
        }
    }

    #[test]
    fn non_finite_rejected() {
        assert!(lunar_longitude(Jd::new(f64::NAN)).is_err());
    }

    #[test]
    fn mean_daily_motion() {
        // The Moon advances a bit over 13° per day.
        let a = lunar_longitude(Jd::new(2_451_545.0)).unwrap();
        let b = lunar_longitude(Jd::new(2_451_545.0 + 0.01)).unwrap();
        let rate = (b - a).rem_euclid(TAU) / 0.01;
        assert!((0.20..0.26).contains(&rate), "rate {rate} rad/day");
    }
}
