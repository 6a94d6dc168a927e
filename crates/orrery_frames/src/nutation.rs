//! IAU 1980 nutation model (63 lunisolar terms).
//!
//! Computes nutation in longitude (Δψ) and obliquity (Δε), sufficient for
//! ~0.5 mas accuracy over several centuries around J2000.
//!
//! Source: IAU 1980 theory of nutation (Seidelmann 1982), 63-term
//! truncation as tabulated in Meeus, "Astronomical Algorithms", 2nd ed.,
//! chapter 22. Public domain (IAU standard).

use std::f64::consts::TAU;

use orrery_core::series::{argument_series, ArgumentTerm};
use orrery_core::CoreError;
use orrery_time::{julian_centuries, Jd, Tt};

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Table amplitudes are in units of 0.0001 arcsecond.
const TABLE_UNIT_AS: f64 = 1e-4;

/// Nutation components in radians, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude: f64,
    /// Δε, nutation in obliquity.
    pub obliquity: f64,
}

/// Compute the five fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[D, M, M′, F, Ω]` where:
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = mean argument of latitude of the Moon
/// - `Ω`  = mean longitude of the ascending node of the Moon
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    // D: mean elongation of the Moon from the Sun (deg)
    let d = 297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189_474.0;

    // M: mean anomaly of the Sun (deg)
    let m = 357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300_000.0;

    // M': mean anomaly of the Moon (deg)
    let mp = 134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56_250.0;

    // F: mean argument of latitude of the Moon (deg)
    let f = 93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327_270.0;

    // Ω: mean longitude of the ascending node of the Moon (deg)
    let om = 125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450_000.0;

    [d, m, mp, f, om].map(|deg| deg.rem_euclid(360.0).to_radians())
}

const fn nt(
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    psi: f64,
    psi_t: f64,
    eps: f64,
    eps_t: f64,
) -> ArgumentTerm {
    ArgumentTerm {
        multipliers: [d, m, mp, f, om],
        sin_coeff: psi,
        sin_coeff_t: psi_t,
        cos_coeff: eps,
        cos_coeff_t: eps_t,
    }
}

/// IAU 1980 nutation coefficients.
///
/// Each row: argument multipliers of `[D, M, M′, F, Ω]`, then the Δψ sine
/// amplitude `(a, a·T)` and the Δε cosine amplitude `(c, c·T)`, all in
/// 0.0001″.
#[rustfmt::skip]
static NUTATION_TERMS: [ArgumentTerm; 63] = [
    //  D   M  M'   F   Ω        Δψ      Δψ/T       Δε     Δε/T
    nt( 0,  0,  0,  0,  1, -171996.0, -174.2,  92025.0,   8.9),
    nt(-2,  0,  0,  2,  2,  -13187.0,   -1.6,   5736.0,  -3.1),
    nt( 0,  0,  0,  2,  2,   -2274.0,   -0.2,    977.0,  -0.5),
    nt( 0,  0,  0,  0,  2,    2062.0,    0.2,   -895.0,   0.5),
    nt( 0,  1,  0,  0,  0,    1426.0,   -3.4,     54.0,  -0.1),
    nt( 0,  0,  1,  0,  0,     712.0,    0.1,     -7.0,   0.0),
    nt(-2,  1,  0,  2,  2,    -517.0,    1.2,    224.0,  -0.6),
    nt( 0,  0,  0,  2,  1,    -386.0,   -0.4,    200.0,   0.0),
    nt( 0,  0,  1,  2,  2,    -301.0,    0.0,    129.0,  -0.1),
    nt(-2, -1,  0,  2,  2,     217.0,   -0.5,    -95.0,   0.3),
    nt(-2,  0,  1,  0,  0,    -158.0,    0.0,      0.0,   0.0),
    nt(-2,  0,  0,  2,  1,     129.0,    0.1,    -70.0,   0.0),
    nt( 0,  0, -1,  2,  2,     123.0,    0.0,    -53.0,   0.0),
    nt( 2,  0,  0,  0,  0,      63.0,    0.0,      0.0,   0.0),
    nt( 0,  0,  1,  0,  1,      63.0,    0.1,    -33.0,   0.0),
    nt( 2,  0, -1,  2,  2,     -59.0,    0.0,     26.0,   0.0),
    nt( 0,  0, -1,  0,  1,     -58.0,   -0.1,     32.0,   0.0),
    nt( 0,  0,  1,  2,  1,     -51.0,    0.0,     27.0,   0.0),
    nt(-2,  0,  2,  0,  0,      48.0,    0.0,      0.0,   0.0),
    nt( 0,  0, -2,  2,  1,      46.0,    0.0,    -24.0,   0.0),
    nt( 2,  0,  0,  2,  2,     -38.0,    0.0,     16.0,   0.0),
    nt( 0,  0,  2,  2,  2,     -31.0,    0.0,     13.0,   0.0),
    nt( 0,  0,  2,  0,  0,      29.0,    0.0,      0.0,   0.0),
    nt(-2,  0,  1,  2,  2,      29.0,    0.0,    -12.0,   0.0),
    nt( 0,  0,  0,  2,  0,      26.0,    0.0,      0.0,   0.0),
    nt(-2,  0,  0,  2,  0,     -22.0,    0.0,      0.0,   0.0),
    nt( 0,  0, -1,  2,  1,      21.0,    0.0,    -10.0,   0.0),
    nt( 0,  2,  0,  0,  0,      17.0,   -0.1,      0.0,   0.0),
    nt( 2,  0, -1,  0,  1,      16.0,    0.0,     -8.0,   0.0),
    nt(-2,  2,  0,  2,  2,     -16.0,    0.1,      7.0,   0.0),
    nt( 0,  1,  0,  0,  1,     -15.0,    0.0,      9.0,   0.0),
    nt(-2,  0,  1,  0,  1,     -13.0,    0.0,      7.0,   0.0),
    nt( 0, -1,  0,  0,  1,     -12.0,    0.0,      6.0,   0.0),
    nt( 0,  0,  2, -2,  0,      11.0,    0.0,      0.0,   0.0),
    nt( 2,  0, -1,  2,  1,     -10.0,    0.0,      5.0,   0.0),
    nt( 2,  0,  1,  2,  2,      -8.0,    0.0,      3.0,   0.0),
    nt( 0,  1,  0,  2,  2,       7.0,    0.0,     -3.0,   0.0),
    nt(-2,  1,  1,  0,  0,      -7.0,    0.0,      0.0,   0.0),
    nt( 0, -1,  0,  2,  2,      -7.0,    0.0,      3.0,   0.0),
    nt( 2,  0,  0,  2,  1,      -7.0,    0.0,      3.0,   0.0),
    nt( 2,  0,  1,  0,  0,       6.0,    0.0,      0.0,   0.0),
    nt(-2,  0,  2,  2,  2,       6.0,    0.0,     -3.0,   0.0),
    nt(-2,  0,  1,  2,  1,       6.0,    0.0,     -3.0,   0.0),
    nt( 2,  0, -2,  0,  1,      -6.0,    0.0,      3.0,   0.0),
    nt( 2,  0,  0,  0,  1,      -6.0,    0.0,      3.0,   0.0),
    nt( 0, -1,  1,  0,  0,       5.0,    0.0,      0.0,   0.0),
    nt(-2, -1,  0,  2,  1,      -5.0,    0.0,      3.0,   0.0),
    nt(-2,  0,  0,  0,  1,      -5.0,    0.0,      3.0,   0.0),
    nt( 0,  0,  2,  2,  1,      -5.0,    0.0,      3.0,   0.0),
    nt(-2,  0,  2,  0,  1,       4.0,    0.0,      0.0,   0.0),
    nt(-2,  1,  0,  2,  1,       4.0,    0.0,      0.0,   0.0),
    nt( 0,  0,  1, -2,  0,       4.0,    0.0,      0.0,   0.0),
    nt(-1,  0,  1,  0,  0,      -4.0,    0.0,      0.0,   0.0),
    nt(-2,  1,  0,  0,  0,      -4.0,    0.0,      0.0,   0.0),
    nt( 1,  0,  0,  0,  0,      -4.0,    0.0,      0.0,   0.0),
    nt( 0,  0,  1,  2,  0,       3.0,    0.0,      0.0,   0.0),
    nt( 0,  0, -2,  2,  2,      -3.0,    0.0,      0.0,   0.0),
    nt(-1, -1,  1,  0,  0,      -3.0,    0.0,      0.0,   0.0),
    nt( 0,  1,  1,  0,  0,      -3.0,    0.0,      0.0,   0.0),
    nt( 0, -1,  1,  2,  2,      -3.0,    0.0,      0.0,   0.0),
    nt( 2, -1, -1,  2,  2,      -3.0,    0.0,      0.0,   0.0),
    nt( 0,  0,  3,  2,  2,      -3.0,    0.0,      0.0,   0.0),
    nt( 2, -1,  0,  2,  2,      -3.0,    0.0,      0.0,   0.0),
];

/// Nutation in longitude and obliquity at a TT instant.
pub fn nutation(jd_tt: Jd<Tt>) -> Result<Nutation, CoreError> {
    if !jd_tt.is_finite() {
        return Err(CoreError::NonFinite("Julian Date"));
    }
    let t = julian_centuries(jd_tt);
    let arguments = fundamental_arguments(t);
    let (psi, eps) = argument_series(&NUTATION_TERMS, &arguments, t)?;
    Ok(Nutation {
        longitude: psi * TABLE_UNIT_AS * AS2RAD,
        obliquity: eps * TABLE_UNIT_AS * AS2RAD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1987 April 10.0 TT (JD 2446895.5): Δψ = −3″.788, Δε = +9″.443.
    #[test]
    fn nutation_1987_april() {
        let n = nutation(Jd::new(2_446_895.5)).unwrap();
        assert!(
            (n.longitude - (-3.788 * AS2RAD)).abs() < 1e-8,
            "Δψ = {}",
            n.longitude
        );
        assert!(
            (n.obliquity - 9.443 * AS2RAD).abs() < 1e-8,
            "Δε = {}",
            n.obliquity
        );
    }

    #[test]
    fn magnitudes_stay_bounded() {
        // Δψ stays within ±20″, Δε within ±10″, at any modern epoch.
        for year in 0..50 {
            let jd = Jd::new(2_433_282.5 + f64::from(year) * 365.25);
            let n = nutation(jd).unwrap();
            assert!(n.longitude.abs() < 20.0 * AS2RAD, "Δψ = {}", n.longitude);
            assert!(n.obliquity.abs() < 10.0 * AS2RAD, "Δε = {}", n.obliquity);
        }
    }

    #[test]
    fn arguments_at_j2000() {
        let [d, m, mp, f, om] = fundamental_arguments(0.0);
        assert!((d.to_degrees() - 297.85036).abs() < 1e-9);
        assert!((m.to_degrees() - 357.52772).abs() < 1e-9);
        assert!((mp.to_degrees() - 134.96298).abs() < 1e-9);
        assert!((f.to_degrees() - 93.27191).abs() < 1e-9);
        assert!((om.to_degrees() - 125.04452).abs() < 1e-9);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(nutation(Jd::new(f64::NAN)).is_err());
    }
}
