//! Heliocentric planet positions and the derived geocentric Sun.

use std::f64::consts::{PI, TAU};

use orrery_time::{julian_centuries, julian_millennia, Jd, Tt};

use crate::series;
use crate::terms::{PeriodicTerm, TermSource};
use crate::{Body, Coordinate, Coordinates, CoreError};

/// Highest τ power a VSOP87 series carries.
pub const MAX_POWER: u8 = 5;

/// Table amplitudes are in units of 1e-8 rad (angles) and 1e-8 AU (radius).
const VSOP_UNIT: f64 = 1e-8;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// Constant of annual aberration, arcseconds.
const ABERRATION_AS: f64 = 20.4898;

/// Heliocentric ecliptic position of a planet for the mean equinox of date.
///
/// Longitude and latitude come back as raw unwrapped series sums in
/// radians; radius in AU.
pub fn heliocentric_position<S: TermSource>(
    source: &S,
    body: Body,
    jd_tt: Jd<Tt>,
) -> Result<Coordinates, CoreError> {
    if !jd_tt.is_finite() {
        return Err(CoreError::NonFinite("Julian Date"));
    }
    let tau = julian_millennia(jd_tt);
    let mut values = [0.0_f64; 3];
    for (slot, coordinate) in values.iter_mut().zip(Coordinate::ALL) {
        let mut sets: [&[PeriodicTerm]; (MAX_POWER + 1) as usize] = [&[]; 6];
        let mut count = 0;
        for power in 0..=MAX_POWER {
            match source.term_set(body, coordinate, power) {
                Some(set) => {
                    sets[count] = set;
                    count += 1;
                }
                None if power == 0 => {
                    return Err(CoreError::MissingTermSet {
                        body,
                        coordinate,
                        power,
                    });
                }
                None => break,
            }
        }
        *slot = series::power_series(&sets[..count], tau)? * VSOP_UNIT;
    }
    Ok(Coordinates {
        longitude: values[0],
        latitude: values[1],
        radius: values[2],
    })
}

/// Geometric geocentric position of the Sun, from Earth's heliocentric
/// position: longitude + π, latitude negated, radius unchanged.
pub fn sun_position<S: TermSource>(source: &S, jd_tt: Jd<Tt>) -> Result<Coordinates, CoreError> {
    let earth = heliocentric_position(source, Body::Earth, jd_tt)?;
    Ok(Coordinates {
        longitude: earth.longitude + PI,
        latitude: -earth.latitude,
        radius: earth.radius,
    })
}

/// Correction from the VSOP dynamical ecliptic to the FK5 frame.
///
/// Returns `(Δλ, Δβ)` in radians; both are a fraction of an arcsecond.
pub fn fk5_correction(jd_tt: Jd<Tt>, longitude: f64, latitude: f64) -> (f64, f64) {
    let t = julian_centuries(jd_tt);
    let lp = longitude - (1.397 + 0.00031 * t) * t * PI / 180.0;
    let dl = (-0.09033 + 0.03916 * (lp.cos() + lp.sin()) * latitude.tan()) * AS2RAD;
    let db = 0.03916 * (lp.cos() - lp.sin()) * AS2RAD;
    (dl, db)
}

/// Annual aberration in solar longitude for a given Sun distance, radians.
/// Always negative: aberration displaces the Sun backwards along the
/// ecliptic.
pub fn aberration_correction(radius_au: f64) -> f64 {
    -ABERRATION_AS * AS2RAD / radius_au
}

/// Apparent solar longitude: geometric Sun corrected to FK5, plus nutation
/// in longitude (supplied by the caller's nutation model) and aberration.
pub fn apparent_sun_longitude<S: TermSource>(
    source: &S,
    jd_tt: Jd<Tt>,
    nutation_longitude: f64,
) -> Result<f64, CoreError> {
    if !nutation_longitude.is_finite() {
        return Err(CoreError::NonFinite("nutation"));
    }
    let sun = sun_position(source, jd_tt)?;
    let (dl, _) = fk5_correction(jd_tt, sun.longitude, sun.latitude);
    Ok(sun.longitude + dl + nutation_longitude + aberration_correction(sun.radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::ReferenceTables;

    #[test]
    fn non_finite_epoch_rejected() {
        let err = heliocentric_position(&ReferenceTables, Body::Earth, Jd::new(f64::NAN));
        assert_eq!(err, Err(CoreError::NonFinite("Julian Date")));
    }

    #[test]
    fn missing_body_reports_slot() {
        let err = heliocentric_position(&ReferenceTables, Body::Mars, Jd::new(2_451_545.0));
        assert_eq!(
            err,
            Err(CoreError::MissingTermSet {
                body: Body::Mars,
                coordinate: Coordinate::Longitude,
                power: 0,
            })
        );
    }

    #[test]
    fn sun_is_earth_mirrored() {
        let jd = Jd::new(2_451_545.0);
        let earth = heliocentric_position(&ReferenceTables, Body::Earth, jd).unwrap();
        let sun = sun_position(&ReferenceTables, jd).unwrap();
        assert_eq!(sun.longitude, earth.longitude + PI);
        assert_eq!(sun.latitude, -earth.latitude);
        assert_eq!(sun.radius, earth.radius);
    }

    #[test]
    fn aberration_magnitude() {
        let da = aberration_correction(1.0);
        assert!((da + 20.4898 * AS2RAD).abs() < 1e-15);
        assert!(aberration_correction(0.5) < da);
    }

    #[test]
    fn fk5_longitude_correction_is_small() {
        let (dl, db) = fk5_correction(Jd::new(2_448_908.5), 3.489, 0.0);
        assert!((dl + 0.09033 * AS2RAD).abs() < 0.001 * AS2RAD, "got {dl}");
        assert!(db.abs() < 0.05 * AS2RAD);
    }
}
