//! Golden values for the bundled VSOP87D tables.
//!
//! Reference values computed from the same truncated series by Meeus
//! ("Astronomical Algorithms", 2nd ed., examples 25.b and 33.a).

use std::f64::consts::TAU;

use orrery_core::{heliocentric_position, sun_position, Body, ReferenceTables};
use orrery_time::Jd;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// Venus on 1992 December 20.0 TD (JD 2448976.5).
///
/// The raw series sums, before any angle normalization: the longitude
/// accumulates about −11 full turns of mean motion since J2000.
#[test]
fn venus_1992_december() {
    let jd = Jd::new(2_448_976.5);
    let venus = heliocentric_position(&ReferenceTables, Body::Venus, jd).unwrap();

    assert!(
        (venus.longitude - (-68.659_258_2)).abs() < 1e-5,
        "L = {}",
        venus.longitude
    );
    assert!(
        (venus.latitude - (-0.045_739_9)).abs() < 1e-5,
        "B = {}",
        venus.latitude
    );
    assert!(
        (venus.radius - 0.724_603).abs() < 1e-5,
        "R = {}",
        venus.radius
    );

    // Wrapped, that longitude is 26°.11428.
    let wrapped = venus.longitude.rem_euclid(TAU).to_degrees();
    assert!((wrapped - 26.11428).abs() < 1e-3, "wrapped = {wrapped}");
}

/// The Sun on 1992 October 13.0 TD (JD 2448908.5): geometric geocentric
/// longitude 199°.907347, latitude +0″.62, radius 0.99760775 AU.
#[test]
fn sun_1992_october() {
    let jd = Jd::new(2_448_908.5);
    let sun = sun_position(&ReferenceTables, jd).unwrap();

    let lon = sun.longitude.rem_euclid(TAU).to_degrees();
    assert!((lon - 199.907_347).abs() < 2e-3, "lon = {lon}");
    assert!((sun.latitude - 0.62 * AS2RAD).abs() < 3e-6, "lat = {}", sun.latitude);
    assert!((sun.radius - 0.997_607_75).abs() < 1e-5, "R = {}", sun.radius);
}

/// Earth's heliocentric distance stays within the orbit's eccentricity
/// band across a full year.
#[test]
fn earth_radius_annual_band() {
    for day in 0..=365 {
        let jd = Jd::new(2_451_545.0 + f64::from(day));
        let earth = heliocentric_position(&ReferenceTables, Body::Earth, jd).unwrap();
        assert!(
            (0.983..1.017).contains(&earth.radius),
            "day {day}: R = {}",
            earth.radius
        );
    }
}
