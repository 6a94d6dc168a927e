//! Equinox and solstice search: mean polynomial estimate plus refinement
//! against the apparent solar longitude.
//!
//! The mean instants are quartic fits in millennia; the periodic wobble
//! they ignore is well under a day, so a ±1 day bracket always holds the
//! true crossing. The objective folds in nutation, the FK5 frame
//! correction, and aberration, matching the apparent longitude the
//! markers are defined on.
//!
//! Mean-instant fits: Meeus, "Astronomical Algorithms", 2nd ed.,
//! chapter 27 (tables 27.A and 27.B).

use std::f64::consts::TAU;

use orrery_core::position::apparent_sun_longitude;
use orrery_core::TermSource;
use orrery_frames::nutation;
use orrery_time::{Jd, Tt};

use crate::error::SearchError;
use crate::golden::find_minimum;
use crate::search_util::signed_angle_difference;
use crate::season_types::{SeasonSearchConfig, SeasonalMarker, SeasonalMarkerEvent};

/// Mean marker instant, JD TT. Quartic fits anchored at year 2000 for
/// years 1000..3000 and at year 0 before that.
fn mean_marker_jd(year: i32, marker: SeasonalMarker) -> f64 {
    if year >= 1000 {
        let y = f64::from(year - 2000) / 1000.0;
        let c: [f64; 5] = match marker {
            SeasonalMarker::MarchEquinox => {
                [2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57]
            }
            SeasonalMarker::JuneSolstice => {
                [2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30]
            }
            SeasonalMarker::SeptemberEquinox => {
                [2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78]
            }
            SeasonalMarker::DecemberSolstice => {
                [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32]
            }
        };
        c.iter().rev().fold(0.0, |acc, k| acc * y + k)
    } else {
        let y = f64::from(year) / 1000.0;
        let c: [f64; 5] = match marker {
            SeasonalMarker::MarchEquinox => {
                [1_721_139.291_89, 365_242.137_40, 0.061_34, 0.001_11, -0.000_71]
            }
            SeasonalMarker::JuneSolstice => {
                [1_721_233.254_01, 365_241.725_62, -0.053_23, 0.009_07, 0.000_25]
            }
            SeasonalMarker::SeptemberEquinox => {
                [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97, 0.000_74]
            }
            SeasonalMarker::DecemberSolstice => {
                [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06]
            }
        };
        c.iter().rev().fold(0.0, |acc, k| acc * y + k)
    }
}

fn apparent_longitude<S: TermSource>(source: &S, jd_tt: Jd<Tt>) -> Result<f64, SearchError> {
    let n = nutation(jd_tt)?;
    Ok(apparent_sun_longitude(source, jd_tt, n.longitude)?.rem_euclid(TAU))
}

/// Locate one equinox or solstice of a calendar year.
pub fn seasonal_marker<S: TermSource>(
    source: &S,
    year: i32,
    marker: SeasonalMarker,
    config: &SeasonSearchConfig,
) -> Result<SeasonalMarkerEvent, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let target = marker.target_longitude();
    let estimate = mean_marker_jd(year, marker);
    let minimum = find_minimum(
        |jd| Ok(signed_angle_difference(apparent_longitude(source, Jd::new(jd))?, target).abs()),
        estimate - config.window_days,
        estimate + config.window_days,
        config.tolerance_days,
    )?;
    let jd_tt = Jd::new(minimum.argmin);
    Ok(SeasonalMarkerEvent {
        jd_tt,
        marker,
        solar_longitude: apparent_longitude(source, jd_tt)?,
    })
}

/// All four markers for each year in `[first_year, last_year]`, in
/// chronological order.
pub fn search_seasonal_markers<S: TermSource>(
    source: &S,
    first_year: i32,
    last_year: i32,
    config: &SeasonSearchConfig,
) -> Result<Vec<SeasonalMarkerEvent>, SearchError> {
    if last_year < first_year {
        return Err(SearchError::InvalidConfig("year range is empty"));
    }
    let mut events = Vec::with_capacity(4 * (last_year - first_year + 1) as usize);
    for year in first_year..=last_year {
        for marker in SeasonalMarker::ALL {
            events.push(seasonal_marker(source, year, marker, config)?);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::ReferenceTables;

    #[test]
    fn mean_fit_march_2000() {
        let jd = mean_marker_jd(2000, SeasonalMarker::MarchEquinox);
        assert!((jd - 2_451_623.809_84).abs() < 1e-6);
    }

    #[test]
    fn mean_fit_ancient_anchor() {
        // Year 0 falls back to the early fit's constant term.
        let jd = mean_marker_jd(0, SeasonalMarker::DecemberSolstice);
        assert!((jd - 1_721_414.399_87).abs() < 1e-6);
    }

    #[test]
    fn event_longitude_matches_target() {
        let config = SeasonSearchConfig::default();
        for marker in SeasonalMarker::ALL {
            let event = seasonal_marker(&ReferenceTables, 2024, marker, &config).unwrap();
            let off =
                signed_angle_difference(event.solar_longitude, marker.target_longitude()).abs();
            assert!(off < 1e-6, "{marker}: offset {off}");
        }
    }

    #[test]
    fn markers_of_a_year_are_ordered() {
        let events =
            search_seasonal_markers(&ReferenceTables, 2023, 2024, &SeasonSearchConfig::default())
                .unwrap();
        assert_eq!(events.len(), 8);
        for pair in events.windows(2) {
            assert!(pair[0].jd_tt.value() < pair[1].jd_tt.value());
        }
    }

    #[test]
    fn empty_year_range_rejected() {
        assert!(search_seasonal_markers(
            &ReferenceTables,
            2024,
            2023,
            &SeasonSearchConfig::default()
        )
        .is_err());
    }
}
