//! Lunar phase search: mean-lunation estimate plus elongation refinement.
//!
//! The mean new-moon polynomial puts the estimate within a fraction of a
//! day of the true event; refinement minimizes the offset of the observed
//! Moon − Sun elongation from the phase's target angle. Nutation cancels
//! out of the elongation, so only solar aberration enters.

use std::f64::consts::TAU;

use orrery_core::position::{aberration_correction, sun_position};
use orrery_core::{lunar_longitude, TermSource};
use orrery_time::{Jd, Tt};

use crate::error::SearchError;
use crate::golden::find_minimum;
use crate::lunar_phase_types::{LunarPhaseEvent, Phase, PhaseSearchConfig};
use crate::search_util::signed_angle_difference;

/// Mean length of the synodic month, days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_861;

/// Mean new moon nearest J2000 (2000 January 6), JD TT.
const FIRST_LUNATION_JD: f64 = 2_451_550.097_66;

/// Residual above which the refined instant is treated as having missed
/// the requested quarter and the window is re-centered, radians.
const RECENTER_RESIDUAL: f64 = 1e-3;

/// Mean phase instant for a fractional lunation index `k` (integer k is a
/// new moon, k + 0.25 first quarter, and so on).
fn mean_phase_jd(k: f64) -> f64 {
    let t = k / 1236.85;
    FIRST_LUNATION_JD
        + MEAN_SYNODIC_MONTH * k
        + (0.000_154_37 + (-0.000_000_150 + 0.000_000_000_73 * t) * t) * t * t
}

/// Moon − Sun elongation in [0, 2π).
fn elongation<S: TermSource>(source: &S, jd_tt: Jd<Tt>) -> Result<f64, SearchError> {
    let moon = lunar_longitude(jd_tt)?;
    let sun = sun_position(source, jd_tt)?;
    let sun_longitude = sun.longitude + aberration_correction(sun.radius);
    Ok((moon - sun_longitude).rem_euclid(TAU))
}

fn refine<S: TermSource>(
    source: &S,
    phase: Phase,
    lunation: i32,
    config: &PhaseSearchConfig,
) -> Result<LunarPhaseEvent, SearchError> {
    let k = f64::from(lunation) + f64::from(phase.quarter()) / 4.0;
    let target = phase.target_elongation();
    let objective = |jd: f64| {
        Ok(signed_angle_difference(elongation(source, Jd::new(jd))?, target).abs())
    };

    let mut center = mean_phase_jd(k);
    let mut minimum = find_minimum(
        objective,
        center - config.window_days,
        center + config.window_days,
        config.tolerance_days,
    )?;
    if minimum.value > RECENTER_RESIDUAL {
        // The event sat at the window edge; run once more around it.
        center = minimum.argmin;
        minimum = find_minimum(
            objective,
            center - config.window_days,
            center + config.window_days,
            config.tolerance_days,
        )?;
    }
    Ok(LunarPhaseEvent {
        jd_tt: Jd::new(minimum.argmin),
        phase,
        lunation,
    })
}

fn lunation_index(phase: Phase, jd_tt: Jd<Tt>) -> f64 {
    (jd_tt.value() - FIRST_LUNATION_JD) / MEAN_SYNODIC_MONTH - f64::from(phase.quarter()) / 4.0
}

fn checked_start(jd_tt: Jd<Tt>, config: &PhaseSearchConfig) -> Result<(), SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd_tt.is_finite() {
        return Err(SearchError::InvalidConfig("start epoch must be finite"));
    }
    Ok(())
}

/// The phase event of the requested kind closest to `jd_tt`.
pub fn nearest_phase<S: TermSource>(
    source: &S,
    phase: Phase,
    jd_tt: Jd<Tt>,
    config: &PhaseSearchConfig,
) -> Result<LunarPhaseEvent, SearchError> {
    checked_start(jd_tt, config)?;
    let lunation = lunation_index(phase, jd_tt).round() as i32;
    refine(source, phase, lunation, config)
}

/// The first phase event of the requested kind strictly after `jd_tt`.
pub fn next_phase<S: TermSource>(
    source: &S,
    phase: Phase,
    jd_tt: Jd<Tt>,
    config: &PhaseSearchConfig,
) -> Result<LunarPhaseEvent, SearchError> {
    checked_start(jd_tt, config)?;
    let base = lunation_index(phase, jd_tt).floor() as i32;
    for lunation in base..=base + 2 {
        let event = refine(source, phase, lunation, config)?;
        if event.jd_tt.value() > jd_tt.value() {
            return Ok(event);
        }
    }
    Err(SearchError::InvalidConfig("no upcoming phase in scan range"))
}

/// The last phase event of the requested kind strictly before `jd_tt`.
pub fn prev_phase<S: TermSource>(
    source: &S,
    phase: Phase,
    jd_tt: Jd<Tt>,
    config: &PhaseSearchConfig,
) -> Result<LunarPhaseEvent, SearchError> {
    checked_start(jd_tt, config)?;
    let base = lunation_index(phase, jd_tt).ceil() as i32;
    for lunation in (base - 2..=base).rev() {
        let event = refine(source, phase, lunation, config)?;
        if event.jd_tt.value() < jd_tt.value() {
            return Ok(event);
        }
    }
    Err(SearchError::InvalidConfig("no preceding phase in scan range"))
}

/// All phase events of the requested kind in `[start, end]`, in order.
pub fn search_phases<S: TermSource>(
    source: &S,
    phase: Phase,
    start: Jd<Tt>,
    end: Jd<Tt>,
    config: &PhaseSearchConfig,
) -> Result<Vec<LunarPhaseEvent>, SearchError> {
    checked_start(start, config)?;
    if !end.is_finite() || end.value() <= start.value() {
        return Err(SearchError::InvalidConfig("end must follow start"));
    }
    let first = lunation_index(phase, start).floor() as i32 - 1;
    let last = lunation_index(phase, end).ceil() as i32 + 1;
    let mut events = Vec::new();
    for lunation in first..=last {
        let event = refine(source, phase, lunation, config)?;
        if event.jd_tt.value() >= start.value() && event.jd_tt.value() <= end.value() {
            events.push(event);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::ReferenceTables;

    #[test]
    fn mean_polynomial_at_k0() {
        assert!((mean_phase_jd(0.0) - FIRST_LUNATION_JD).abs() < 1e-9);
    }

    #[test]
    fn lunation_zero_new_moon() {
        // 2000 Jan 6 ~18:14 TT.
        let event = nearest_phase(
            &ReferenceTables,
            Phase::New,
            Jd::new(2_451_550.0),
            &PhaseSearchConfig::default(),
        )
        .unwrap();
        assert_eq!(event.lunation, 0);
        assert!(
            (event.jd_tt.value() - 2_451_550.26).abs() < 0.05,
            "got {}",
            event.jd_tt
        );
    }

    #[test]
    fn refined_event_hits_target_elongation() {
        let config = PhaseSearchConfig::default();
        for phase in Phase::ALL {
            let event =
                nearest_phase(&ReferenceTables, phase, Jd::new(2_451_545.0), &config).unwrap();
            let e = elongation(&ReferenceTables, event.jd_tt).unwrap();
            let off = signed_angle_difference(e, phase.target_elongation()).abs();
            assert!(off < 1e-5, "{phase}: offset {off}");
        }
    }

    #[test]
    fn next_is_after_prev_is_before() {
        let config = PhaseSearchConfig::default();
        let jd = Jd::new(2_460_000.0);
        let next = next_phase(&ReferenceTables, Phase::Full, jd, &config).unwrap();
        let prev = prev_phase(&ReferenceTables, Phase::Full, jd, &config).unwrap();
        assert!(next.jd_tt.value() > jd.value());
        assert!(prev.jd_tt.value() < jd.value());
        let gap = next.jd_tt.value() - prev.jd_tt.value();
        assert!(
            (gap - MEAN_SYNODIC_MONTH).abs() < 1.0,
            "gap {gap} days"
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let config = PhaseSearchConfig {
            window_days: -1.0,
            tolerance_days: 1e-6,
        };
        assert!(matches!(
            nearest_phase(&ReferenceTables, Phase::New, Jd::new(2_451_545.0), &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
