//! Apside search: mean-element estimate plus radius refinement.
//!
//! Mean perihelion passages follow `JDE = epoch + period·k (+ quad·k²)`
//! with integer cycle index k; k + 0.5 lands on the intervening aphelion.
//! Refinement minimizes the signed heliocentric distance inside a bracket
//! of an eighth of a period, wide enough to absorb the multi-day wobble
//! the mean elements ignore and narrow enough to hold a single extremum.
//!
//! Mean-element polynomials: Chapront & Chapront-Touzé fits (as tabulated
//! in Meeus, "Astronomical Algorithms", 2nd ed., chapter 38).

use orrery_core::{heliocentric_position, Body, TermSource};
use orrery_time::{Jd, Tt, J2000_JD};

use crate::apside_types::{ApsideEvent, ApsideKind, ApsideSearchConfig};
use crate::error::SearchError;
use crate::golden::find_minimum;

/// Mean apside progression for one body.
struct MeanOrbit {
    /// JDE of the k = 0 perihelion passage.
    epoch_jd: f64,
    /// Mean anomalistic period, days.
    period_days: f64,
    /// Quadratic drift coefficient, days per k².
    quadratic: f64,
    /// Decimal year of the k = 0 passage.
    epoch_year: f64,
    /// Perihelion passages per Julian year.
    cycles_per_year: f64,
}

const fn mean_orbit(body: Body) -> MeanOrbit {
    match body {
        Body::Mercury => MeanOrbit {
            epoch_jd: 2_451_590.257,
            period_days: 87.969_349_63,
            quadratic: 0.0,
            epoch_year: 2000.12,
            cycles_per_year: 4.152_01,
        },
        Body::Venus => MeanOrbit {
            epoch_jd: 2_451_738.233,
            period_days: 224.700_818_8,
            quadratic: -0.000_000_032_7,
            epoch_year: 2000.53,
            cycles_per_year: 1.625_49,
        },
        Body::Earth => MeanOrbit {
            epoch_jd: 2_451_547.507,
            period_days: 365.259_635_8,
            quadratic: 0.000_000_015_6,
            epoch_year: 2000.01,
            cycles_per_year: 0.999_97,
        },
        Body::Mars => MeanOrbit {
            epoch_jd: 2_452_195.026,
            period_days: 686.995_785_7,
            quadratic: -0.000_000_118_7,
            epoch_year: 2001.78,
            cycles_per_year: 0.531_66,
        },
        Body::Jupiter => MeanOrbit {
            epoch_jd: 2_455_636.936,
            period_days: 4_332.897_065,
            quadratic: 0.000_136_7,
            epoch_year: 2011.20,
            cycles_per_year: 0.084_30,
        },
        Body::Saturn => MeanOrbit {
            epoch_jd: 2_452_830.12,
            period_days: 10_764.216_76,
            quadratic: 0.000_827,
            epoch_year: 2003.52,
            cycles_per_year: 0.033_93,
        },
        Body::Uranus => MeanOrbit {
            epoch_jd: 2_470_213.5,
            period_days: 30_694.876_7,
            quadratic: -0.005_41,
            epoch_year: 2051.1,
            cycles_per_year: 0.011_90,
        },
        Body::Neptune => MeanOrbit {
            epoch_jd: 2_468_895.1,
            period_days: 60_190.33,
            quadratic: 0.034_29,
            epoch_year: 2047.5,
            cycles_per_year: 0.006_07,
        },
    }
}

fn cycle_index(orbit: &MeanOrbit, kind: ApsideKind, year: f64) -> f64 {
    let cycles = (year - orbit.epoch_year) * orbit.cycles_per_year;
    match kind {
        ApsideKind::Periapsis => cycles.round(),
        ApsideKind::Apoapsis => (cycles - 0.5).round() + 0.5,
    }
}

fn mean_apside_jd(orbit: &MeanOrbit, k: f64) -> f64 {
    orbit.epoch_jd + orbit.period_days * k + orbit.quadratic * k * k
}

/// Mean-element estimate of the apside nearest a decimal year. Exact only
/// to within a few days for the inner planets; the refined search starts
/// here.
pub fn apside_estimate(body: Body, kind: ApsideKind, year: f64) -> Jd<Tt> {
    let orbit = mean_orbit(body);
    Jd::new(mean_apside_jd(&orbit, cycle_index(&orbit, kind, year)))
}

fn refine<S: TermSource>(
    source: &S,
    body: Body,
    kind: ApsideKind,
    estimate: f64,
    config: &ApsideSearchConfig,
) -> Result<ApsideEvent, SearchError> {
    let window = mean_orbit(body).period_days / 8.0;
    let objective = |jd: f64| {
        let radius = heliocentric_position(source, body, Jd::new(jd))?.radius;
        Ok(match kind {
            ApsideKind::Periapsis => radius,
            ApsideKind::Apoapsis => -radius,
        })
    };
    let minimum = find_minimum(
        objective,
        estimate - window,
        estimate + window,
        config.tolerance_days,
    )?;
    let jd_tt = Jd::new(minimum.argmin);
    Ok(ApsideEvent {
        jd_tt,
        body,
        kind,
        radius: heliocentric_position(source, body, jd_tt)?.radius,
    })
}

fn approximate_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

fn checked_start(jd_tt: Jd<Tt>, config: &ApsideSearchConfig) -> Result<(), SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd_tt.is_finite() {
        return Err(SearchError::InvalidConfig("start epoch must be finite"));
    }
    Ok(())
}

/// The apside of the requested kind closest to `jd_tt`.
pub fn nearest_apside<S: TermSource>(
    source: &S,
    body: Body,
    kind: ApsideKind,
    jd_tt: Jd<Tt>,
    config: &ApsideSearchConfig,
) -> Result<ApsideEvent, SearchError> {
    checked_start(jd_tt, config)?;
    let estimate = apside_estimate(body, kind, approximate_year(jd_tt.value()));
    refine(source, body, kind, estimate.value(), config)
}

/// The first apside of the requested kind strictly after `jd_tt`.
pub fn next_apside<S: TermSource>(
    source: &S,
    body: Body,
    kind: ApsideKind,
    jd_tt: Jd<Tt>,
    config: &ApsideSearchConfig,
) -> Result<ApsideEvent, SearchError> {
    checked_start(jd_tt, config)?;
    let orbit = mean_orbit(body);
    let base = cycle_index(&orbit, kind, approximate_year(jd_tt.value())) - 1.0;
    for cycle in 0..3 {
        let k = base + f64::from(cycle);
        let event = refine(source, body, kind, mean_apside_jd(&orbit, k), config)?;
        if event.jd_tt.value() > jd_tt.value() {
            return Ok(event);
        }
    }
    Err(SearchError::InvalidConfig("no upcoming apside in scan range"))
}

/// The last apside of the requested kind strictly before `jd_tt`.
pub fn prev_apside<S: TermSource>(
    source: &S,
    body: Body,
    kind: ApsideKind,
    jd_tt: Jd<Tt>,
    config: &ApsideSearchConfig,
) -> Result<ApsideEvent, SearchError> {
    checked_start(jd_tt, config)?;
    let orbit = mean_orbit(body);
    let base = cycle_index(&orbit, kind, approximate_year(jd_tt.value())) + 1.0;
    for cycle in 0..3 {
        let k = base - f64::from(cycle);
        let event = refine(source, body, kind, mean_apside_jd(&orbit, k), config)?;
        if event.jd_tt.value() < jd_tt.value() {
            return Ok(event);
        }
    }
    Err(SearchError::InvalidConfig("no preceding apside in scan range"))
}

/// All apsides of the requested kind in `[start, end]`, in order.
pub fn search_apsides<S: TermSource>(
    source: &S,
    body: Body,
    kind: ApsideKind,
    start: Jd<Tt>,
    end: Jd<Tt>,
    config: &ApsideSearchConfig,
) -> Result<Vec<ApsideEvent>, SearchError> {
    checked_start(start, config)?;
    if !end.is_finite() || end.value() <= start.value() {
        return Err(SearchError::InvalidConfig("end must follow start"));
    }
    let orbit = mean_orbit(body);
    let first = cycle_index(&orbit, kind, approximate_year(start.value())) - 1.0;
    let last = cycle_index(&orbit, kind, approximate_year(end.value())) + 1.0;
    let mut events = Vec::new();
    let mut k = first;
    while k <= last {
        let event = refine(source, body, kind, mean_apside_jd(&orbit, k), config)?;
        if event.jd_tt.value() >= start.value() && event.jd_tt.value() <= end.value() {
            events.push(event);
        }
        k += 1.0;
    }
    Ok(events)
}
