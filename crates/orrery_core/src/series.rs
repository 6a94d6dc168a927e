//! Trigonometric series kernels.
//!
//! Two forms cover every table in the workspace:
//! - the VSOP form `Σ A·cos(φ + ν·τ)`, combined across powers of τ, and
//! - the fundamental-argument form `Σ (a + a'·T)·sin(Σ nᵢ·argᵢ)` with a
//!   matching cosine channel, used by the nutation series.
//!
//! Sums are accumulated smallest-last as tabulated (tables are ordered by
//! descending amplitude) and never wrapped; callers normalize angles at
//! presentation boundaries only.

use crate::terms::PeriodicTerm;
use crate::CoreError;

/// Evaluate `Σ A·cos(φ + ν·τ)` over one term set.
pub fn accumulate(terms: &[PeriodicTerm], tau: f64) -> Result<f64, CoreError> {
    if !tau.is_finite() {
        return Err(CoreError::NonFinite("series argument"));
    }
    let mut sum = 0.0;
    for term in terms {
        sum += term.amplitude * (term.phase + term.frequency * tau).cos();
    }
    Ok(sum)
}

/// Combine per-power term sets: `Σₖ τᵏ · accumulate(sets[k], τ)`.
pub fn power_series(sets: &[&[PeriodicTerm]], tau: f64) -> Result<f64, CoreError> {
    if !tau.is_finite() {
        return Err(CoreError::NonFinite("series argument"));
    }
    let mut total = 0.0;
    let mut tau_power = 1.0;
    for set in sets {
        total += tau_power * accumulate(set, tau)?;
        tau_power *= tau;
    }
    Ok(total)
}

/// One row of a fundamental-argument series.
///
/// `multipliers` select the integer combination of the five arguments;
/// the sine channel amplitude is `sin_coeff + sin_coeff_t · T` and the
/// cosine channel `cos_coeff + cos_coeff_t · T`, in whatever unit the
/// table is tabulated in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgumentTerm {
    pub multipliers: [i8; 5],
    pub sin_coeff: f64,
    pub sin_coeff_t: f64,
    pub cos_coeff: f64,
    pub cos_coeff_t: f64,
}

/// Accumulate the sine and cosine channels of an argument series.
///
/// `arguments` are the five fundamental angles in radians, `t` the time in
/// Julian centuries. Returns `(sine_sum, cosine_sum)` in table units.
pub fn argument_series(
    terms: &[ArgumentTerm],
    arguments: &[f64; 5],
    t: f64,
) -> Result<(f64, f64), CoreError> {
    if !t.is_finite() || arguments.iter().any(|a| !a.is_finite()) {
        return Err(CoreError::NonFinite("series argument"));
    }
    let mut sine_sum = 0.0;
    let mut cosine_sum = 0.0;
    for term in terms {
        let arg: f64 = term
            .multipliers
            .iter()
            .zip(arguments)
            .map(|(&n, a)| f64::from(n) * a)
            .sum();
        sine_sum += (term.sin_coeff + term.sin_coeff_t * t) * arg.sin();
        cosine_sum += (term.cos_coeff + term.cos_coeff_t * t) * arg.cos();
    }
    Ok((sine_sum, cosine_sum))
}
