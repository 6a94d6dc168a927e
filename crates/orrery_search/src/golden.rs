//! Golden-section minimization over a bracketed interval.
//!
//! The caller guarantees the objective is unimodal on `[lower, upper]`;
//! nothing here checks it. Each iteration shrinks the bracket by the
//! inverse golden ratio and costs one objective evaluation.

use crate::error::SearchError;

/// Inverse golden ratio, (√5 − 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Iteration cap; at one bracket shrink per iteration this is far past
/// f64 exhaustion for any sane tolerance.
pub const MAX_ITERATIONS: u32 = 200;

/// Result of a minimization: the abscissa and the objective value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    pub argmin: f64,
    pub value: f64,
}

/// Find the minimum of a unimodal objective on `[lower, upper]`.
///
/// Stops once the bracket is narrower than `tolerance` (or after
/// [`MAX_ITERATIONS`]) and returns the bracket midpoint with its
/// objective value. Objective failures propagate immediately.
pub fn find_minimum<F>(
    mut objective: F,
    lower: f64,
    upper: f64,
    tolerance: f64,
) -> Result<Minimum, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    if !lower.is_finite() || !upper.is_finite() {
        return Err(SearchError::InvalidConfig("bracket must be finite"));
    }
    if lower >= upper {
        return Err(SearchError::InvalidConfig("bracket must be non-empty"));
    }
    if !(tolerance > 0.0 && tolerance.is_finite()) {
        return Err(SearchError::InvalidConfig("tolerance must be positive"));
    }

    let mut a = lower;
    let mut b = upper;
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = objective(c)?;
    let mut fd = objective(d)?;

    for _ in 0..MAX_ITERATIONS {
        if b - a < tolerance {
            break;
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = objective(c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = objective(d)?;
        }
    }

    let argmin = 0.5 * (a + b);
    let value = objective(argmin)?;
    Ok(Minimum { argmin, value })
}
