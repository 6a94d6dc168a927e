//! Shared helpers for the locators.

use std::f64::consts::{PI, TAU};

/// Signed smallest difference `a − b` between two angles, in (−π, π].
pub(crate) fn signed_angle_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    if d > PI { d - TAU } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_across_zero() {
        assert!((signed_angle_difference(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
        assert!((signed_angle_difference(TAU - 0.1, 0.1) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn half_turn_is_positive() {
        assert!((signed_angle_difference(PI, 0.0) - PI).abs() < 1e-12);
    }
}
