//! Types for apside search.

use std::fmt::{Display, Formatter};

use orrery_core::Body;
use orrery_time::{Jd, Tt};

/// Orbit extremum kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApsideKind {
    /// Closest approach to the Sun (perihelion).
    Periapsis,
    /// Greatest distance from the Sun (aphelion).
    Apoapsis,
}

impl ApsideKind {
    pub const fn name(self) -> &'static str {
        match self {
            ApsideKind::Periapsis => "perihelion",
            ApsideKind::Apoapsis => "aphelion",
        }
    }
}

impl Display for ApsideKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A located orbital apside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApsideEvent {
    pub jd_tt: Jd<Tt>,
    pub body: Body,
    pub kind: ApsideKind,
    /// Heliocentric distance at the event, AU.
    pub radius: f64,
}

/// Convergence tolerance for apside refinement. The bracket half-width is
/// fixed at an eighth of the body's orbital period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApsideSearchConfig {
    /// Bracket width at which refinement stops, days.
    pub tolerance_days: f64,
}

impl ApsideSearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.tolerance_days > 0.0 && self.tolerance_days.is_finite()) {
            return Err("tolerance_days must be positive and finite");
        }
        Ok(())
    }
}

impl Default for ApsideSearchConfig {
    fn default() -> Self {
        // The radius extremum is flat, so pushing far below 1e-4 day buys
        // nothing against the series truncation error.
        Self {
            tolerance_days: 1e-4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ApsideSearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bad_tolerance_rejected() {
        assert!(ApsideSearchConfig { tolerance_days: 0.0 }.validate().is_err());
        assert!(ApsideSearchConfig {
            tolerance_days: f64::NAN
        }
        .validate()
        .is_err());
    }
}
