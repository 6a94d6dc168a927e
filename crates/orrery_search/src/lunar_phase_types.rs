//! Types for lunar phase search.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::{Display, Formatter};

use orrery_time::{Jd, Tt};

/// The four principal lunar phases, as quarters of a lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    New,
    FirstQuarter,
    Full,
    ThirdQuarter,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::New,
        Phase::FirstQuarter,
        Phase::Full,
        Phase::ThirdQuarter,
    ];

    /// Quarter index within the lunation (New = 0 .. ThirdQuarter = 3).
    pub const fn quarter(self) -> u8 {
        match self {
            Phase::New => 0,
            Phase::FirstQuarter => 1,
            Phase::Full => 2,
            Phase::ThirdQuarter => 3,
        }
    }

    /// Moon − Sun elongation at this phase, radians.
    pub const fn target_elongation(self) -> f64 {
        match self {
            Phase::New => 0.0,
            Phase::FirstQuarter => FRAC_PI_2,
            Phase::Full => PI,
            Phase::ThirdQuarter => 3.0 * FRAC_PI_2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Phase::New => "new moon",
            Phase::FirstQuarter => "first quarter",
            Phase::Full => "full moon",
            Phase::ThirdQuarter => "third quarter",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A located lunar phase instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhaseEvent {
    pub jd_tt: Jd<Tt>,
    pub phase: Phase,
    /// Lunation number, counted from the first mean new moon of 2000.
    pub lunation: i32,
}

/// Refinement window and convergence tolerance for phase search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSearchConfig {
    /// Half-width of the refinement bracket around the mean estimate, days.
    pub window_days: f64,
    /// Bracket width at which refinement stops, days.
    pub tolerance_days: f64,
}

impl PhaseSearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.window_days > 0.0 && self.window_days.is_finite()) {
            return Err("window_days must be positive and finite");
        }
        // Quarters are ~7.4 days apart; a wider window can bracket two
        // events and the refinement loses unimodality.
        if self.window_days > 3.0 {
            return Err("window_days must not exceed 3 days");
        }
        if !(self.tolerance_days > 0.0 && self.tolerance_days < self.window_days) {
            return Err("tolerance_days must be positive and below window_days");
        }
        Ok(())
    }
}

impl Default for PhaseSearchConfig {
    fn default() -> Self {
        Self {
            window_days: 1.5,
            tolerance_days: 1e-6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PhaseSearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bad_configs_rejected() {
        let mut c = PhaseSearchConfig::default();
        c.window_days = 0.0;
        assert!(c.validate().is_err());
        c.window_days = 5.0;
        assert!(c.validate().is_err());
        c = PhaseSearchConfig::default();
        c.tolerance_days = 2.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn quarters_cover_the_circle() {
        for phase in Phase::ALL {
            let expected = f64::from(phase.quarter()) * FRAC_PI_2;
            assert_eq!(phase.target_elongation(), expected);
        }
    }
}
