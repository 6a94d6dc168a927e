//! Types for seasonal-marker search.

use std::f64::consts::FRAC_PI_2;
use std::fmt::{Display, Formatter};

use orrery_time::{Jd, Tt};

/// The four cardinal points of the tropical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonalMarker {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SeasonalMarker {
    pub const ALL: [SeasonalMarker; 4] = [
        SeasonalMarker::MarchEquinox,
        SeasonalMarker::JuneSolstice,
        SeasonalMarker::SeptemberEquinox,
        SeasonalMarker::DecemberSolstice,
    ];

    /// Apparent solar longitude at the marker, radians.
    pub const fn target_longitude(self) -> f64 {
        match self {
            SeasonalMarker::MarchEquinox => 0.0,
            SeasonalMarker::JuneSolstice => FRAC_PI_2,
            SeasonalMarker::SeptemberEquinox => 2.0 * FRAC_PI_2,
            SeasonalMarker::DecemberSolstice => 3.0 * FRAC_PI_2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SeasonalMarker::MarchEquinox => "March equinox",
            SeasonalMarker::JuneSolstice => "June solstice",
            SeasonalMarker::SeptemberEquinox => "September equinox",
            SeasonalMarker::DecemberSolstice => "December solstice",
        }
    }
}

impl Display for SeasonalMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A located equinox or solstice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalMarkerEvent {
    pub jd_tt: Jd<Tt>,
    pub marker: SeasonalMarker,
    /// Apparent solar longitude at the event, radians in [0, 2π).
    pub solar_longitude: f64,
}

/// Refinement window and convergence tolerance for marker search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonSearchConfig {
    /// Half-width of the refinement bracket around the mean estimate, days.
    pub window_days: f64,
    /// Bracket width at which refinement stops, days.
    pub tolerance_days: f64,
}

impl SeasonSearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.window_days > 0.0 && self.window_days.is_finite()) {
            return Err("window_days must be positive and finite");
        }
        // Markers are ~91 days apart; stay well inside a quarter year.
        if self.window_days > 20.0 {
            return Err("window_days must not exceed 20 days");
        }
        if !(self.tolerance_days > 0.0 && self.tolerance_days < self.window_days) {
            return Err("tolerance_days must be positive and below window_days");
        }
        Ok(())
    }
}

impl Default for SeasonSearchConfig {
    fn default() -> Self {
        Self {
            window_days: 1.0,
            tolerance_days: 1e-6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SeasonSearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn targets_are_cardinal() {
        assert_eq!(SeasonalMarker::MarchEquinox.target_longitude(), 0.0);
        assert_eq!(SeasonalMarker::SeptemberEquinox.target_longitude(), PI);
    }

    #[test]
    fn oversized_window_rejected() {
        let c = SeasonSearchConfig {
            window_days: 50.0,
            tolerance_days: 1e-6,
        };
        assert!(c.validate().is_err());
    }
}
