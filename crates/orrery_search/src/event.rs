//! Unified event record over the three locator outputs.

use orrery_time::{Jd, Tt};

use crate::apside_types::ApsideEvent;
use crate::lunar_phase_types::LunarPhaseEvent;
use crate::season_types::SeasonalMarkerEvent;

/// Any event a locator can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    LunarPhase(LunarPhaseEvent),
    Apside(ApsideEvent),
    SeasonalMarker(SeasonalMarkerEvent),
}

impl Event {
    /// The TT instant of the event.
    pub fn jd_tt(&self) -> Jd<Tt> {
        match self {
            Event::LunarPhase(e) => e.jd_tt,
            Event::Apside(e) => e.jd_tt,
            Event::SeasonalMarker(e) => e.jd_tt,
        }
    }
}

impl From<LunarPhaseEvent> for Event {
    fn from(e: LunarPhaseEvent) -> Self {
        Event::LunarPhase(e)
    }
}

impl From<ApsideEvent> for Event {
    fn from(e: ApsideEvent) -> Self {
        Event::Apside(e)
    }
}

impl From<SeasonalMarkerEvent> for Event {
    fn from(e: SeasonalMarkerEvent) -> Self {
        Event::SeasonalMarker(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar_phase_types::Phase;

    #[test]
    fn instant_passes_through() {
        let event: Event = LunarPhaseEvent {
            jd_tt: Jd::new(2_451_550.26),
            phase: Phase::New,
            lunation: 0,
        }
        .into();
        assert_eq!(event.jd_tt().value(), 2_451_550.26);
    }
}
