//! Celestial event search: lunar phases, orbital apsides, and seasonal
//! markers.
//!
//! Every locator works the same way: a mean-element polynomial supplies a
//! close first estimate, then golden-section minimization of a smooth
//! objective (elongation offset, signed radius, solar-longitude offset)
//! refines it inside a window that brackets exactly one event.

pub mod apside;
pub mod apside_types;
pub mod error;
pub mod event;
pub mod golden;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod season;
pub mod season_types;
pub(crate) mod search_util;

pub use apside::{apside_estimate, nearest_apside, next_apside, prev_apside, search_apsides};
pub use apside_types::{ApsideEvent, ApsideKind, ApsideSearchConfig};
pub use error::SearchError;
pub use event::Event;
pub use golden::{find_minimum, Minimum, MAX_ITERATIONS};
pub use lunar_phase::{
    nearest_phase, next_phase, prev_phase, search_phases, MEAN_SYNODIC_MONTH,
};
pub use lunar_phase_types::{LunarPhaseEvent, Phase, PhaseSearchConfig};
pub use season::{search_seasonal_markers, seasonal_marker};
pub use season_types::{SeasonSearchConfig, SeasonalMarker, SeasonalMarkerEvent};
