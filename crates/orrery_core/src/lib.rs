//! Ephemeris core: periodic-series evaluation and body positions.
//!
//! This crate provides:
//! - The trigonometric series kernel (`series`)
//! - The periodic-term data model and bundled reference tables (`terms`)
//! - Heliocentric planet positions and the derived Sun position (`position`)
//! - Geocentric lunar longitude (`moon`)

pub mod moon;
pub mod position;
pub mod series;
pub mod terms;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use moon::lunar_longitude;
pub use position::{heliocentric_position, sun_position, MAX_POWER};
pub use terms::{PeriodicTerm, ReferenceTables, TermSource};

/// One astronomical unit in meters (IAU 2012 definition).
pub const AU_METERS: f64 = 1.495_978_707e11;

/// The planets with VSOP87 series, in heliocentric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// VSOP87 planet index (Mercury = 1 .. Neptune = 8).
    pub const fn code(self) -> u8 {
        match self {
            Body::Mercury => 1,
            Body::Venus => 2,
            Body::Earth => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
        }
    }

    /// Inverse of [`Body::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The three spherical coordinates a VSOP87D series set covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Longitude,
    Latitude,
    Radius,
}

impl Coordinate {
    pub const ALL: [Coordinate; 3] =
        [Coordinate::Longitude, Coordinate::Latitude, Coordinate::Radius];

    pub const fn name(self) -> &'static str {
        match self {
            Coordinate::Longitude => "longitude",
            Coordinate::Latitude => "latitude",
            Coordinate::Radius => "radius",
        }
    }
}

/// Unit for the radial coordinate at a call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusUnit {
    Au,
    Meters,
}

/// Heliocentric or geocentric spherical position.
///
/// Longitude and latitude are radians, unwrapped (series output is a raw
/// polynomial sum; callers normalize for presentation). Radius is in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
}

impl Coordinates {
    /// Radius converted to the requested unit.
    pub fn radius_in(self, unit: RadiusUnit) -> f64 {
        match unit {
            RadiusUnit::Au => self.radius,
            RadiusUnit::Meters => self.radius * AU_METERS,
        }
    }
}

/// Errors from series evaluation and position queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// An input value was NaN or infinite.
    NonFinite(&'static str),
    /// The term source has no power-0 series for the requested slot.
    MissingTermSet {
        body: Body,
        coordinate: Coordinate,
        power: u8,
    },
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::MissingTermSet {
                body,
                coordinate,
                power,
            } => write!(
                f,
                "no term set for {body} {} power {power}",
                coordinate.name()
            ),
        }
    }
}

impl Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_codes_roundtrip() {
        for body in Body::ALL {
            assert_eq!(Body::from_code(body.code()), Some(body));
        }
        assert_eq!(Body::from_code(0), None);
        assert_eq!(Body::from_code(9), None);
    }

    #[test]
    fn body_lookup_by_name() {
        assert_eq!(Body::from_name("venus"), Some(Body::Venus));
        assert_eq!(Body::from_name("NEPTUNE"), Some(Body::Neptune));
        assert_eq!(Body::from_name("Pluto"), None);
    }

    #[test]
    fn radius_unit_conversion() {
        let c = Coordinates {
            longitude: 0.0,
            latitude: 0.0,
            radius: 1.0,
        };
        assert_eq!(c.radius_in(RadiusUnit::Au), 1.0);
        assert_eq!(c.radius_in(RadiusUnit::Meters), AU_METERS);
    }
}
