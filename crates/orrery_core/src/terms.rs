//! Periodic-term data model and bundled reference tables.
//!
//! The bundled tables are the truncated VSOP87D series for Earth and Venus
//! (heliocentric ecliptic coordinates of date), amplitudes in 1e-8 rad for
//! angles and 1e-8 AU for radii, arguments in Julian millennia from
//! J2000.0 TT. Truncation keeps every term above roughly 1e-7 rad, good to
//! about one arcsecond over several centuries around J2000.
//!
//! Source: Bretagnon & Francou, VSOP87 (public domain); truncation as
//! reproduced in Meeus, "Astronomical Algorithms", 2nd ed., Appendix III.
//!
//! Other bodies come from caller-supplied [`TermSource`] implementations;
//! nothing here caches, so a caller wrapping a slow store layers its own.

use crate::{Body, Coordinate};

/// One term of a VSOP-form series: `amplitude · cos(phase + frequency · τ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

/// Shorthand constructor used by the static tables.
pub(crate) const fn t(amplitude: f64, phase: f64, frequency: f64) -> PeriodicTerm {
    PeriodicTerm {
        amplitude,
        phase,
        frequency,
    }
}

/// Provider of per-power term sets.
///
/// `power` indexes the τ-power the set multiplies (0..=5 in VSOP87).
/// `None` for power 0 means the source has no series for that slot at all;
/// `None` for a higher power simply ends the series.
pub trait TermSource {
    fn term_set(&self, body: Body, coordinate: Coordinate, power: u8) -> Option<&[PeriodicTerm]>;
}

/// The bundled Earth + Venus tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTables;

impl TermSource for ReferenceTables {
    fn term_set(&self, body: Body, coordinate: Coordinate, power: u8) -> Option<&[PeriodicTerm]> {
        let sets: &[&[PeriodicTerm]] = match (body, coordinate) {
            (Body::Earth, Coordinate::Longitude) => &EARTH_L,
            (Body::Earth, Coordinate::Latitude) => &EARTH_B,
            (Body::Earth, Coordinate::Radius) => &EARTH_R,
            (Body::Venus, Coordinate::Longitude) => &VENUS_L,
            (Body::Venus, Coordinate::Latitude) => &VENUS_B,
            (Body::Venus, Coordinate::Radius) => &VENUS_R,
            _ => return None,
        };
        sets.get(usize::from(power)).copied()
    }
}

static EARTH_L: [&[PeriodicTerm]; 6] = [
    &EARTH_L0, &EARTH_L1, &EARTH_L2, &EARTH_L3, &EARTH_L4, &EARTH_L5,
];
static EARTH_B: [&[PeriodicTerm]; 2] = [&EARTH_B0, &EARTH_B1];
static EARTH_R: [&[PeriodicTerm]; 5] = [&EARTH_R0, &EARTH_R1, &EARTH_R2, &EARTH_R3, &EARTH_R4];
static VENUS_L: [&[PeriodicTerm]; 6] = [
    &VENUS_L0, &VENUS_L1, &VENUS_L2, &VENUS_L3, &VENUS_L4, &VENUS_L5,
];
static VENUS_B: [&[PeriodicTerm]; 5] = [&VENUS_B0, &VENUS_B1, &VENUS_B2, &VENUS_B3, &VENUS_B4];
static VENUS_R: [&[PeriodicTerm]; 5] = [&VENUS_R0, &VENUS_R1, &VENUS_R2, &VENUS_R3, &VENUS_R4];

#[rustfmt::skip]
static EARTH_L0: [PeriodicTerm; 64] = [
    t(175347046.0, 0.0, 0.0),
    t(3341656.0, 4.6692568, 6283.07585),
    t(34894.0, 4.6261, 12566.1517),
    t(3497.0, 2.7441, 5753.3849),
    t(3418.0, 2.8289, 3.5231),
    t(3136.0, 3.6277, 77713.7715),
    t(2676.0, 4.4181, 7860.4194),
    t(2343.0, 6.1352, 3930.2097),
    t(1324.0, 0.7425, 11506.7698),
    t(1273.0, 2.0371, 529.691),
    t(1199.0, 1.1096, 1577.3435),
    t(990.0, 5.233, 5884.927),
    t(902.0, 2.045, 26.298),
    t(857.0, 3.508, 398.149),
    t(780.0, 1.179, 5223.694),
    t(753.0, 2.533, 5507.553),
    t(505.0, 4.583, 18849.228),
    t(492.0, 4.205, 775.523),
    t(357.0, 2.92, 0.067),
    t(317.0, 5.849, 11790.629),
    t(284.0, 1.899, 796.298),
    t(271.0, 0.315, 10977.079),
    t(243.0, 0.345, 5486.778),
    t(206.0, 4.806, 2544.314),
    t(205.0, 1.869, 5573.143),
    t(202.0, 2.458, 6069.777),
    t(156.0, 0.833, 213.299),
    t(132.0, 3.411, 2942.463),
    t(126.0, 1.083, 20.775),
    t(115.0, 0.645, 0.98),
    t(103.0, 0.636, 4694.003),
    t(102.0, 0.976, 15720.839),
    t(102.0, 4.267, 7.114),
    t(99.0, 6.21, 2146.17),
    t(98.0, 0.68, 155.42),
    t(86.0, 5.98, 161000.69),
    t(85.0, 1.3, 6275.96),
    t(85.0, 3.67, 71430.7),
    t(80.0, 1.81, 17260.15),
    t(79.0, 3.04, 12036.46),
    t(75.0, 1.76, 5088.63),
    t(74.0, 3.5, 3154.69),
    t(74.0, 4.68, 801.82),
    t(70.0, 0.83, 9437.76),
    t(62.0, 3.98, 8827.39),
    t(61.0, 1.82, 7084.9),
    t(57.0, 2.78, 6286.6),
    t(56.0, 4.39, 14143.5),
    t(56.0, 3.47, 6279.55),
    t(52.0, 0.19, 12139.55),
    t(52.0, 1.33, 1748.02),
    t(51.0, 0.28, 5856.48),
    t(49.0, 0.49, 1194.45),
    t(41.0, 5.37, 8429.24),
    t(41.0, 2.4, 19651.05),
    t(39.0, 6.17, 10447.39),
    t(37.0, 6.04, 10213.29),
    t(37.0, 2.57, 1059.38),
    t(36.0, 1.71, 2352.87),
    t(36.0, 1.78, 6812.77),
    t(33.0, 0.59, 17789.85),
    t(30.0, 0.44, 83996.85),
    t(30.0, 2.74, 1349.87),
    t(25.0, 3.16, 4690.48),
];

#[rustfmt::skip]
static EARTH_L1: [PeriodicTerm; 34] = [
    t(628331966747.0, 0.0, 0.0),
    t(206059.0, 2.678235, 6283.07585),
    t(4303.0, 2.6351, 12566.1517),
    t(425.0, 1.59, 3.523),
    t(119.0, 5.796, 26.298),
    t(109.0, 2.966, 1577.344),
    t(93.0, 2.59, 18849.23),
    t(72.0, 1.14, 529.69),
    t(68.0, 1.87, 398.15),
    t(67.0, 4.41, 5507.55),
    t(59.0, 2.89, 5223.69),
    t(56.0, 2.17, 155.42),
    t(45.0, 0.4, 796.3),
    t(36.0, 0.47, 775.52),
    t(29.0, 2.65, 7.11),
    t(21.0, 5.34, 0.98),
    t(19.0, 1.85, 5486.78),
    t(19.0, 4.97, 213.3),
    t(17.0, 2.99, 6275.96),
    t(16.0, 0.03, 2544.31),
    t(16.0, 1.43, 2146.17),
    t(15.0, 1.21, 10977.08),
    t(12.0, 2.83, 1748.02),
    t(12.0, 3.26, 5088.63),
    t(12.0, 5.27, 1194.45),
    t(12.0, 2.08, 4694.0),
    t(11.0, 0.77, 553.57),
    t(10.0, 1.3, 6286.6),
    t(10.0, 4.24, 1349.87),
    t(9.0, 2.7, 242.73),
    t(9.0, 5.64, 951.72),
    t(8.0, 5.3, 2352.87),
    t(6.0, 2.65, 9437.76),
    t(6.0, 4.67, 4690.48),
];

#[rustfmt::skip]
static EARTH_L2: [PeriodicTerm; 20] = [
    t(52919.0, 0.0, 0.0),
    t(8720.0, 1.0721, 6283.0758),
    t(309.0, 0.867, 12566.152),
    t(27.0, 0.05, 3.52),
    t(16.0, 5.19, 26.3),
    t(16.0, 3.68, 155.42),
    t(10.0, 0.76, 18849.23),
    t(9.0, 2.06, 77713.77),
    t(7.0, 0.83, 775.52),
    t(5.0, 4.66, 1577.34),
    t(4.0, 1.03, 7.11),
    t(4.0, 3.44, 5573.14),
    t(3.0, 5.14, 796.3),
    t(3.0, 6.05, 5507.55),
    t(3.0, 1.19, 242.73),
    t(3.0, 6.12, 529.69),
    t(3.0, 0.31, 398.15),
    t(3.0, 2.28, 553.57),
    t(2.0, 4.38, 5223.69),
    t(2.0, 3.75, 0.98),
];

#[rustfmt::skip]
static EARTH_L3: [PeriodicTerm; 7] = [
    t(289.0, 5.844, 6283.076),
    t(35.0, 0.0, 0.0),
    t(17.0, 5.49, 12566.15),
    t(3.0, 5.2, 155.42),
    t(1.0, 4.72, 3.52),
    t(1.0, 5.3, 18849.23),
    t(1.0, 5.97, 242.73),
];

#[rustfmt::skip]
static EARTH_L4: [PeriodicTerm; 3] = [
    t(114.0, 3.142, 0.0),
    t(8.0, 4.13, 6283.08),
    t(1.0, 3.84, 12566.15),
];

#[rustfmt::skip]
static EARTH_L5: [PeriodicTerm; 1] = [
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static EARTH_B0: [PeriodicTerm; 5] = [
    t(280.0, 3.199, 84334.662),
    t(102.0, 5.422, 5507.553),
    t(80.0, 3.88, 5223.69),
    t(44.0, 3.7, 2352.87),
    t(32.0, 4.0, 1577.34),
];

#[rustfmt::skip]
static EARTH_B1: [PeriodicTerm; 2] = [
    t(9.0, 3.9, 5507.55),
    t(6.0, 1.73, 5223.69),
];

#[rustfmt::skip]
static EARTH_R0: [PeriodicTerm; 40] = [
    t(100013989.0, 0.0, 0.0),
    t(1670700.0, 3.0984635, 6283.07585),
    t(13956.0, 3.05525, 12566.1517),
    t(3084.0, 5.1985, 77713.7715),
    t(1628.0, 1.1739, 5753.3849),
    t(1576.0, 2.8469, 7860.4194),
    t(925.0, 5.453, 11506.77),
    t(542.0, 4.564, 3930.21),
    t(472.0, 3.661, 5884.927),
    t(346.0, 0.964, 5507.553),
    t(329.0, 5.9, 5223.694),
    t(307.0, 0.299, 5573.143),
    t(243.0, 4.273, 11790.629),
    t(212.0, 5.847, 1577.344),
    t(186.0, 5.022, 10977.079),
    t(175.0, 3.012, 18849.228),
    t(110.0, 5.055, 5486.778),
    t(98.0, 0.89, 6069.78),
    t(86.0, 5.69, 15720.84),
    t(86.0, 1.27, 161000.69),
    t(65.0, 0.27, 17260.15),
    t(63.0, 0.92, 529.69),
    t(57.0, 2.01, 83996.85),
    t(56.0, 5.24, 71430.7),
    t(49.0, 3.25, 2544.31),
    t(47.0, 2.58, 775.52),
    t(45.0, 5.54, 9437.76),
    t(43.0, 6.01, 6275.96),
    t(39.0, 5.36, 4694.0),
    t(38.0, 2.39, 8827.39),
    t(37.0, 0.83, 19651.05),
    t(37.0, 4.9, 12139.55),
    t(36.0, 1.67, 12036.46),
    t(35.0, 1.84, 2942.46),
    t(33.0, 0.24, 7084.9),
    t(32.0, 0.18, 5088.63),
    t(32.0, 1.78, 398.15),
    t(28.0, 1.21, 6286.6),
    t(28.0, 1.9, 6279.55),
    t(26.0, 4.59, 10447.39),
];

#[rustfmt::skip]
static EARTH_R1: [PeriodicTerm; 10] = [
    t(103019.0, 1.10749, 6283.07585),
    t(1721.0, 1.0644, 12566.1517),
    t(702.0, 3.142, 0.0),
    t(32.0, 1.02, 18849.23),
    t(31.0, 2.84, 5507.55),
    t(25.0, 1.32, 5223.69),
    t(18.0, 1.42, 1577.34),
    t(10.0, 5.91, 10977.08),
    t(9.0, 1.42, 6275.96),
    t(9.0, 0.27, 5486.78),
];

#[rustfmt::skip]
static EARTH_R2: [PeriodicTerm; 6] = [
    t(4359.0, 5.7846, 6283.0758),
    t(124.0, 5.579, 12566.152),
    t(12.0, 3.14, 0.0),
    t(9.0, 3.63, 77713.77),
    t(6.0, 1.87, 5573.14),
    t(3.0, 5.47, 18849.23),
];

#[rustfmt::skip]
static EARTH_R3: [PeriodicTerm; 2] = [
    t(145.0, 4.273, 6283.076),
    t(7.0, 3.92, 12566.15),
];

#[rustfmt::skip]
static EARTH_R4: [PeriodicTerm; 1] = [
    t(4.0, 2.56, 6283.08),
];

#[rustfmt::skip]
static VENUS_L0: [PeriodicTerm; 24] = [
    t(317614667.0, 0.0, 0.0),
    t(1353968.0, 5.5931332, 10213.285546),
    t(89892.0, 5.3065, 20426.57109),
    t(5477.0, 4.4163, 7860.4194),
    t(3456.0, 2.6996, 11790.6291),
    t(2372.0, 2.9938, 3930.2097),
    t(1664.0, 4.2502, 1577.3435),
    t(1438.0, 4.1575, 9683.5946),
    t(1317.0, 5.1867, 26.2983),
    t(1201.0, 6.1536, 30639.8566),
    t(769.0, 0.816, 9437.763),
    t(761.0, 1.95, 529.691),
    t(708.0, 1.065, 775.523),
    t(585.0, 3.998, 191.448),
    t(500.0, 4.123, 15720.839),
    t(429.0, 3.586, 19367.189),
    t(327.0, 5.677, 5507.553),
    t(326.0, 4.591, 10404.734),
    t(232.0, 3.163, 9153.904),
    t(180.0, 4.653, 1109.379),
    t(155.0, 5.57, 19651.048),
    t(128.0, 4.226, 20.775),
    t(128.0, 0.962, 5661.332),
    t(106.0, 1.537, 801.821),
];

#[rustfmt::skip]
static VENUS_L1: [PeriodicTerm; 12] = [
    t(1021352943053.0, 0.0, 0.0),
    t(95708.0, 2.46424, 10213.28555),
    t(14445.0, 0.51625, 20426.57109),
    t(213.0, 1.795, 30639.857),
    t(174.0, 2.655, 26.298),
    t(152.0, 6.106, 1577.344),
    t(82.0, 5.7, 191.45),
    t(70.0, 2.68, 9437.76),
    t(52.0, 3.6, 775.52),
    t(38.0, 1.03, 529.69),
    t(30.0, 1.25, 5507.55),
    t(25.0, 6.11, 10404.73),
];

#[rustfmt::skip]
static VENUS_L2: [PeriodicTerm; 8] = [
    t(54127.0, 0.0, 0.0),
    t(3891.0, 0.3451, 10213.2855),
    t(1338.0, 2.0201, 20426.5711),
    t(24.0, 2.05, 26.3),
    t(19.0, 3.54, 30639.86),
    t(10.0, 3.97, 775.52),
    t(7.0, 1.52, 1577.34),
    t(6.0, 1.0, 191.45),
];

#[rustfmt::skip]
static VENUS_L3: [PeriodicTerm; 3] = [
    t(136.0, 4.804, 10213.286),
    t(78.0, 3.67, 20426.57),
    t(26.0, 0.0, 0.0),
];

#[rustfmt::skip]
static VENUS_L4: [PeriodicTerm; 3] = [
    t(114.0, 3.1416, 0.0),
    t(3.0, 5.21, 20426.57),
    t(2.0, 2.51, 10213.29),
];

#[rustfmt::skip]
static VENUS_L5: [PeriodicTerm; 1] = [
    t(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static VENUS_B0: [PeriodicTerm; 9] = [
    t(5923638.0, 0.2670278, 10213.2855462),
    t(40108.0, 1.14737, 20426.57109),
    t(32815.0, 3.14159, 0.0),
    t(1011.0, 1.0895, 30639.8566),
    t(149.0, 6.254, 18073.705),
    t(138.0, 0.86, 1577.344),
    t(130.0, 3.672, 9437.763),
    t(120.0, 3.705, 2352.866),
    t(108.0, 4.539, 22003.915),
];

#[rustfmt::skip]
static VENUS_B1: [PeriodicTerm; 4] = [
    t(513348.0, 1.803643, 10213.285546),
    t(4380.0, 3.3862, 20426.5711),
    t(199.0, 0.0, 0.0),
    t(197.0, 2.53, 30639.857),
];

#[rustfmt::skip]
static VENUS_B2: [PeriodicTerm; 4] = [
    t(22378.0, 3.38509, 10213.28555),
    t(282.0, 0.0, 0.0),
    t(173.0, 5.256, 20426.571),
    t(27.0, 3.87, 30639.86),
];

#[rustfmt::skip]
static VENUS_B3: [PeriodicTerm; 4] = [
    t(647.0, 4.992, 10213.286),
    t(20.0, 3.14, 0.0),
    t(6.0, 0.77, 20426.57),
    t(3.0, 5.44, 30639.86),
];

#[rustfmt::skip]
static VENUS_B4: [PeriodicTerm; 1] = [
    t(14.0, 0.32, 10213.29),
];

#[rustfmt::skip]
static VENUS_R0: [PeriodicTerm; 12] = [
    t(72334821.0, 0.0, 0.0),
    t(489824.0, 4.021518, 10213.285546),
    t(1658.0, 4.9021, 20426.5711),
    t(1632.0, 2.8455, 7860.4194),
    t(1378.0, 1.1285, 11790.6291),
    t(498.0, 2.587, 9683.595),
    t(374.0, 1.423, 3930.21),
    t(264.0, 5.529, 9437.763),
    t(237.0, 2.551, 15720.839),
    t(222.0, 2.013, 19367.189),
    t(126.0, 2.728, 1577.344),
    t(119.0, 3.02, 10404.734),
];

#[rustfmt::skip]
static VENUS_R1: [PeriodicTerm; 3] = [
    t(34551.0, 0.89199, 10213.28555),
    t(234.0, 1.772, 20426.571),
    t(234.0, 3.142, 0.0),
];

#[rustfmt::skip]
static VENUS_R2: [PeriodicTerm; 3] = [
    t(1407.0, 5.0637, 10213.2855),
    t(16.0, 5.47, 20426.57),
    t(13.0, 0.0, 0.0),
];

#[rustfmt::skip]
static VENUS_R3: [PeriodicTerm; 1] = [
    t(50.0, 3.22, 10213.29),
];

#[rustfmt::skip]
static VENUS_R4: [PeriodicTerm; 1] = [
    t(1.0, 0.92, 10213.29),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_bodies() {
        let tables = ReferenceTables;
        for body in [Body::Earth, Body::Venus] {
            for coordinate in Coordinate::ALL {
                assert!(
                    tables.term_set(body, coordinate, 0).is_some(),
                    "{body} {}",
                    coordinate.name()
                );
            }
        }
        assert!(tables
            .term_set(Body::Mercury, Coordinate::Longitude, 0)
            .is_none());
    }

    #[test]
    fn powers_beyond_table_end_are_none() {
        let tables = ReferenceTables;
        assert!(tables.term_set(Body::Earth, Coordinate::Latitude, 1).is_some());
        assert!(tables.term_set(Body::Earth, Coordinate::Latitude, 2).is_none());
        assert!(tables.term_set(Body::Earth, Coordinate::Longitude, 6).is_none());
    }

    #[test]
    fn tables_are_amplitude_ordered() {
        // Truncated tables are tabulated by descending amplitude; the
        // evaluator relies on nothing here, but a shuffled row is a
        // transcription error.
        for set in [&EARTH_L0[..], &EARTH_R0[..], &VENUS_L0[..], &VENUS_B0[..]] {
            for pair in set.windows(2) {
                assert!(pair[0].amplitude >= pair[1].amplitude);
            }
        }
    }
}
