//! ΔT = TT − UT from the NASA Espenak–Meeus piecewise polynomial fit.
//!
//! The fit covers the years −500 to +2150 with thirteen polynomial segments;
//! outside that span a long-term parabola in (year − 1820)/100 takes over.
//! Adjacent segments agree to within about a second at the seams, which the
//! model accepts rather than smoothing.
//!
//! Source: Espenak & Meeus, "Five Millennium Canon of Solar Eclipses",
//! polynomial expressions for Delta T (NASA/TP-2006-214141).

/// One polynomial segment: valid on `start <= y < end`, evaluated at
/// `u = (y - anchor) / divisor` with coefficients in ascending powers.
struct Segment {
    start: f64,
    end: f64,
    anchor: f64,
    divisor: f64,
    coefficients: &'static [f64],
}

#[rustfmt::skip]
static SEGMENTS: [Segment; 13] = [
    Segment { start: -500.0, end:  500.0, anchor:    0.0, divisor: 100.0, coefficients: &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521] },
    Segment { start:  500.0, end: 1600.0, anchor: 1000.0, divisor: 100.0, coefficients: &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073] },
    Segment { start: 1600.0, end: 1700.0, anchor: 1600.0, divisor:   1.0, coefficients: &[120.0, -0.9808, -0.01532, 1.0 / 7129.0] },
    Segment { start: 1700.0, end: 1800.0, anchor: 1700.0, divisor:   1.0, coefficients: &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0] },
    Segment { start: 1800.0, end: 1860.0, anchor: 1800.0, divisor:   1.0, coefficients: &[13.72, -0.332447, 0.0068612, 0.0041116, -0.00037436, 0.0000121272, -0.0000001699, 0.000000000875] },
    Segment { start: 1860.0, end: 1900.0, anchor: 1860.0, divisor:   1.0, coefficients: &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0] },
    Segment { start: 1900.0, end: 1920.0, anchor: 1900.0, divisor:   1.0, coefficients: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197] },
    Segment { start: 1920.0, end: 1941.0, anchor: 1920.0, divisor:   1.0, coefficients: &[21.20, 0.84493, -0.076100, 0.0020936] },
    Segment { start: 1941.0, end: 1961.0, anchor: 1950.0, divisor:   1.0, coefficients: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0] },
    Segment { start: 1961.0, end: 1986.0, anchor: 1975.0, divisor:   1.0, coefficients: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0] },
    Segment { start: 1986.0, end: 2005.0, anchor: 2000.0, divisor:   1.0, coefficients: &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599] },
    Segment { start: 2005.0, end: 2050.0, anchor: 2000.0, divisor:   1.0, coefficients: &[62.92, 0.32217, 0.005589] },
    // 2050-2150 expression -20 + 32u^2 - 0.5628(2150 - y) rewritten in u = (y - 1820)/100.
    Segment { start: 2050.0, end: 2150.0, anchor: 1820.0, divisor: 100.0, coefficients: &[-205.724, 56.28, 32.0] },
];

/// ΔT in seconds for a decimal year (NASA convention: `year + (month − 0.5)/12`).
///
/// Total function: every finite year yields a value, with parabolic
/// extrapolation outside −500..2150. A NaN year yields NaN.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let y = decimal_year;
    let mut dt = match SEGMENTS.iter().find(|s| y >= s.start && y < s.end) {
        Some(segment) => horner(segment.coefficients, (y - segment.anchor) / segment.divisor),
        None => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
    };
    // The polynomials assume a lunar secular acceleration of -26"/cy^2; the
    // canon's value is -25.858, so a small parabolic correction applies
    // everywhere except the fit's 1955-2005 reference span.
    if !(1955.0..=2005.0).contains(&y) {
        dt -= 0.000012932 * (y - 1955.0) * (y - 1955.0);
    }
    dt
}

fn horner(coefficients: &[f64], u: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * u + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_2000_matches_table() {
        assert_eq!(delta_t_seconds(2000.0), 63.86);
    }

    #[test]
    fn value_in_1977_matches_table() {
        // 1977 Feb, decimal year 1977.125: observed ΔT was 47.6 s.
        let dt = delta_t_seconds(1977.125);
        assert!((dt - 47.68).abs() < 0.1, "got {dt}");
    }

    #[test]
    fn value_in_1990_matches_table() {
        let dt = delta_t_seconds(1990.0);
        assert!((dt - 56.86).abs() < 0.2, "got {dt}");
    }

    #[test]
    fn ancient_values_are_hours() {
        let dt = delta_t_seconds(0.0);
        assert!((10_400.0..10_700.0).contains(&dt), "got {dt}");
    }

    #[test]
    fn far_future_uses_parabola() {
        // u = (3000 - 1820)/100 = 11.8
        let dt = delta_t_seconds(3000.0);
        let u: f64 = 11.8;
        let expected = -20.0 + 32.0 * u * u - 0.000012932 * (3000.0_f64 - 1955.0).powi(2);
        assert!((dt - expected).abs() < 1e-9, "got {dt}");
    }

    #[test]
    fn segment_seams_are_nearly_continuous() {
        let seams = [
            -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0,
            1986.0, 2005.0, 2050.0, 2150.0,
        ];
        for y in seams {
            let below = delta_t_seconds(y - 1e-6);
            let above = delta_t_seconds(y + 1e-6);
            assert!(
                (below - above).abs() < 1.5,
                "seam at {y}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn nan_year_yields_nan() {
        assert!(delta_t_seconds(f64::NAN).is_nan());
    }
}
