//! Great-circle distance between two coordinates.

use crate::types::coordinate::Coordinate;

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between `from` and `to` in miles.
///
/// `a` is clamped into `[0, 1]` so rounding on identical or antipodal points
/// cannot push the square roots out of their domain. NaN components yield NaN.
#[inline]
pub fn haversine_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES_SQUARE: Coordinate = Coordinate {
        latitude: 40.7580,
        longitude: -73.9855,
    };
    const BROOKLYN_BRIDGE: Coordinate = Coordinate {
        latitude: 40.7061,
        longitude: -73.9969,
    };

    #[test]
    fn quarter_of_the_equator() {
        let distance = haversine_miles(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 90.0));
        let expected = EARTH_RADIUS_MILES * std::f64::consts::FRAC_PI_2;

        // 3959 * pi / 2 is ~6218.8 miles
        assert!((distance - expected).abs() < 1e-6, "equator quarter: {}", distance);
        assert!((distance - 6218.8).abs() < 1.0, "equator quarter: {}", distance);
    }

    #[test]
    fn finite_and_non_negative_across_the_globe() {
        let origin = Coordinate::new(37.77, -122.42);
        let max = std::f64::consts::PI * EARTH_RADIUS_MILES;

        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let point = Coordinate::new(lat as f64, lon as f64);
                let there = haversine_miles(&origin, &point);
                let back = haversine_miles(&point, &origin);

                assert!(there.is_finite() && there >= 0.0, "{:?}: {}", point, there);
                assert!(there <= max + 1e-6, "{:?}: {}", point, there);
                assert!((there - back).abs() < 1e-6, "{:?}: {} vs {}", point, there, back);
            }
        }
    }

    #[test]
    fn same_point_is_zero() {
        let distance = haversine_miles(&TIMES_SQUARE, &TIMES_SQUARE);
        assert!(distance.abs() < 1e-9);
    }

    #[test]
    fn symmetric() {
        let there = haversine_miles(&TIMES_SQUARE, &BROOKLYN_BRIDGE);
        let back = haversine_miles(&BROOKLYN_BRIDGE, &TIMES_SQUARE);
        assert!((there - back).abs() < 1e-9);
        // roughly 3.6 miles across midtown and downtown
        assert!(there > 3.0 && there < 4.0, "midtown to bridge: {}", there);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let distance = haversine_miles(&Coordinate::new(10.0, 20.0), &Coordinate::new(-10.0, -160.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_MILES;

        assert!(distance.is_finite());
        assert!((distance - half).abs() < 1.0, "antipodes: {}", distance);
    }

    #[test]
    fn nan_input_propagates_without_panicking() {
        let distance = haversine_miles(&Coordinate::new(f64::NAN, 0.0), &TIMES_SQUARE);
        assert!(distance.is_nan());
    }
}
