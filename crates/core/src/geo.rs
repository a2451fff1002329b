//! Equirectangular distance approximation.
//!
//! Good enough for filtering nearby-place results within a few
//! kilometers of a destination; not intended for long-range navigation.

/// Kilometers per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Distance in meters between two WGS84 coordinates, using the
/// equirectangular approximation:
///
/// ```text
/// dx = 111.32 * cos(origin_lat * PI/180) * (lon - origin_lon)
/// dy = 111.32 * (lat - origin_lat)
/// d  = sqrt(dx^2 + dy^2) * 1000
/// ```
pub fn distance_meters(origin_lat: f64, origin_lon: f64, lat: f64, lon: f64) -> f64 {
    let dx = KM_PER_DEGREE * (origin_lat * std::f64::consts::PI / 180.0).cos() * (lon - origin_lon);
    let dy = KM_PER_DEGREE * (lat - origin_lat);
    (dx * dx + dy * dy).sqrt() * 1000.0
}

/// Radius filter used by the nearby-place search. The boundary is
/// inclusive: a place at exactly `radius_m` is kept.
pub fn within_radius(distance_m: f64, radius_m: f64) -> bool {
    distance_m <= radius_m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        assert_eq!(distance_meters(25.317, 82.973, 25.317, 82.973), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_at_equator() {
        let d = distance_meters(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_320.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let at_equator = distance_meters(0.0, 0.0, 0.0, 0.1);
        let at_60_north = distance_meters(60.0, 0.0, 60.0, 0.1);
        // cos(60 deg) = 0.5, so east-west distance should halve.
        assert!((at_60_north - at_equator * 0.5).abs() < 1.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let d = distance_meters(0.0, 0.0, 0.01, 0.0);
        assert!(within_radius(d, d));
    }

    #[test]
    fn beyond_boundary_is_excluded() {
        let d = distance_meters(0.0, 0.0, 0.01, 0.0);
        assert!(!within_radius(d, d - f64::EPSILON * d));
    }
}
