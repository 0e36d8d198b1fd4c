//! Great-circle distance between network nodes

use geo::Point;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two WGS84 points
/// (x = longitude, y = latitude, both in degrees).
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_for_identical_points() {
        let p = Point::new(116.4074, 39.9042);
        assert_relative_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let beijing = Point::new(116.4074, 39.9042);
        let shanghai = Point::new(121.4737, 31.2304);
        assert_relative_eq!(
            haversine_km(beijing, shanghai),
            haversine_km(shanghai, beijing),
        );
    }

    #[test]
    fn one_degree_along_the_equator() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert_relative_eq!(
            haversine_km(a, b),
            EARTH_RADIUS_KM * 1.0_f64.to_radians(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn beijing_to_shanghai_is_roughly_1067_km() {
        let beijing = Point::new(116.4074, 39.9042);
        let shanghai = Point::new(121.4737, 31.2304);
        let d = haversine_km(beijing, shanghai);
        assert!((d - 1067.0).abs() < 5.0, "got {d}");
    }
}
