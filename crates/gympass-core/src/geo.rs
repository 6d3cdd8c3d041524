//! Great-circle distance between geographic coordinates.
//!
//! Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. Any
//! finite input is accepted, including latitudes and longitudes outside their
//! real-world ranges; range checks belong to whoever produces the coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to `other` in kilometers. See [`distance_km`].
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        distance_km(self, other)
    }

    /// Whether both components are finite numbers.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Great-circle surface distance between `from` and `to`, in kilometers.
///
/// Returns exactly `0.0` for identical points.
#[must_use]
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let half_dlat = ((to.latitude - from.latitude).to_radians() / 2.0).sin();
    let half_dlon = ((to.longitude - from.longitude).to_radians() / 2.0).sin();

    let a = lat1
        .cos()
        .mul_add(lat2.cos() * half_dlon * half_dlon, half_dlat * half_dlat);
    // Rounding can push `a` a hair past 1.0 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const GYM: Coordinate = Coordinate::new(-23.280_504_5, -45.894_463_8);

    #[test]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance_km(GYM, GYM), 0.0);
    }

    #[rstest]
    #[case::twenty_km_east(Coordinate::new(-23.213_451_3, -45.673_399_8), 20.0, 25.0)]
    #[case::walk_to_the_corner(Coordinate::new(-23.287_95, -45.894_37), 0.8, 0.9)]
    #[case::far_gym(Coordinate::new(-23.064_247_6, -46.418_285_8), 55.0, 60.0)]
    fn known_distances(#[case] other: Coordinate, #[case] min_km: f64, #[case] max_km: f64) {
        let d = distance_km(GYM, other);
        assert!(d > min_km && d < max_km, "distance {d} not in ({min_km}, {max_km})");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference_apart() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn out_of_range_input_is_still_a_distance() {
        let d = distance_km(Coordinate::new(95.0, 400.0), Coordinate::new(-120.0, -500.0));
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn distance_to_matches_free_function() {
        let other = Coordinate::new(-23.213_451_3, -45.673_399_8);
        assert_eq!(GYM.distance_to(other), distance_km(GYM, other));
    }
}
