//! Geographic coordinates and the live user position.

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};

/// WGS84 latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Geodesic distance in metres
    pub fn distance_to(&self, other: &Coords) -> f64 {
        let start = Point::new(self.lng, self.lat);
        let end = Point::new(other.lng, other.lat);
        Geodesic.distance(start, end)
    }
}

/// Position reported by the platform's location watch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub coords: Coords,
    /// Accuracy radius in metres, when the platform reports one
    pub accuracy: Option<f64>,
}

impl UserLocation {
    pub fn new(lat: f64, lng: f64, accuracy: Option<f64>) -> Self {
        Self { coords: Coords::new(lat, lng), accuracy }
    }
}

/// Short human distance: metres below 1 km, otherwise km with one decimal.
pub fn format_distance(metres: f64) -> String {
    if metres < 1000.0 {
        format!("{} m", (metres / 10.0).round() as i64 * 10)
    } else {
        format!("{:.1} km", metres / 1000.0).replace('.', ",")
    }
}

/// Total length of a polyline in metres
pub fn path_length(points: &[Coords]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_port_to_colon() {
        let port = Coords::new(41.362895, 2.181948);
        let colon = Coords::new(41.375798, 2.177774);
        let d = port.distance_to(&colon);
        // roughly 1.47 km apart
        assert!(d > 1400.0 && d < 1550.0, "got {}", d);
    }

    #[test]
    fn test_distance_is_zero_for_same_point() {
        let p = Coords::new(41.38, 2.17);
        assert!(p.distance_to(&p) < 0.001);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(347.0), "350 m");
        assert_eq!(format_distance(1460.0), "1,5 km");
    }

    #[test]
    fn test_path_length_of_single_point_is_zero() {
        assert_eq!(path_length(&[Coords::new(41.0, 2.0)]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
