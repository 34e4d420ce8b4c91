//! Geodätische Hilfsfunktionen: Haversine-Distanz und Web-Mercator-Projektion.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Erdradius für die Haversine-Distanz in Kilometern.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Äquatorradius der Web-Mercator-Projektion (EPSG:3857) in Metern.
pub const WEB_MERCATOR_RADIUS_M: f64 = 6_378_137.0;
/// Halbe Kantenlänge der Web-Mercator-Welt in Metern.
pub const WEB_MERCATOR_HALF_EXTENT: f64 = std::f64::consts::PI * WEB_MERCATOR_RADIUS_M;
/// Breitengrad-Grenze, bis zu der Web Mercator definiert ist.
pub const WEB_MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_6;

/// Geografische Koordinate in Grad (Länge, Breite).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Längengrad in Grad
    pub lon: f64,
    /// Breitengrad in Grad
    pub lat: f64,
}

impl Coordinate {
    /// Erstellt eine Koordinate aus Länge und Breite.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Großkreis-Distanz zwischen zwei Koordinaten in Kilometern (Haversine).
///
/// Das Ergebnis ist auf zwei Nachkommastellen gerundet.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    round_2(2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt()))
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Projiziert eine Koordinate nach Web Mercator (Meter).
///
/// Breitengrade jenseits von ±85.0511° werden auf die Projektionsgrenze geklemmt.
pub fn project_web_mercator(coordinate: Coordinate) -> DVec2 {
    let lat = coordinate
        .lat
        .clamp(-WEB_MERCATOR_MAX_LAT, WEB_MERCATOR_MAX_LAT)
        .to_radians();
    DVec2::new(
        WEB_MERCATOR_RADIUS_M * coordinate.lon.to_radians(),
        WEB_MERCATOR_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln(),
    )
}

/// Rechnet eine Web-Mercator-Position (Meter) in Grad zurück.
///
/// Keine Normalisierung: Positionen außerhalb der Weltkante ergeben |lon| > 180.
pub fn unproject_web_mercator(world_pos: DVec2) -> Coordinate {
    let lon = (world_pos.x / WEB_MERCATOR_RADIUS_M).to_degrees();
    let lat = (2.0 * (world_pos.y / WEB_MERCATOR_RADIUS_M).exp().atan()
        - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    Coordinate { lon, lat }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_same_point_is_zero() {
        for c in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.75, 53.55),
            Coordinate::new(-179.9, -89.0),
        ] {
            assert_eq!(distance_km(c, c), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let hamburg = Coordinate::new(9.99, 53.55);
        let kiel = Coordinate::new(10.12, 54.32);
        assert_eq!(distance_km(hamburg, kiel), distance_km(kiel, hamburg));
    }

    #[test]
    fn test_one_degree_latitude_at_equator() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert_eq!(d, 111.19);
    }

    #[test]
    fn test_distance_is_rounded_to_two_decimals() {
        let d = distance_km(Coordinate::new(1.0, 1.0), Coordinate::new(0.0, 1.0));
        assert_relative_eq!(d * 100.0, (d * 100.0).round(), epsilon = 1e-9);
    }

    #[test]
    fn test_web_mercator_origin() {
        let p = project_web_mercator(Coordinate::new(0.0, 0.0));
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_web_mercator_roundtrip() {
        let c = Coordinate::new(-122.42, 37.77);
        let back = unproject_web_mercator(project_web_mercator(c));
        assert_relative_eq!(back.lon, c.lon, epsilon = 1e-9);
        assert_relative_eq!(back.lat, c.lat, epsilon = 1e-9);
    }

    #[test]
    fn test_web_mercator_clamps_poles() {
        let p = project_web_mercator(Coordinate::new(0.0, 90.0));
        assert!(p.y.is_finite());
        assert_relative_eq!(p.y, WEB_MERCATOR_HALF_EXTENT, max_relative = 1e-6);
    }
}
