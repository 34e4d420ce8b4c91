//! Schnittstelle zur Kartenoberfläche und deren Marker-Layer.

use super::geo::{project_web_mercator, unproject_web_mercator, Coordinate};
use super::polygon::ClosedRing;
use glam::DVec2;

/// Marker-Befehle und Klick-Übersetzung der Kartenoberfläche.
///
/// Der Kern spricht die Karte ausschließlich über diese vier Operationen an.
pub trait MapSurface {
    /// Setzt einen Punkt-Marker.
    fn add_point_marker(&mut self, coordinate: Coordinate);
    /// Setzt einen Polygon-Marker aus einem geschlossenen Ring.
    fn add_polygon_marker(&mut self, ring: &ClosedRing);
    /// Entfernt alle Marker.
    fn clear_all_markers(&mut self);
    /// Übersetzt eine Klickposition (Welt-Koordinaten) in eine geografische Koordinate.
    fn coordinate_at(&self, world_pos: DVec2) -> Coordinate;
}

/// Ein auf der Karte dargestelltes Feature in Welt-Koordinaten (Web Mercator).
#[derive(Debug, Clone, PartialEq)]
pub enum MapFeature {
    /// Einzelner Wegpunkt-Marker
    Point(DVec2),
    /// Geschlossener Polygon-Ring
    Polygon(Vec<DVec2>),
}

/// Vektor-Layer mit der Render-Kopie aller Marker.
///
/// Hält die Features unabhängig von Store und Selektion; der Kern
/// gibt Polygone nur einmal ab und behält selbst nichts davon.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    features: Vec<MapFeature>,
}

impl MarkerLayer {
    /// Erstellt einen leeren Layer.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Alle Features in Einfüge-Reihenfolge.
    pub fn features(&self) -> &[MapFeature] {
        &self.features
    }

    /// Anzahl der Punkt-Marker.
    pub fn point_count(&self) -> usize {
        self.features
            .iter()
            .filter(|f| matches!(f, MapFeature::Point(_)))
            .count()
    }

    /// Anzahl der Polygon-Marker.
    pub fn polygon_count(&self) -> usize {
        self.features
            .iter()
            .filter(|f| matches!(f, MapFeature::Polygon(_)))
            .count()
    }
}

impl MapSurface for MarkerLayer {
    fn add_point_marker(&mut self, coordinate: Coordinate) {
        self.features
            .push(MapFeature::Point(project_web_mercator(coordinate)));
    }

    fn add_polygon_marker(&mut self, ring: &ClosedRing) {
        let points = ring
            .coordinates()
            .iter()
            .copied()
            .map(project_web_mercator)
            .collect();
        self.features.push(MapFeature::Polygon(points));
    }

    fn clear_all_markers(&mut self) {
        self.features.clear();
    }

    fn coordinate_at(&self, world_pos: DVec2) -> Coordinate {
        unproject_web_mercator(world_pos)
    }
}
