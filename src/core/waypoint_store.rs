//! Geordnete Wegpunktliste mit stabilen Positions-Indizes.

use super::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Fehler beim Zugriff auf den Waypoint-Store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaypointError {
    /// Index liegt außerhalb der aktuellen Liste
    #[error("Waypoint-Index {index} außerhalb des gültigen Bereichs (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ein vom Benutzer gesetzter Wegpunkt.
///
/// Unveränderlich; die Identität ist allein die Position im Store.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    /// Breitengrad in Grad
    pub latitude: f64,
    /// Längengrad in Grad
    pub longitude: f64,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt aus Breite und Länge.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gibt den Wegpunkt als (Länge, Breite)-Koordinate zurück.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.longitude, self.latitude)
    }
}

impl From<Coordinate> for Waypoint {
    fn from(c: Coordinate) -> Self {
        Self::new(c.lat, c.lon)
    }
}

/// Append-only Wegpunktliste (bis zum Reset).
///
/// Einzelne Einträge können nicht gelöscht werden, daher bleiben Indizes
/// zwischen zwei `clear()`-Aufrufen stabil.
#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Hängt einen Wegpunkt an und gibt seinen Index zurück.
    ///
    /// Koordinaten werden nicht auf gültige Bereiche geprüft.
    pub fn append(&mut self, waypoint: Waypoint) -> usize {
        let index = self.waypoints.len();
        self.waypoints.push(waypoint);
        index
    }

    /// Leert den Store. Alle bisher vergebenen Indizes werden ungültig.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    /// Liefert den Wegpunkt an `index`.
    pub fn get(&self, index: usize) -> Result<&Waypoint, WaypointError> {
        self.waypoints
            .get(index)
            .ok_or(WaypointError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            })
    }

    /// Alle Wegpunkte in Einfüge-Reihenfolge.
    pub fn all(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Iteriert über alle Wegpunkte als Koordinaten.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.waypoints.iter().map(Waypoint::coordinate)
    }

    /// Anzahl der Wegpunkte.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt `true` zurück, wenn keine Wegpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
