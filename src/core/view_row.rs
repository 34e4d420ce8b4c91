//! Tabellenzeilen für die Wegpunkt-Übersicht.

use super::geo::distance_km;
use super::waypoint_store::{Waypoint, WaypointStore};

/// Eine abgeleitete Tabellenzeile pro Wegpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    /// 1-basierte laufende Nummer
    pub serial_number: usize,
    /// Formatierte Koordinate `"lat, lng"`
    pub coordinates: String,
    /// Distanz zum vorherigen Wegpunkt in km (0 für die erste Zeile)
    pub distance_km: f64,
}

impl ViewRow {
    /// Distanz als Anzeigetext: erste Zeile `0`, sonst zwei Nachkommastellen.
    pub fn distance_label(&self) -> String {
        if self.serial_number == 1 {
            "0".to_string()
        } else {
            format!("{:.2}", self.distance_km)
        }
    }
}

/// Formatiert einen Wegpunkt als `"lat, lng"`.
pub fn format_coordinates(waypoint: &Waypoint) -> String {
    format!("{}, {}", waypoint.latitude, waypoint.longitude)
}

/// Projiziert den Store auf Tabellenzeilen.
pub fn project(store: &WaypointStore) -> Vec<ViewRow> {
    let waypoints = store.all();
    waypoints
        .iter()
        .enumerate()
        .map(|(i, wp)| ViewRow {
            serial_number: i + 1,
            coordinates: format_coordinates(wp),
            distance_km: if i > 0 {
                distance_km(waypoints[i - 1].coordinate(), wp.coordinate())
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Coordinate;

    #[test]
    fn test_project_empty_store() {
        assert!(project(&WaypointStore::new()).is_empty());
    }

    #[test]
    fn test_project_distances_to_previous() {
        let w0 = Coordinate::new(0.0, 0.0);
        let w1 = Coordinate::new(0.0, 1.0);
        let w2 = Coordinate::new(1.0, 1.0);
        let mut store = WaypointStore::new();
        for c in [w0, w1, w2] {
            store.append(c.into());
        }

        let rows = project(&store);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].distance_km, 0.0);
        assert_eq!(rows[1].distance_km, distance_km(w0, w1));
        assert_eq!(rows[2].distance_km, distance_km(w1, w2));
        assert_eq!(
            rows.iter().map(|r| r.serial_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_coordinates_formatted_lat_first() {
        let mut store = WaypointStore::new();
        store.append(Waypoint::new(53.5, 9.25));
        store.append(Waypoint::new(0.0, -1.0));
        let rows = project(&store);
        assert_eq!(rows[0].coordinates, "53.5, 9.25");
        assert_eq!(rows[1].coordinates, "0, -1");
    }

    #[test]
    fn test_distance_label() {
        let mut store = WaypointStore::new();
        store.append(Coordinate::new(0.0, 0.0).into());
        store.append(Coordinate::new(0.0, 1.0).into());
        let rows = project(&store);
        assert_eq!(rows[0].distance_label(), "0");
        assert_eq!(rows[1].distance_label(), "111.19");
    }
}
