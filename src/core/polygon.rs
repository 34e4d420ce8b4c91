//! Polygon-Komposition aus selektierten Wegpunkten.

use super::geo::Coordinate;
use super::selection::SelectionSet;
use super::waypoint_store::WaypointStore;

/// Mindestanzahl an Eckpunkten für ein Polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Seite, an der der schließende Eckpunkt eingefügt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionSide {
    /// Letzten Punkt vorne einfügen
    Before,
    /// Ersten Punkt hinten anhängen
    After,
}

/// Geschlossener Ring: erster und letzter Punkt sind identisch.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedRing(Vec<Coordinate>);

impl ClosedRing {
    /// Alle Punkte inklusive des schließenden Duplikats.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    /// Anzahl der Punkte inklusive des schließenden Duplikats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Ein gültiger Ring ist nie leer.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Baut aus der Selektion einen geschlossenen Ring.
///
/// Die Eckpunkte folgen der Auswahl-Reihenfolge. Indizes, die im Store nicht
/// (mehr) existieren, werden übersprungen. Bei weniger als drei Punkten
/// entsteht kein Ring.
///
/// - `Before`: `[p1, p2, p3]` → `[p3, p1, p2, p3]`
/// - `After`: `[p1, p2, p3]` → `[p1, p2, p3, p1]`
pub fn compose(
    selection: &SelectionSet,
    store: &WaypointStore,
    side: InsertionSide,
) -> Option<ClosedRing> {
    let mut coords: Vec<Coordinate> = selection
        .iter()
        .filter_map(|index| store.get(index).ok().map(|wp| wp.coordinate()))
        .collect();

    if coords.len() < MIN_POLYGON_VERTICES {
        return None;
    }

    match side {
        InsertionSide::Before => {
            let last = coords[coords.len() - 1];
            coords.insert(0, last);
        }
        InsertionSide::After => {
            let first = coords[0];
            coords.push(first);
        }
    }

    Some(ClosedRing(coords))
}
