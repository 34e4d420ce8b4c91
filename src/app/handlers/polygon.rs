//! Handler für das Einfügen von Polygonen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::InsertionSide;

/// Fügt ein Polygon aus der aktuellen Selektion ein (stiller No-op bei < 3 Punkten).
pub fn insert(state: &mut AppState, side: InsertionSide) {
    use_cases::polygon::insert_polygon(state, side);
}
