//! Use-Case: Polygon aus der Selektion einfügen.

use crate::app::AppState;
use crate::core::{compose, InsertionSide, MapSurface};

/// Komponiert aus der Selektion einen geschlossenen Ring und setzt ihn als
/// Polygon-Marker.
///
/// Bei weniger als drei gültigen Punkten passiert nichts. Die Selektion
/// bleibt in beiden Fällen erhalten, damit weitere Polygone aus derselben
/// Auswahl entstehen können.
pub fn insert_polygon(state: &mut AppState, side: InsertionSide) -> bool {
    let Some(ring) = compose(&state.selection, &state.waypoints, side) else {
        log::debug!(
            "Kein Polygon eingefügt: {} Punkte selektiert (mindestens 3 nötig)",
            state.selection.len()
        );
        return false;
    };

    state.markers.add_polygon_marker(&ring);
    log::info!(
        "Polygon mit {} Eckpunkten eingefügt ({:?})",
        ring.len() - 1,
        side
    );
    true
}
