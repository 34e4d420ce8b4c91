//! Use-Case-Funktionen für Wegpunkte und Selektion.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::{Coordinate, MapSurface};

/// Setzt den Klick-Modus.
pub fn set_interaction_mode(state: &mut AppState, mode: InteractionMode) {
    if state.mode != mode {
        log::info!("Modus: {}", mode.label());
    }
    state.mode = mode;
}

/// Hängt einen Wegpunkt an und setzt den zugehörigen Punkt-Marker.
pub fn append_waypoint(state: &mut AppState, coordinate: Coordinate) -> usize {
    let index = state.waypoints.append(coordinate.into());
    state.markers.add_point_marker(coordinate);

    log::info!(
        "Wegpunkt {} an ({:.5}, {:.5}) hinzugefügt",
        index + 1,
        coordinate.lat,
        coordinate.lon
    );
    index
}

/// Schaltet die Selektion eines Wegpunkts um.
///
/// Der Index wird nicht gegen den Store geprüft.
pub fn toggle_selection(state: &mut AppState, index: usize) {
    let selected = state.selection.toggle(index);
    log::debug!(
        "Wegpunkt {} {} ({} selektiert)",
        index + 1,
        if selected { "selektiert" } else { "abgewählt" },
        state.selection.len()
    );
}

/// Verwirft alle Wegpunkte, Marker und die Selektion.
///
/// Die Selektion wird mitgeleert, weil ihre Indizes sonst veralten.
pub fn reset_waypoints(state: &mut AppState) {
    let count = state.waypoints.len();
    state.waypoints.clear();
    state.markers.clear_all_markers();
    state.selection.clear();
    state.ui.open_row_menu = None;
    log::info!("Reset: {} Wegpunkte verworfen", count);
}
