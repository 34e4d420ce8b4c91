//! Handler für Wegpunkt- und Selektions-Operationen.

use crate::app::state::InteractionMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Coordinate;

/// Setzt den Klick-Modus (Navigieren / Wegpunkt setzen).
pub fn set_mode(state: &mut AppState, mode: InteractionMode) {
    use_cases::waypoints::set_interaction_mode(state, mode);
}

/// Hängt einen Wegpunkt an der Koordinate an.
pub fn append(state: &mut AppState, coordinate: Coordinate) {
    use_cases::waypoints::append_waypoint(state, coordinate);
}

/// Schaltet die Selektion eines Wegpunkts um.
pub fn toggle_selection(state: &mut AppState, index: usize) {
    use_cases::waypoints::toggle_selection(state, index);
}

/// Verwirft alle Wegpunkte, Marker und die Selektion.
pub fn reset(state: &mut AppState) {
    use_cases::waypoints::reset_waypoints(state);
}
