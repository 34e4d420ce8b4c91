//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet das Wegpunkt-Fenster.
pub fn open_waypoint_dialog(state: &mut AppState) {
    state.ui.show_waypoint_dialog = true;
}

/// Schließt das Wegpunkt-Fenster.
pub fn close_waypoint_dialog(state: &mut AppState) {
    state.ui.show_waypoint_dialog = false;
}

/// Öffnet das Aktionsmenü einer Zeile oder schließt es, falls es schon offen ist.
pub fn toggle_row_menu(state: &mut AppState, index: usize) {
    state.ui.open_row_menu = if state.ui.open_row_menu == Some(index) {
        None
    } else {
        Some(index)
    };
}

/// Schließt das Aktionsmenü.
pub fn close_row_menu(state: &mut AppState) {
    state.ui.open_row_menu = None;
}
