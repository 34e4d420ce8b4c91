//! Handler für den Wegpunkt-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Speichern-Dialog für den Export.
pub fn request_dialog(state: &mut AppState) {
    use_cases::export::request_export_dialog(state);
}

/// Schreibt den Export unter dem gewählten Pfad.
pub fn write(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_waypoints(state, path)
}
