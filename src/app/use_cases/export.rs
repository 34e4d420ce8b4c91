//! Use-Case-Funktionen für den Wegpunkt-Export.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use std::path::Path;

/// Öffnet den Export-Speichern-Dialog über UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Schreibt alle Wegpunkte als JSON nach `path`.
///
/// Fehler werden an den Controller propagiert; bei Erfolg wird der Pfad
/// gemerkt und eine Statusnachricht gesetzt.
pub fn export_waypoints(state: &mut AppState, path: String) -> anyhow::Result<()> {
    if let Err(e) = crate::export::write_waypoints_file(state.waypoints.all(), Path::new(&path)) {
        state.ui.status_message = Some(format!("Export fehlgeschlagen: {}", e));
        return Err(e);
    }

    state.ui.status_message = Some(format!(
        "{} Wegpunkte exportiert: {}",
        state.waypoints.len(),
        path
    ));
    state.ui.last_export_path = Some(path);
    Ok(())
}
