use crate::app::{AppIntent, UiState};
use crate::shared::PlannerOptions;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Öffnet den ausstehenden Export-Speichern-Dialog und gibt AppIntents zurück.
///
/// Der Dateiname ist mit `export_file_name` aus den Optionen vorbelegt.
/// Abbrechen erzeugt keinen Intent.
pub fn handle_export_dialog(ui_state: &mut UiState, options: &PlannerOptions) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(&options.export_file_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        } else {
            log::debug!("Export-Dialog abgebrochen");
        }
    }

    events
}
