//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::InteractionMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{Coordinate, MapSurface};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::BeginAddWaypointModeRequested => vec![AppCommand::SetInteractionMode {
            mode: InteractionMode::AddWaypoint,
        }],
        AppIntent::NavigateModeRequested => vec![AppCommand::SetInteractionMode {
            mode: InteractionMode::Navigate,
        }],
        AppIntent::MapClicked { world_pos } => {
            let coordinate = state.markers.coordinate_at(world_pos);
            dispatch_map_click(state.mode, coordinate)
        }
        AppIntent::ShowWaypointsRequested => vec![AppCommand::OpenWaypointDialog],
        AppIntent::CloseWaypointsRequested => {
            vec![AppCommand::CloseRowMenu, AppCommand::CloseWaypointDialog]
        }
        AppIntent::ToggleWaypointSelectionRequested { index } => {
            vec![AppCommand::ToggleSelection { index }]
        }
        AppIntent::ToggleRowMenuRequested { index } => vec![AppCommand::ToggleRowMenu { index }],
        AppIntent::InsertPolygonRequested { side } => {
            // Selektion bleibt bestehen, nur das Zeilenmenü schließt
            vec![AppCommand::InsertPolygon { side }, AppCommand::CloseRowMenu]
        }
        AppIntent::ResetRequested => vec![AppCommand::ResetWaypoints],
        AppIntent::ExportRequested => vec![AppCommand::RequestExportDialog],
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ExportWaypoints { path }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Entscheidet anhand des Modus, was ein Kartenklick bewirkt.
///
/// Der Modus wird explizit übergeben statt zur Klickzeit aus
/// geteiltem Zustand gelesen.
pub fn dispatch_map_click(mode: InteractionMode, coordinate: Coordinate) -> Vec<AppCommand> {
    match mode {
        InteractionMode::AddWaypoint => vec![AppCommand::AppendWaypoint { coordinate }],
        InteractionMode::Navigate => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
