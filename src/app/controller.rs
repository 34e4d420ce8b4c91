//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Wegpunkte & Selektion ===
            AppCommand::SetInteractionMode { mode } => handlers::waypoints::set_mode(state, mode),
            AppCommand::AppendWaypoint { coordinate } => {
                handlers::waypoints::append(state, coordinate)
            }
            AppCommand::ToggleSelection { index } => {
                handlers::waypoints::toggle_selection(state, index)
            }
            AppCommand::ResetWaypoints => handlers::waypoints::reset(state),

            // === Polygone ===
            AppCommand::InsertPolygon { side } => handlers::polygon::insert(state, side),

            // === Export ===
            AppCommand::RequestExportDialog => handlers::export::request_dialog(state),
            AppCommand::ExportWaypoints { path } => handlers::export::write(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenWaypointDialog => handlers::dialog::open_waypoint_dialog(state),
            AppCommand::CloseWaypointDialog => handlers::dialog::close_waypoint_dialog(state),
            AppCommand::ToggleRowMenu { index } => handlers::dialog::toggle_row_menu(state, index),
            AppCommand::CloseRowMenu => handlers::dialog::close_row_menu(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Map-Szene aus dem aktuellen AppState.
    pub fn build_map_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> MapScene {
        render_scene::build(state, viewport_size)
    }
}
