//! Builder für Map-Szenen aus dem AppState.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::project_web_mercator;
use crate::shared::MapScene;

/// Baut eine MapScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> MapScene {
    // Veraltete Indizes haben keinen Wegpunkt und werden nicht hervorgehoben
    let selected_positions = state
        .selection
        .iter()
        .filter_map(|index| state.waypoints.get(index).ok())
        .map(|wp| project_web_mercator(wp.coordinate()))
        .collect();

    MapScene {
        camera: state.view.camera.clone(),
        viewport_size,
        features: state.markers.features().to_vec(),
        selected_positions,
        add_mode_active: state.mode == InteractionMode::AddWaypoint,
        options: state.options.clone(),
    }
}
