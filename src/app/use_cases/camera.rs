//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf die Startansicht zurück (Mitte (0, 0), Start-Zoom).
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
    state.view.camera.zoom = state
        .options
        .camera_initial_zoom
        .clamp(state.options.camera_zoom_min, state.options.camera_zoom_max);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<glam::DVec2>) {
    let (min, max) = (state.options.camera_zoom_min, state.options.camera_zoom_max);
    match focus_world {
        Some(focus) => state.view.camera.zoom_towards(factor, focus, min, max),
        None => state.view.camera.zoom_by_clamped(factor, min, max),
    }
}

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_in_out_respects_limits() {
        let mut state = AppState::new();
        state.options.camera_zoom_max = 32.0;
        state.view.camera.zoom = 16.0;

        zoom_in(&mut state);
        zoom_in(&mut state);
        assert_relative_eq!(state.view.camera.zoom, 32.0);

        state.view.camera.zoom = 1.5;
        zoom_out(&mut state);
        assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_min);
    }

    #[test]
    fn test_reset_camera_restores_initial_view() {
        let mut state = AppState::new();
        pan(&mut state, glam::DVec2::new(5.0, 5.0));
        zoom_in(&mut state);

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, glam::DVec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, state.options.camera_initial_zoom);
    }
}
