//! Viewport-Input-Handling: Klicks, Drag-Pan, Scroll-Zoom → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, Camera2D, InteractionMode};
use crate::shared::PlannerOptions;
use glam::DVec2;

/// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
///
/// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und Tastatur-Eingaben
/// auf der Karte. Was ein Klick bewirkt, entscheidet erst das Intent-Mapping
/// anhand des Modus.
pub fn collect_viewport_events(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
    mode: InteractionMode,
    options: &PlannerOptions,
    keyboard_enabled: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    events.push(AppIntent::ViewportResized {
        size: viewport_size,
    });

    if keyboard_enabled {
        events.extend(keyboard::collect_keyboard_intents(ui, mode));
    }

    // Klick → Weltposition; der Modus wird erst im Mapping ausgewertet
    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let world_pos = screen_pos_to_world(pointer_pos, response, viewport_size, camera);
            events.push(AppIntent::MapClicked { world_pos });
        }
    }

    // Drag (beliebige Taste) → Kamera-Pan
    if response.dragged() {
        let delta = ui.input(|i| i.pointer.delta());
        if delta != egui::Vec2::ZERO {
            let wpp = camera.world_per_pixel(viewport_size[1] as f64);
            // Screen-y wächst nach unten, Welt-y nach Norden
            events.push(AppIntent::CameraPan {
                delta: DVec2::new(-delta.x as f64 * wpp, delta.y as f64 * wpp),
            });
        }
    }

    // Scroll-Zoom auf Mausposition
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let step = options.camera_scroll_zoom_step;
            let factor = if scroll > 0.0 { step } else { 1.0 / step };
            let focus_world = response
                .hover_pos()
                .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));
            events.push(AppIntent::CameraZoom {
                factor,
                focus_world,
            });
        }
    }

    events
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        DVec2::new(local.x as f64, local.y as f64),
        DVec2::new(viewport_size[0] as f64, viewport_size[1] as f64),
    )
}
