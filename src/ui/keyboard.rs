//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, InteractionMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, mode: InteractionMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // W (Wegpunkt-Modus), Escape (Navigieren), Ctrl+E (Export), +/- (Zoom)
    let (modifiers, key_w, key_escape, key_e, key_plus, key_minus) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::W),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if key_w && !modifiers.command && mode != InteractionMode::AddWaypoint {
        events.push(AppIntent::BeginAddWaypointModeRequested);
    }

    if key_escape && mode != InteractionMode::Navigate {
        events.push(AppIntent::NavigateModeRequested);
    }

    if modifiers.command && key_e {
        events.push(AppIntent::ExportRequested);
    }

    if key_plus {
        events.push(AppIntent::ZoomInRequested);
    }

    if key_minus {
        events.push(AppIntent::ZoomOutRequested);
    }

    events
}
