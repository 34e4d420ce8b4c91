//! Toolbar für Klick-Modus und Wegpunkt-Fenster.

use crate::app::{AppIntent, AppState, InteractionMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mode = state.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            if ui
                .add(egui::Button::new("✋ Navigate (Esc)").selected(mode == InteractionMode::Navigate))
                .clicked()
            {
                events.push(AppIntent::NavigateModeRequested);
            }

            if ui
                .add(
                    egui::Button::new("📍 Add Waypoint (W)")
                        .selected(mode == InteractionMode::AddWaypoint),
                )
                .clicked()
            {
                events.push(AppIntent::BeginAddWaypointModeRequested);
            }

            ui.separator();

            if ui.button("📋 Show Waypoints").clicked() {
                events.push(AppIntent::ShowWaypointsRequested);
            }

            if mode == InteractionMode::AddWaypoint {
                ui.separator();
                ui.label("Klick auf die Karte setzt einen Wegpunkt");
            }
        });
    });

    events
}
