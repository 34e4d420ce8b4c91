//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let has_waypoints = !state.waypoints.is_empty();

                if ui.button("Show Waypoints...").clicked() {
                    events.push(AppIntent::ShowWaypointsRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_waypoints, egui::Button::new("Generate Data... (Ctrl+E)"))
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(has_waypoints, egui::Button::new("Reset"))
                    .clicked()
                {
                    events.push(AppIntent::ResetRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Reset View").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
