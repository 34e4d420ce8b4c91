//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::unproject_web_mercator;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Waypoints: {} | Selected: {} | Polygons: {}",
                state.waypoint_count(),
                state.selected_count(),
                state.markers.polygon_count()
            ));

            ui.separator();

            let center = unproject_web_mercator(state.view.camera.position);
            ui.label(format!(
                "Zoom: {:.2}x | Center: ({:.4}, {:.4})",
                state.view.camera.zoom, center.lat, center.lon
            ));

            ui.separator();

            ui.label(format!("Modus: {}", state.mode.label()));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
