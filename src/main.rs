//! Marine Mission Planner.
//!
//! Wegpunkte auf einer Karte setzen, Distanzen ablesen, Polygone aus einer
//! Auswahl bilden und die Wegpunkte als JSON exportieren.

use eframe::egui;
use marine_mission_planner::{project, ui, AppController, AppIntent, AppState, PlannerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Marine Mission Planner v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Marine Mission Planner"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Marine Mission Planner",
            options,
            Box::new(|_cc| Ok(Box::new(PlannerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlannerApp {
    state: AppState,
    controller: AppController,
}

impl PlannerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PlannerOptions::config_path();
        let planner_options = PlannerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(planner_options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl PlannerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::handle_export_dialog(
            &mut self.state.ui,
            &self.state.options,
        ));

        if self.state.ui.show_waypoint_dialog {
            let rows = project(&self.state.waypoints);
            events.extend(ui::show_waypoint_dialog(
                ctx,
                &self.state.ui,
                &rows,
                &self.state.selection,
            ));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel| {
                let (rect, response) = panel
                    .allocate_exact_size(panel.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(ui::collect_viewport_events(
                    panel,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    self.state.mode,
                    &self.state.options,
                    !self.state.ui.show_waypoint_dialog,
                ));

                let scene = self.controller.build_map_scene(&self.state, viewport_size);
                ui::paint_map(&panel.painter_at(rect), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_waypoint_dialog
        {
            ctx.request_repaint();
        }
    }
}
