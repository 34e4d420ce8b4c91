use crate::app::{AppIntent, UiState};
use crate::core::{InsertionSide, SelectionSet, ViewRow};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 22.0;
const TABLE_MAX_HEIGHT: f32 = 300.0;

/// Zeigt die Wegpunkt-Tabelle als modales Fenster.
///
/// Spalten: Auswahl, laufende Nummer, Koordinaten, Distanz zum Vorgänger,
/// Aktionsmenü. Darunter Reset und Export.
pub fn show_waypoint_dialog(
    ctx: &egui::Context,
    ui_state: &UiState,
    rows: &[ViewRow],
    selection: &SelectionSet,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !ui_state.show_waypoint_dialog {
        return events;
    }

    let modal = egui::Modal::new(egui::Id::new("waypoint_dialog")).show(ctx, |ui| {
        ui.set_min_width(640.0);
        ui.vertical_centered(|ui| {
            ui.heading("Coordinates");
        });
        ui.add_space(8.0);

        let mut menu_anchor: Option<egui::Pos2> = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder().at_least(200.0))
            .column(Column::auto())
            .column(Column::auto())
            .max_scroll_height(TABLE_MAX_HEIGHT)
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Select", "Node Point", "Coordinates", "Distance (KM)", "Actions"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for (index, row) in rows.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        table_row.col(|ui| {
                            let mut checked = selection.contains(index);
                            if ui.checkbox(&mut checked, "").changed() {
                                events.push(AppIntent::ToggleWaypointSelectionRequested { index });
                            }
                        });
                        table_row.col(|ui| {
                            ui.label(row.serial_number.to_string());
                        });
                        table_row.col(|ui| {
                            ui.label(&row.coordinates);
                        });
                        table_row.col(|ui| {
                            ui.label(row.distance_label());
                        });
                        table_row.col(|ui| {
                            let button = ui.small_button("⋮");
                            if button.clicked() {
                                events.push(AppIntent::ToggleRowMenuRequested { index });
                            }
                            if ui_state.open_row_menu == Some(index) {
                                menu_anchor = Some(button.rect.right_center());
                            }
                        });
                    });
                }
            });

        if rows.is_empty() {
            ui.label("Noch keine Wegpunkte gesetzt.");
        }

        if let Some(anchor) = menu_anchor {
            show_row_menu(ui.ctx(), anchor, &mut events);
        }

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                events.push(AppIntent::ResetRequested);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let generate = egui::Button::new(
                    egui::RichText::new("Generate Data").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::DARK_GREEN);
                if ui.add(generate).clicked() {
                    events.push(AppIntent::ExportRequested);
                }
            });
        });
    });

    if modal.should_close() {
        events.push(AppIntent::CloseWaypointsRequested);
    }

    events
}

/// Aktionsmenü einer Zeile neben dem ⋮-Button.
fn show_row_menu(ctx: &egui::Context, anchor: egui::Pos2, events: &mut Vec<AppIntent>) {
    egui::Area::new(egui::Id::new("waypoint_row_menu"))
        .order(egui::Order::Tooltip)
        .fixed_pos(anchor + egui::vec2(4.0, -ROW_HEIGHT))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(180.0);
                if ui.button("Insert Polygon Before").clicked() {
                    events.push(AppIntent::InsertPolygonRequested {
                        side: InsertionSide::Before,
                    });
                }
                if ui.button("Insert Polygon After").clicked() {
                    events.push(AppIntent::InsertPolygonRequested {
                        side: InsertionSide::After,
                    });
                }
            });
        });
}
