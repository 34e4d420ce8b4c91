//! Zeichnet die Karte (Hintergrund, Gradnetz, Marker) mit dem egui-Painter.

use crate::core::geo::WEB_MERCATOR_MAX_LAT;
use crate::core::{project_web_mercator, unproject_web_mercator, Coordinate, MapFeature};
use crate::shared::MapScene;
use glam::DVec2;

/// Mögliche Gradnetz-Abstände in Grad, grob nach fein.
const GRATICULE_STEPS: [f64; 7] = [30.0, 10.0, 5.0, 1.0, 0.5, 0.1, 0.05];
/// Angestrebte Mindestanzahl sichtbarer Meridiane.
const GRATICULE_MIN_LINES: f64 = 4.0;

/// Wandelt eine RGBA-Option in eine egui-Farbe um.
pub(crate) fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]).into()
}

/// Zeichnet die komplette Map-Szene in `rect`.
pub fn paint_map(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene) {
    let opts = &scene.options;
    painter.rect_filled(rect, 0.0, color32(opts.map_background_color));

    let to_screen = |world: DVec2| world_to_pos(scene, rect, world);

    paint_graticule(painter, rect, scene);

    let point_radius = opts.waypoint_radius_px;
    let point_color = color32(opts.waypoint_color);
    let polygon_stroke = egui::Stroke::new(
        opts.polygon_stroke_width_px,
        color32(opts.polygon_stroke_color),
    );

    for feature in &scene.features {
        match feature {
            MapFeature::Polygon(ring) => {
                let points: Vec<egui::Pos2> = ring.iter().copied().map(to_screen).collect();
                painter.add(egui::Shape::line(points, polygon_stroke));
            }
            MapFeature::Point(world) => {
                let pos = to_screen(*world);
                painter.circle_filled(pos, point_radius, point_color);
                painter.circle_stroke(
                    pos,
                    point_radius,
                    egui::Stroke::new(1.0, egui::Color32::WHITE),
                );
            }
        }
    }

    let highlight = egui::Stroke::new(2.0, color32(opts.selection_color));
    for world in &scene.selected_positions {
        painter.circle_stroke(to_screen(*world), point_radius + 3.0, highlight);
    }

    if scene.add_mode_active {
        painter.text(
            rect.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            "Klicken, um Wegpunkte zu setzen (Esc beendet)",
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
    } else if !scene.has_features() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Noch keine Wegpunkte. \"Add Waypoint\" wählen und auf die Karte klicken",
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }
}

/// Zeichnet Meridiane und Breitenkreise mit zoomabhängigem Abstand.
fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, scene: &MapScene) {
    let size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let top_left = unproject_web_mercator(scene.camera.screen_to_world(DVec2::ZERO, size));
    let bottom_right = unproject_web_mercator(scene.camera.screen_to_world(size, size));

    let lon_min = top_left.lon.max(-180.0);
    let lon_max = bottom_right.lon.min(180.0);
    let lat_min = bottom_right.lat.max(-WEB_MERCATOR_MAX_LAT);
    let lat_max = top_left.lat.min(WEB_MERCATOR_MAX_LAT);
    if lon_min >= lon_max || lat_min >= lat_max {
        return;
    }

    let span = lon_max - lon_min;
    let step = GRATICULE_STEPS
        .iter()
        .copied()
        .find(|s| span / s >= GRATICULE_MIN_LINES)
        .unwrap_or(GRATICULE_STEPS[GRATICULE_STEPS.len() - 1]);

    let stroke = egui::Stroke::new(1.0, color32(scene.options.graticule_color));
    let to_screen = |c: Coordinate| world_to_pos(scene, rect, project_web_mercator(c));

    let mut lon = (lon_min / step).ceil() * step;
    while lon <= lon_max {
        painter.line_segment(
            [
                to_screen(Coordinate::new(lon, lat_max)),
                to_screen(Coordinate::new(lon, lat_min)),
            ],
            stroke,
        );
        lon += step;
    }

    let mut lat = (lat_min / step).ceil() * step;
    while lat <= lat_max {
        painter.line_segment(
            [
                to_screen(Coordinate::new(lon_min, lat)),
                to_screen(Coordinate::new(lon_max, lat)),
            ],
            stroke,
        );
        lat += step;
    }
}

fn world_to_pos(scene: &MapScene, rect: egui::Rect, world: DVec2) -> egui::Pos2 {
    let size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let local = scene.camera.world_to_screen(world, size);
    rect.min + egui::vec2(local.x as f32, local.y as f32)
}
