//! 2D-Kamera für Pan und Zoom über der Web-Mercator-Welt.

use super::geo::WEB_MERCATOR_HALF_EXTENT;
use glam::DVec2;

/// 2D-Kamera mit Pan und Zoom
///
/// Welt-Koordinaten sind Web-Mercator-Meter (x nach Osten, y nach Norden).
/// Screen-Koordinaten wachsen nach unten, daher wird y beim Umrechnen gespiegelt.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: DVec2,
    /// Zoom-Faktor (1.0 = ganze Welthöhe sichtbar)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f64 = WEB_MERCATOR_HALF_EXTENT;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 262_144.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Standardgrenzen
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Zoomt so, dass `focus_world` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(&mut self, factor: f64, focus_world: DVec2, min: f64, max: f64) {
        let old_zoom = self.zoom;
        self.zoom_by_clamped(factor, min, max);
        let effective = self.zoom / old_zoom;
        self.position = focus_world + (self.position - focus_world) / effective;
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let ndc = (screen_pos / screen_size) * 2.0 - DVec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        DVec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            -ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Umkehrung von `screen_to_world`).
    pub fn world_to_screen(&self, world_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let aspect = screen_size.x / screen_size.y;
        let rel = world_pos - self.position;
        let ndc = DVec2::new(
            rel.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            -rel.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + DVec2::ONE) * 0.5 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
