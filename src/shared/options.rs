//! Zentrale Konfiguration für den Marine Mission Planner.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::export::DEFAULT_EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (ganze Welt sichtbar).
pub const CAMERA_ZOOM_MIN: f64 = 1.0;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 262_144.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 2.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;
/// Start-Zoom beim Programmstart (entspricht Kachel-Zoomstufe 4).
pub const CAMERA_INITIAL_ZOOM: f64 = 16.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Radius der Wegpunkt-Marker in Screen-Pixeln.
pub const WAYPOINT_RADIUS_PX: f32 = 5.0;
/// Farbe der Wegpunkt-Marker (RGBA: Blau).
pub const WAYPOINT_COLOR: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
/// Farbe der Selektions-Hervorhebung (RGBA: Magenta).
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Linienfarbe der Polygone (RGBA: Blau).
pub const POLYGON_STROKE_COLOR: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
/// Linienstärke der Polygone in Screen-Pixeln.
pub const POLYGON_STROKE_WIDTH_PX: f32 = 1.25;

// ── Karte ───────────────────────────────────────────────────────────

/// Hintergrundfarbe der Karte (RGBA: Dunkelblau, Meer).
pub const MAP_BACKGROUND_COLOR: [f32; 4] = [0.05, 0.12, 0.22, 1.0];
/// Farbe des Gradnetzes (RGBA: halbtransparentes Grau).
pub const GRATICULE_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 0.35];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planner-Optionen.
/// Wird als `marine_mission_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Radius der Wegpunkt-Marker in Pixeln
    pub waypoint_radius_px: f32,
    /// Farbe der Wegpunkt-Marker
    pub waypoint_color: [f32; 4],
    /// Farbe der Selektions-Hervorhebung
    pub selection_color: [f32; 4],
    /// Linienfarbe der Polygone
    pub polygon_stroke_color: [f32; 4],
    /// Linienstärke der Polygone in Pixeln
    pub polygon_stroke_width_px: f32,

    // ── Karte ───────────────────────────────────────────────────
    /// Hintergrundfarbe
    pub map_background_color: [f32; 4],
    /// Farbe des Gradnetzes
    pub graticule_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
    /// Start-Zoom
    #[serde(default = "default_initial_zoom")]
    pub camera_initial_zoom: f64,

    // ── Export ──────────────────────────────────────────────────
    /// Vorgeschlagener Dateiname im Speichern-Dialog
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            waypoint_radius_px: WAYPOINT_RADIUS_PX,
            waypoint_color: WAYPOINT_COLOR,
            selection_color: SELECTION_COLOR,
            polygon_stroke_color: POLYGON_STROKE_COLOR,
            polygon_stroke_width_px: POLYGON_STROKE_WIDTH_PX,

            map_background_color: MAP_BACKGROUND_COLOR,
            graticule_color: GRATICULE_COLOR,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            camera_initial_zoom: CAMERA_INITIAL_ZOOM,

            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Serde-Default für `camera_initial_zoom` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_initial_zoom() -> f64 {
    CAMERA_INITIAL_ZOOM
}

/// Serde-Default für `export_file_name`.
fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("marine_mission_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("marine_mission_planner.toml")
    }
}
