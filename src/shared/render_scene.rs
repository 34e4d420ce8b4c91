//! Map-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::PlannerOptions;
use crate::core::{Camera2D, MapFeature};
use glam::DVec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct MapScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Render-Kopie aller Marker (Welt-Koordinaten)
    pub features: Vec<MapFeature>,
    /// Weltpositionen der selektierten Wegpunkte (Hervorhebung)
    pub selected_positions: Vec<DVec2>,
    /// Ob der Hinzufügen-Modus aktiv ist (Cursor-Hinweis)
    pub add_mode_active: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: PlannerOptions,
}

impl MapScene {
    /// Gibt zurück, ob überhaupt Marker vorhanden sind.
    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }
}
