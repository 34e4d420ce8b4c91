//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Camera2D, MarkerLayer, SelectionSet, WaypointStore};
use crate::shared::PlannerOptions;

/// Interaktionsmodus für Klicks auf die Karte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Standard: Karte verschieben und zoomen, Klicks ohne Wirkung
    #[default]
    Navigate,
    /// Jeder Klick setzt einen neuen Wegpunkt
    AddWaypoint,
}

impl InteractionMode {
    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Navigate => "Navigieren",
            InteractionMode::AddWaypoint => "Wegpunkt setzen",
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob das Wegpunkt-Fenster (Tabelle) sichtbar ist
    pub show_waypoint_dialog: bool,
    /// Zeile, deren Aktionsmenü geöffnet ist (maximal eine)
    pub open_row_menu: Option<usize>,
    /// Ob der Export-Speichern-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Export-Ergebnis)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_waypoint_dialog: false,
            open_row_menu: None,
            show_export_dialog: false,
            last_export_path: None,
            status_message: None,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
///
/// Wird per Referenz an Controller, UI und Kartenoberfläche gereicht;
/// es gibt keinen weiteren versteckten Zustand.
pub struct AppState {
    /// Geordnete Wegpunktliste
    pub waypoints: WaypointStore,
    /// Für Polygone vorgemerkte Wegpunkt-Indizes
    pub selection: SelectionSet,
    /// Marker-Layer der Kartenoberfläche (Render-Kopie)
    pub markers: MarkerLayer,
    /// Aktueller Klick-Modus
    pub mode: InteractionMode,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Zoom)
    pub options: PlannerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(PlannerOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    ///
    /// Die Kamera startet über (0, 0) mit dem konfigurierten Start-Zoom.
    pub fn with_options(options: PlannerOptions) -> Self {
        let mut view = ViewState::new();
        view.camera.zoom = options.camera_initial_zoom;

        Self {
            waypoints: WaypointStore::new(),
            selection: SelectionSet::new(),
            markers: MarkerLayer::new(),
            mode: InteractionMode::Navigate,
            view,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Wegpunkte zurück (für UI-Anzeige)
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt die Anzahl selektierter Wegpunkte zurück (für UI-Anzeige)
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
