//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::InteractionMode;
use crate::core::{Coordinate, InsertionSide};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// "Add Waypoint": Klicks setzen ab jetzt Wegpunkte
    BeginAddWaypointModeRequested,
    /// Zurück in den Navigationsmodus (Escape)
    NavigateModeRequested,
    /// Klick auf die Karte (Welt-Koordinaten, Web Mercator)
    MapClicked { world_pos: glam::DVec2 },
    /// Wegpunkt-Fenster öffnen ("Show Waypoints")
    ShowWaypointsRequested,
    /// Wegpunkt-Fenster schließen
    CloseWaypointsRequested,
    /// Checkbox einer Tabellenzeile umgeschaltet
    ToggleWaypointSelectionRequested { index: usize },
    /// Aktionsmenü (⋮) einer Zeile umgeschaltet
    ToggleRowMenuRequested { index: usize },
    /// Polygon aus der Selektion einfügen
    InsertPolygonRequested { side: InsertionSide },
    /// Alle Wegpunkte, Marker und die Selektion verwerfen
    ResetRequested,
    /// Export anstoßen ("Generate Data", zeigt Speichern-Dialog)
    ExportRequested,
    /// Exportpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: String },
    /// Kamera auf Startansicht zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<glam::DVec2>,
    },
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Klick-Modus setzen
    SetInteractionMode { mode: InteractionMode },
    /// Wegpunkt anhängen und Punkt-Marker setzen
    AppendWaypoint { coordinate: Coordinate },
    /// Selektion eines Index umschalten
    ToggleSelection { index: usize },
    /// Polygon aus der Selektion komponieren und als Marker setzen
    InsertPolygon { side: InsertionSide },
    /// Aktionsmenü einer Zeile umschalten
    ToggleRowMenu { index: usize },
    /// Aktionsmenü schließen
    CloseRowMenu,
    /// Store, Marker und Selektion leeren
    ResetWaypoints,
    /// Wegpunkt-Fenster öffnen
    OpenWaypointDialog,
    /// Wegpunkt-Fenster schließen
    CloseWaypointDialog,
    /// Export-Speichern-Dialog anfordern
    RequestExportDialog,
    /// Wegpunkte als JSON in die Datei schreiben
    ExportWaypoints { path: String },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::DVec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f64,
        focus_world: Option<glam::DVec2>,
    },
    /// Anwendung beenden
    RequestExit,
}
