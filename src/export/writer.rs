//! Writer für den Wegpunkt-Export (`waypoints.json`).

use crate::core::Waypoint;
use anyhow::Result;
use serde::{Serialize, Serializer};
use std::path::Path;

/// Standard-Dateiname des Exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "waypoints.json";

/// Größte Ganzzahl, die ein f64 verlustfrei darstellt (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Export-Zeile: Feldnamen und -reihenfolge sind Teil des Formats.
#[derive(Serialize)]
struct ExportedWaypoint {
    #[serde(serialize_with = "serialize_number")]
    lat: f64,
    #[serde(serialize_with = "serialize_number")]
    lng: f64,
}

impl From<&Waypoint> for ExportedWaypoint {
    fn from(wp: &Waypoint) -> Self {
        Self {
            lat: wp.latitude,
            lng: wp.longitude,
        }
    }
}

/// Schreibt ganzzahlige Werte ohne Nachkommastelle (`0` statt `0.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Serialisiert die Wegpunkte als eingerücktes JSON-Array.
///
/// Werte werden ungerundet übernommen.
pub fn waypoints_to_json(waypoints: &[Waypoint]) -> Result<String> {
    let rows: Vec<ExportedWaypoint> = waypoints.iter().map(ExportedWaypoint::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Schreibt den JSON-Export in eine Datei.
pub fn write_waypoints_file(waypoints: &[Waypoint], path: &Path) -> Result<()> {
    let content = waypoints_to_json(waypoints)?;
    std::fs::write(path, content)?;
    log::info!(
        "{} Wegpunkte exportiert nach: {}",
        waypoints.len(),
        path.display()
    );
    Ok(())
}
