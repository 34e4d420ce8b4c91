//! Core-Domänentypen: Wegpunkte, Selektion, Polygone, Distanzen, Kamera.

pub mod camera;
pub mod geo;
pub mod map_surface;
pub mod polygon;
pub mod selection;
pub mod view_row;
/// Wegpunktliste mit stabilen Indizes
pub mod waypoint_store;

pub use camera::Camera2D;
pub use geo::{distance_km, project_web_mercator, unproject_web_mercator, Coordinate};
pub use map_surface::{MapFeature, MapSurface, MarkerLayer};
pub use polygon::{compose, ClosedRing, InsertionSide};
pub use selection::SelectionSet;
pub use view_row::{project, ViewRow};
pub use waypoint_store::{Waypoint, WaypointError, WaypointStore};
