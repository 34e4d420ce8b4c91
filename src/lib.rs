//! Marine Mission Planner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use crate::app::{
    AppCommand, AppController, AppIntent, AppState, InteractionMode, UiState, ViewState,
};
pub use crate::core::{
    compose, distance_km, project, Camera2D, ClosedRing, Coordinate, InsertionSide, MapFeature,
    MapSurface, MarkerLayer, SelectionSet, ViewRow, Waypoint, WaypointError, WaypointStore,
};
pub use crate::export::{waypoints_to_json, write_waypoints_file};
pub use crate::shared::{MapScene, PlannerOptions};
