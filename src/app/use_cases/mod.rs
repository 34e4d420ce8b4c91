//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod export;
pub mod polygon;
pub mod waypoints;
