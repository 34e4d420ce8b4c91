//! JSON-Export der Wegpunktliste.
//!
//! Das Format ist ein Array von `{"lat": .., "lng": ..}`-Objekten mit
//! 2-Leerzeichen-Einrückung, in Store-Reihenfolge.

pub mod writer;

pub use writer::{waypoints_to_json, write_waypoints_file, DEFAULT_EXPORT_FILE_NAME};
