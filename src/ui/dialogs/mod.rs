//! Datei-Dialoge und modale Fenster.

mod file_dialogs;
mod waypoint_dialog;

pub use file_dialogs::handle_export_dialog;
pub use waypoint_dialog::show_waypoint_dialog;
