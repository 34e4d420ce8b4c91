//! UI-Komponenten: Menü, Toolbar, Karte, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten lesen nur den AppState und geben `AppIntent`s zurück.
pub mod map_view;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_export_dialog, show_waypoint_dialog};
pub use input::collect_viewport_events;
pub use map_view::paint_map;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
