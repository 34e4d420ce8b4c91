use crate::app::state::InteractionMode;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{project_web_mercator, Coordinate, InsertionSide};

use super::{dispatch_map_click, map_intent_to_commands};

#[test]
fn begin_add_waypoint_mode_maps_to_set_mode() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::BeginAddWaypointModeRequested);

    assert_eq!(
        commands,
        vec![AppCommand::SetInteractionMode {
            mode: InteractionMode::AddWaypoint
        }]
    );
}

#[test]
fn map_click_in_navigate_mode_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            world_pos: glam::DVec2::new(1000.0, 2000.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn map_click_in_add_mode_appends_unprojected_coordinate() {
    let mut state = AppState::new();
    state.mode = InteractionMode::AddWaypoint;
    let world_pos = project_web_mercator(Coordinate::new(10.0, 54.0));

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { world_pos });

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::AppendWaypoint { coordinate } => {
            assert!((coordinate.lon - 10.0).abs() < 1e-9);
            assert!((coordinate.lat - 54.0).abs() < 1e-9);
        }
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn dispatch_map_click_depends_only_on_mode() {
    let c = Coordinate::new(1.0, 2.0);

    assert!(dispatch_map_click(InteractionMode::Navigate, c).is_empty());
    assert_eq!(
        dispatch_map_click(InteractionMode::AddWaypoint, c),
        vec![AppCommand::AppendWaypoint { coordinate: c }]
    );
}

#[test]
fn insert_polygon_maps_to_insert_then_close_menu() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::InsertPolygonRequested {
            side: InsertionSide::Before,
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::InsertPolygon {
                side: InsertionSide::Before
            },
            AppCommand::CloseRowMenu,
        ]
    );
}

#[test]
fn export_path_selected_maps_to_export_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ExportPathSelected {
            path: "/tmp/waypoints.json".to_string(),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::ExportWaypoints {
            path: "/tmp/waypoints.json".to_string()
        }]
    );
}
