use approx::assert_relative_eq;
use glam::DVec2;
use marine_mission_planner::core::project_web_mercator;
use marine_mission_planner::{
    AppCommand, AppController, AppIntent, AppState, Coordinate, InsertionSide, InteractionMode,
    MapFeature, WaypointError,
};

fn append_all(controller: &mut AppController, state: &mut AppState, coords: &[(f64, f64)]) {
    for &(lon, lat) in coords {
        controller
            .handle_command(
                state,
                AppCommand::AppendWaypoint {
                    coordinate: Coordinate::new(lon, lat),
                },
            )
            .expect("AppendWaypoint sollte ohne Fehler durchlaufen");
    }
}

fn select_all(controller: &mut AppController, state: &mut AppState, indices: &[usize]) {
    for &index in indices {
        controller
            .handle_intent(state, AppIntent::ToggleWaypointSelectionRequested { index })
            .expect("Selektion sollte ohne Fehler durchlaufen");
    }
}

fn temp_export_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "marine_mission_planner_{}_{}.json",
        name,
        std::process::id()
    ))
}

#[test]
fn test_full_flow_append_select_polygon_export() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    append_all(
        &mut controller,
        &mut state,
        &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)],
    );
    select_all(&mut controller, &mut state, &[0, 1, 2]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::InsertPolygonRequested {
                side: InsertionSide::After,
            },
        )
        .expect("InsertPolygon sollte ohne Fehler durchlaufen");

    assert_eq!(state.markers.point_count(), 3);
    assert_eq!(state.markers.polygon_count(), 1);

    let expected_ring: Vec<DVec2> = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]
        .into_iter()
        .map(|(lon, lat)| project_web_mercator(Coordinate::new(lon, lat)))
        .collect();
    match state.markers.features().last() {
        Some(MapFeature::Polygon(points)) => assert_eq!(points, &expected_ring),
        other => panic!("Polygon erwartet, erhalten: {other:?}"),
    }

    let path = temp_export_path("full_flow");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Export sollte ohne Fehler durchlaufen");

    let written = std::fs::read_to_string(&path).expect("Exportdatei sollte existieren");
    let _ = std::fs::remove_file(&path);

    let parsed: serde_json::Value = serde_json::from_str(&written).expect("gültiges JSON");
    let expected = serde_json::json!([
        {"lat": 0, "lng": 0},
        {"lat": 1, "lng": 0},
        {"lat": 1, "lng": 1}
    ]);
    assert_eq!(parsed, expected);
    assert!(written.starts_with("[\n  {\n    \"lat\": 0,"));
    assert!(state.ui.last_export_path.is_some());
}

#[test]
fn test_map_click_in_add_mode_appends_waypoint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::BeginAddWaypointModeRequested)
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");
    assert_eq!(state.mode, InteractionMode::AddWaypoint);

    let world_pos = project_web_mercator(Coordinate::new(9.99, 53.55));
    controller
        .handle_intent(&mut state, AppIntent::MapClicked { world_pos })
        .expect("MapClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.waypoint_count(), 1);
    assert_eq!(state.markers.point_count(), 1);
    let wp = state.waypoints.get(0).expect("Wegpunkt 0 erwartet");
    assert_relative_eq!(wp.latitude, 53.55, epsilon = 1e-9);
    assert_relative_eq!(wp.longitude, 9.99, epsilon = 1e-9);
}

#[test]
fn test_map_click_in_navigate_mode_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                world_pos: DVec2::new(1000.0, 1000.0),
            },
        )
        .expect("MapClicked sollte ohne Fehler durchlaufen");

    assert!(state.waypoints.is_empty());
    assert!(state.markers.features().is_empty());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_add_mode_stays_active_until_navigate() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::BeginAddWaypointModeRequested)
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");

    for _ in 0..3 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::MapClicked {
                    world_pos: DVec2::ZERO,
                },
            )
            .expect("MapClicked sollte ohne Fehler durchlaufen");
    }
    assert_eq!(state.waypoint_count(), 3);

    controller
        .handle_intent(&mut state, AppIntent::NavigateModeRequested)
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                world_pos: DVec2::ZERO,
            },
        )
        .expect("MapClicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.waypoint_count(), 3);
}

#[test]
fn test_selection_persists_after_polygon_insert() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    append_all(
        &mut controller,
        &mut state,
        &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
    );
    select_all(&mut controller, &mut state, &[3, 1, 0]);

    controller
        .handle_intent(&mut state, AppIntent::ToggleRowMenuRequested { index: 2 })
        .expect("Zeilenmenü sollte ohne Fehler öffnen");
    assert_eq!(state.ui.open_row_menu, Some(2));

    controller
        .handle_intent(
            &mut state,
            AppIntent::InsertPolygonRequested {
                side: InsertionSide::Before,
            },
        )
        .expect("InsertPolygon sollte ohne Fehler durchlaufen");

    assert_eq!(state.ui.open_row_menu, None);
    assert_eq!(state.selected_count(), 3);
    assert_eq!(
        state.selection.iter().collect::<Vec<_>>(),
        vec![3, 1, 0]
    );

    // Before: letzter Selektionspunkt wird vorangestellt
    let expected_ring: Vec<DVec2> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]
        .into_iter()
        .map(|(lon, lat)| project_web_mercator(Coordinate::new(lon, lat)))
        .collect();
    match state.markers.features().last() {
        Some(MapFeature::Polygon(points)) => assert_eq!(points, &expected_ring),
        other => panic!("Polygon erwartet, erhalten: {other:?}"),
    }

    // Zweites Polygon aus derselben Selektion
    controller
        .handle_intent(
            &mut state,
            AppIntent::InsertPolygonRequested {
                side: InsertionSide::After,
            },
        )
        .expect("InsertPolygon sollte ohne Fehler durchlaufen");
    assert_eq!(state.markers.polygon_count(), 2);
}

#[test]
fn test_polygon_with_two_selected_points_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    append_all(&mut controller, &mut state, &[(0.0, 0.0), (0.0, 1.0)]);
    select_all(&mut controller, &mut state, &[0, 1]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::InsertPolygonRequested {
                side: InsertionSide::After,
            },
        )
        .expect("InsertPolygon sollte ohne Fehler durchlaufen");

    assert_eq!(state.markers.polygon_count(), 0);
    assert_eq!(state.markers.point_count(), 2);
}

#[test]
fn test_reset_clears_store_markers_and_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    append_all(
        &mut controller,
        &mut state,
        &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)],
    );
    select_all(&mut controller, &mut state, &[0, 1, 2]);
    controller
        .handle_intent(
            &mut state,
            AppIntent::InsertPolygonRequested {
                side: InsertionSide::After,
            },
        )
        .expect("InsertPolygon sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert!(state.waypoints.is_empty());
    assert!(state.selection.is_empty());
    assert!(state.markers.features().is_empty());
    assert!(marine_mission_planner::project(&state.waypoints).is_empty());
}

#[test]
fn test_show_and_close_waypoint_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ShowWaypointsRequested)
        .expect("Dialog sollte ohne Fehler öffnen");
    assert!(state.ui.show_waypoint_dialog);

    controller
        .handle_intent(&mut state, AppIntent::ToggleRowMenuRequested { index: 0 })
        .expect("Zeilenmenü sollte ohne Fehler öffnen");
    controller
        .handle_intent(&mut state, AppIntent::CloseWaypointsRequested)
        .expect("Dialog sollte ohne Fehler schließen");

    assert!(!state.ui.show_waypoint_dialog);
    assert_eq!(state.ui.open_row_menu, None);
}

#[test]
fn test_export_requested_opens_save_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_export_dialog);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RequestExportDialog)
    );
}

#[test]
fn test_export_to_invalid_path_returns_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append_all(&mut controller, &mut state, &[(0.0, 0.0)]);

    let path = std::env::temp_dir()
        .join("marine_mission_planner_missing_dir")
        .join("nested")
        .join("waypoints.json");
    let result = controller.handle_intent(
        &mut state,
        AppIntent::ExportPathSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );

    assert!(result.is_err());
    assert!(state.ui.last_export_path.is_none());
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_out_of_range_get_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    append_all(&mut controller, &mut state, &[(0.0, 0.0)]);

    match state.waypoints.get(5) {
        Err(WaypointError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 1);
        }
        other => panic!("IndexOutOfRange erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RequestExit)
    );
}
