use atlas_node_tree_viewer::ui::input::{PointerTracker, ReleaseOutcome};
use atlas_node_tree_viewer::{
    AppCommand, AppController, AppIntent, AppState, Camera2D, DomainData, DomainLevel, DomainNode,
    DomainSnapshot,
};
use glam::Vec2;

fn chess_snapshot() -> DomainSnapshot {
    DomainSnapshot {
        domain: DomainData {
            element_id: None,
            name: "Chess".into(),
            description: None,
            levels: vec![
                DomainLevel {
                    element_id: None,
                    level: 1,
                    name: "Beginner".into(),
                    description: None,
                    points_required: 10,
                    knowledge: vec![
                        DomainNode {
                            element_id: Some("el-rules".into()),
                            name: "Rules".into(),
                            description: None,
                            bloom_level: None,
                            dreyfus_level: None,
                            min_score: None,
                        },
                        DomainNode {
                            element_id: Some("el-openings".into()),
                            name: "Openings".into(),
                            description: None,
                            bloom_level: None,
                            dreyfus_level: None,
                            min_score: None,
                        },
                    ],
                    skills: Vec::new(),
                    traits: Vec::new(),
                    milestones: Vec::new(),
                },
                DomainLevel {
                    element_id: None,
                    level: 2,
                    name: "Club Player".into(),
                    description: None,
                    points_required: 50,
                    knowledge: Vec::new(),
                    skills: Vec::new(),
                    traits: Vec::new(),
                    milestones: Vec::new(),
                },
            ],
        },
        progress: Default::default(),
    }
}

fn loaded_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SnapshotReplaced {
                snapshot: chess_snapshot(),
            },
        )
        .expect("SnapshotReplaced sollte ohne Fehler durchlaufen");

    (controller, state)
}

#[test]
fn test_snapshot_replacement_builds_layout_and_centers_camera() {
    let (_, state) = loaded_state();

    // 2 Header + 2 Knowledge-Nodes, 1 Hauptpfad-Verbindung
    assert_eq!(state.node_count(), 4);
    assert_eq!(state.connection_count(), 1);
    assert_eq!(state.view.camera.zoom, Camera2D::ZOOM_INITIAL);
    assert_eq!(state.view.camera.position, state.layout.bounds.center());
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

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_click_on_node_emits_exactly_one_selection_event() {
    let (mut controller, mut state) = loaded_state();
    let target = state
        .layout
        .get("knowledge-0-Rules")
        .expect("Node erwartet")
        .position;

    controller
        .handle_intent(&mut state, AppIntent::NodePickRequested { world_pos: target })
        .expect("NodePickRequested sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.selection.selected_node_id.as_deref(),
        Some("knowledge-0-Rules")
    );
    assert_eq!(
        state.take_selection_event(),
        Some(Some("knowledge-0-Rules".into()))
    );
    assert_eq!(state.take_selection_event(), None);
}

#[test]
fn test_click_into_empty_space_deselects() {
    let (mut controller, mut state) = loaded_state();
    state.selection.selected_node_id = Some("level-0".into());

    controller
        .handle_intent(
            &mut state,
            AppIntent::NodePickRequested {
                world_pos: Vec2::new(-99999.0, -99999.0),
            },
        )
        .expect("NodePickRequested sollte bei leerem Raum robust sein");

    assert_eq!(state.selection.selected_node_id, None);
    assert_eq!(state.take_selection_event(), Some(None));
}

#[test]
fn test_pick_on_empty_state_is_a_noop_deselect() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::NodePickRequested {
                world_pos: Vec2::ZERO,
            },
        )
        .expect("NodePickRequested sollte bei leerem State robust sein");

    assert_eq!(state.selection.selected_node_id, None);
    assert_eq!(state.take_selection_event(), Some(None));
}

#[test]
fn test_drag_gesture_pans_camera_without_selection_event() {
    let (mut controller, mut state) = loaded_state();
    let camera_before = state.view.camera.clone();

    // Drag-Geste: Tracker klassifiziert, Pan-Intents fließen parallel
    let mut tracker = PointerTracker::new(state.options.click_drag_threshold_px);
    tracker.on_press(Vec2::new(400.0, 300.0));
    tracker.on_move(Vec2::new(430.0, 300.0));

    let wpp = state.view.camera.world_per_pixel();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(-30.0 * wpp, 0.0),
            },
        )
        .expect("CameraPan sollte ohne Fehler durchlaufen");

    let outcome = tracker.on_release(Vec2::new(430.0, 300.0));
    assert_eq!(outcome, Some(ReleaseOutcome::Drag));

    // Kamera hat sich gegen die Pointer-Richtung bewegt, keine Selektion
    assert!(state.view.camera.position.x < camera_before.position.x);
    assert_eq!(state.take_selection_event(), None);
    assert_eq!(state.selection.selected_node_id, None);
}

#[test]
fn test_click_gesture_classification_drives_selection() {
    let (mut controller, mut state) = loaded_state();
    let mut tracker = PointerTracker::new(state.options.click_drag_threshold_px);

    tracker.on_press(Vec2::new(200.0, 200.0));
    tracker.on_move(Vec2::new(202.0, 201.0));
    let outcome = tracker.on_release(Vec2::new(202.0, 201.0));

    let Some(ReleaseOutcome::Click { pos }) = outcome else {
        panic!("Bewegung unter der Totzone muss ein Klick sein");
    };

    // Klickposition über die Kamera in Weltkoordinaten umrechnen
    let viewport = Vec2::new(800.0, 600.0);
    let world_pos = state.view.camera.screen_to_world(pos, viewport);
    controller
        .handle_intent(&mut state, AppIntent::NodePickRequested { world_pos })
        .expect("NodePickRequested sollte ohne Fehler durchlaufen");

    // Genau ein Ereignis, unabhängig vom Treffer
    assert!(state.take_selection_event().is_some());
    assert_eq!(state.take_selection_event(), None);
}

#[test]
fn test_repeated_wheel_zoom_stays_clamped() {
    let (mut controller, mut state) = loaded_state();

    for _ in 0..200 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CameraZoom {
                    factor: 1.1,
                    focus_world: Some(Vec2::new(100.0, 50.0)),
                },
            )
            .expect("CameraZoom sollte ohne Fehler durchlaufen");
    }
    assert!(state.view.camera.zoom <= state.options.camera_zoom_max);

    for _ in 0..200 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CameraZoom {
                    factor: 1.0 / 1.1,
                    focus_world: None,
                },
            )
            .expect("CameraZoom sollte ohne Fehler durchlaufen");
    }
    assert!(state.view.camera.zoom >= state.options.camera_zoom_min);
}

#[test]
fn test_zoom_towards_cursor_keeps_world_point_under_cursor() {
    let (mut controller, mut state) = loaded_state();
    let viewport = Vec2::new(800.0, 600.0);
    let focus = Vec2::new(100.0, 50.0);
    let cursor_screen = state.view.camera.world_to_screen(focus, viewport);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraZoom {
                factor: 1.1,
                focus_world: Some(focus),
            },
        )
        .expect("CameraZoom sollte ohne Fehler durchlaufen");

    let world_after = state.view.camera.screen_to_world(cursor_screen, viewport);
    assert!((world_after - focus).length() < 0.05);
}

#[test]
fn test_resize_keeps_camera_and_layout() {
    let (mut controller, mut state) = loaded_state();
    state.view.camera.pan(Vec2::new(123.0, -45.0));
    let camera_before = state.view.camera.clone();
    let layout_before = state.layout.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1920.0, 1080.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    assert_eq!(state.view.camera, camera_before);
    // Layout wird bei Resize nicht neu berechnet (gleiche Arc-Instanz)
    assert!(std::sync::Arc::ptr_eq(&state.layout, &layout_before));
}

#[test]
fn test_hover_is_visual_only() {
    let (mut controller, mut state) = loaded_state();
    let target = state
        .layout
        .get("level-1")
        .expect("Header erwartet")
        .position;

    controller
        .handle_intent(&mut state, AppIntent::HoverMoved { world_pos: target })
        .expect("HoverMoved sollte ohne Fehler durchlaufen");

    assert_eq!(state.interaction.hovered_node_id.as_deref(), Some("level-1"));
    assert_eq!(state.take_selection_event(), None);

    controller
        .handle_intent(&mut state, AppIntent::HoverCleared)
        .expect("HoverCleared sollte ohne Fehler durchlaufen");
    assert_eq!(state.interaction.hovered_node_id, None);
}
