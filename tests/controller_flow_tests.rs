//! Integrationstests für den Controller-Fluss:
//! - Erfassen per Klick und Drag, Undo/Redo, Leeren
//! - Klebriger Rotationsfilter beim Rotationswechsel
//! - Schreibschutz, Kommando-Protokoll und Szenenaufbau

use glam::Vec2;
use volley_chart_editor::{AppCommand, AppController, AppIntent, AppState};
use volley_chart_editor::{Rotation, SessionMode, SketchOp, Team};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn setup() -> (AppController, AppState) {
    init_logging();
    (AppController::new(), AppState::new())
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                position: Vec2::new(x, y),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

fn cloud_count(scene: &volley_chart_editor::RecordingTarget) -> usize {
    scene
        .ops
        .iter()
        .filter(|op| matches!(op, SketchOp::Cloud { .. }))
        .count()
}

// ─── Erfassung ───────────────────────────────────────────────────────────────

#[test]
fn test_canvas_click_captures_point_with_current_rotation() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationSelected {
                rotation: Rotation::new(3),
            },
        )
        .expect("Rotationswechsel sollte ohne Fehler durchlaufen");
    click(&mut controller, &mut state, 300.0, 300.0);

    let points = state.session.ledger.points();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].position, Vec2::new(300.0, 300.0));
    assert_eq!(points[0].rotation, Rotation::new(3));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::AddCloudPoint { position } => {
            assert_eq!(*position, Vec2::new(300.0, 300.0));
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_click_outside_canvas_produces_no_command() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 700.0, 300.0);

    assert_eq!(state.session.ledger.point_count(), 0);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_canvas_height_depends_on_session_mode() {
    let (mut controller, mut state) = setup();

    // Im einfachen Modus endet die Leinwand bei y=600.
    click(&mut controller, &mut state, 300.0, 700.0);
    assert_eq!(state.session.ledger.point_count(), 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::NewSessionRequested {
                name: "Angriff".to_string(),
                mode: SessionMode::Charting,
            },
        )
        .expect("Neue Session sollte ohne Fehler entstehen");

    // Im Charting-Modus ist dieselbe Position gültig (Leinwand 600x880).
    click(&mut controller, &mut state, 300.0, 700.0);
    assert_eq!(state.session.ledger.point_count(), 1);
}

#[test]
fn test_drag_in_charting_mode_creates_tagged_charted_point() {
    let (mut controller, mut state) = setup();

    for intent in [
        AppIntent::NewSessionRequested {
            name: "Aufschlag".to_string(),
            mode: SessionMode::Charting,
        },
        AppIntent::JerseySelected {
            jersey: Some("7".to_string()),
        },
        AppIntent::TeamSelected {
            team: Some(Team::Us),
        },
        AppIntent::CanvasDragFinished {
            start: Vec2::new(200.0, 500.0),
            end: Vec2::new(320.0, 260.0),
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    let point = &state.session.ledger.points()[0];
    assert_eq!(point.position, Vec2::new(320.0, 260.0), "Punkt liegt am Drag-Ende");
    let line = point.line.expect("Drag-Geste erzeugt ein Liniensegment");
    assert_eq!(line.start, Vec2::new(200.0, 500.0));
    assert_eq!(point.jersey_number.as_deref(), Some("7"));
    assert_eq!(point.team, Some(Team::Us));

    // Die Szene trägt das Trikot-Label des gecharteten Punkts.
    let scene = controller.build_render_scene(&state);
    assert!(scene
        .ops
        .iter()
        .any(|op| matches!(op, SketchOp::Label { text, .. } if text == "7")));

    // Die Filter-Chips speisen sich aus den vorkommenden Werten.
    click(&mut controller, &mut state, 300.0, 700.0);
    let jerseys: Vec<_> = state.jersey_filter_options().into_iter().collect();
    assert_eq!(jerseys, vec![Some("7".to_string()), None]);
    let rotations: Vec<_> = state.rotation_filter_options().into_iter().collect();
    assert_eq!(rotations, vec![Rotation::new(1)]);
}

// ─── Verlauf ─────────────────────────────────────────────────────────────────

#[test]
fn test_undo_redo_flow_over_intents() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 200.0);
    assert_eq!(state.point_count(), 2);
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 1);
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 2);
    assert_eq!(
        state.session.ledger.points()[1].position,
        Vec2::new(200.0, 200.0)
    );
}

#[test]
fn test_clear_all_bleibt_rueckgaengig_machbar() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 200.0);

    controller
        .handle_intent(&mut state, AppIntent::ClearAllRequested)
        .expect("Leeren sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 0);
    assert_eq!(state.ui.status_message.as_deref(), Some("2 Punkt(e) entfernt"));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.point_count(), 2);
}

// ─── Filter ──────────────────────────────────────────────────────────────────

#[test]
fn test_rotation_switch_extends_active_rotation_filter() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationFilterToggled {
                rotation: Rotation::new(2),
            },
        )
        .expect("Filterumschaltung sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationSelected {
                rotation: Rotation::new(4),
            },
        )
        .expect("Rotationswechsel sollte ohne Fehler durchlaufen");

    let selected: Vec<_> = state.filters.rotation_filter().iter().copied().collect();
    assert_eq!(selected, vec![Rotation::new(2), Rotation::new(4)]);

    // Frisch erfasste Punkte der neuen Rotation bleiben sichtbar.
    click(&mut controller, &mut state, 300.0, 300.0);
    assert_eq!(state.visible_point_count(), 1);
}

#[test]
fn test_filters_combine_and_over_dimensions() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationSelected {
                rotation: Rotation::new(1),
            },
        )
        .expect("Rotationswechsel");
    click(&mut controller, &mut state, 100.0, 100.0);
    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationSelected {
                rotation: Rotation::new(2),
            },
        )
        .expect("Rotationswechsel");
    click(&mut controller, &mut state, 200.0, 200.0);
    assert_eq!(state.point_count(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationFilterToggled {
                rotation: Rotation::new(1),
            },
        )
        .expect("Filterumschaltung");
    assert_eq!(state.visible_point_count(), 1);

    let scene = controller.build_render_scene(&state);
    assert_eq!(cloud_count(&scene), 1);

    controller
        .handle_intent(&mut state, AppIntent::AllFiltersCleared)
        .expect("Filter leeren");
    assert_eq!(state.visible_point_count(), 2);
}

// ─── Schreibschutz und Protokoll ─────────────────────────────────────────────

#[test]
fn test_schreibschutz_blocks_capture_but_not_tool_changes() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::ViewOnlyChanged { view_only: true })
        .expect("Schreibschutz setzen");

    click(&mut controller, &mut state, 300.0, 300.0);
    assert_eq!(state.point_count(), 0);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Session ist schreibgeschützt")
    );
    // Der Command wurde trotzdem protokolliert.
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::AddCloudPoint { .. }));

    controller
        .handle_intent(
            &mut state,
            AppIntent::RotationSelected {
                rotation: Rotation::new(5),
            },
        )
        .expect("Werkzeugwechsel bleibt erlaubt");
    assert_eq!(state.tool.current_rotation, Rotation::new(5));
}

#[test]
fn test_save_requested_without_path_opens_save_dialog() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_save_file_dialog);
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SaveFile { path } => assert!(path.is_none()),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_every_executed_command_lands_in_the_log() {
    let (mut controller, mut state) = setup();

    click(&mut controller, &mut state, 100.0, 100.0);
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    controller
        .handle_intent(
            &mut state,
            AppIntent::JerseyFilterToggled {
                jersey: Some("7".to_string()),
            },
        )
        .expect("Filterumschaltung");

    assert_eq!(state.command_log.len(), 3);
    // Ein verworfener Klick außerhalb der Leinwand erzeugt keinen Eintrag.
    click(&mut controller, &mut state, -10.0, 100.0);
    assert_eq!(state.command_log.len(), 3);
}
