//! Engine tests - actions, pausing, hold and the observation surface

use blockfall::core::Engine;
use blockfall::types::{GameAction, GamePhase, SPAWN_X, SPAWN_Y};

#[test]
fn test_fresh_engine_observable_state() {
    let engine = Engine::new(12345);

    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.lines_cleared(), 0);
    assert!(engine.held_piece().is_none());
    assert!(engine.can_hold());
    assert!(engine.pending_clear_rows().is_empty());
    assert!(engine.board().cells().iter().all(|c| c.is_none()));
    assert_eq!(engine.current_piece().x, SPAWN_X);
    assert_eq!(engine.current_piece().y, SPAWN_Y);
}

#[test]
fn test_movement_clamped_at_walls() {
    let mut engine = Engine::new(12345);

    for _ in 0..20 {
        engine.apply_action(GameAction::MoveLeft);
    }
    let leftmost = engine.current_piece().x;
    engine.apply_action(GameAction::MoveLeft);
    assert_eq!(engine.current_piece().x, leftmost);

    for _ in 0..20 {
        engine.apply_action(GameAction::MoveRight);
    }
    let rightmost = engine.current_piece().x;
    engine.apply_action(GameAction::MoveRight);
    assert_eq!(engine.current_piece().x, rightmost);
    assert!(rightmost > leftmost);
}

#[test]
fn test_soft_drop_awards_point() {
    let mut engine = Engine::new(12345);
    engine.apply_action(GameAction::SoftDrop);
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.current_piece().y, SPAWN_Y + 1);
}

#[test]
fn test_hard_drop_locks_and_scores() {
    let mut engine = Engine::new(12345);
    engine.apply_action(GameAction::HardDrop);

    // Four cells locked, two points per dropped cell
    let locked = engine.board().cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(locked, 4);
    assert!(engine.score() > 0);
    assert_eq!(engine.score() % 2, 0);
    // Next piece became active at spawn
    assert_eq!(engine.current_piece().y, SPAWN_Y);
}

#[test]
fn test_pause_toggles_and_freezes() {
    let mut engine = Engine::new(12345);

    engine.toggle_pause();
    assert_eq!(engine.phase(), GamePhase::Paused);

    let before = engine.current_piece();
    engine.apply_action(GameAction::MoveRight);
    engine.on_tick(10_000);
    assert_eq!(engine.current_piece(), before);

    engine.toggle_pause();
    assert_eq!(engine.phase(), GamePhase::Playing);
}

#[test]
fn test_hold_once_per_spawn() {
    let mut engine = Engine::new(12345);
    let first = engine.current_piece().kind;
    let queued = engine.next_piece().kind;

    engine.apply_action(GameAction::Hold);
    assert_eq!(engine.held_piece().map(|p| p.kind), Some(first));
    assert_eq!(engine.current_piece().kind, queued);
    assert!(!engine.can_hold());

    // Second hold before any spawn is a no-op
    engine.apply_action(GameAction::Hold);
    assert_eq!(engine.held_piece().map(|p| p.kind), Some(first));
    assert_eq!(engine.current_piece().kind, queued);
}

#[test]
fn test_gravity_steps_once_per_interval() {
    let mut engine = Engine::new(12345);
    let y0 = engine.current_piece().y;

    engine.on_tick(0); // anchor
    engine.on_tick(500);
    assert_eq!(engine.current_piece().y, y0);
    engine.on_tick(1000);
    assert_eq!(engine.current_piece().y, y0 + 1);
    engine.on_tick(1999);
    assert_eq!(engine.current_piece().y, y0 + 1);
    engine.on_tick(2000);
    assert_eq!(engine.current_piece().y, y0 + 2);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut engine = Engine::new(12345);
    engine.apply_action(GameAction::Hold);
    engine.apply_action(GameAction::SoftDrop);

    let snap = engine.snapshot();
    let json = serde_json::to_value(&snap).expect("snapshot must serialize");

    assert_eq!(json["score"], 1);
    assert_eq!(json["level"], 1);
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["can_hold"], false);
    assert!(json["held"].is_object());
    assert_eq!(json["board"].as_array().map(|rows| rows.len()), Some(20));
    assert_eq!(
        json["pending_clear_rows"].as_array().map(|r| r.len()),
        Some(0)
    );
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let mut engine = Engine::new(12345);
    let mut snap = engine.snapshot();

    engine.apply_action(GameAction::HardDrop);
    engine.snapshot_into(&mut snap);

    assert_eq!(snap, engine.snapshot());
    let locked: u32 = snap.board.iter().flatten().map(|&c| c as u32).sum();
    assert_eq!(locked, 4);
}
