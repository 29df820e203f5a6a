//! Session and persistence integration tests

use huesort::core::SwapOutcome;
use huesort::store::{FileStore, MemoryStore};
use huesort::types::{GameMode, GameStatus};
use huesort::Session;

fn memory_session() -> Session {
    Session::new(Box::new(MemoryStore::new())).unwrap()
}

/// Drive the current level to `Won`, acknowledging all caller timers.
fn win_current_level(session: &mut Session) {
    let epoch = session.snapshot().epoch;
    session.shuffle_now(epoch);
    while session.use_hint() {}
    assert_eq!(session.snapshot().status, GameStatus::Animating);
    assert!(session.acknowledge_win(epoch));
}

#[test]
fn test_fresh_session_starts_casual_preview() {
    let session = memory_session();
    let snap = session.snapshot();
    assert_eq!(snap.mode, GameMode::Casual);
    assert_eq!(snap.dimension, 4);
    assert_eq!(snap.status, GameStatus::Preview);
    assert_eq!(snap.level, 1);
}

#[test]
fn test_mode_switch_round_trips_each_run() {
    let mut session = memory_session();
    let epoch = session.snapshot().epoch;
    session.shuffle_now(epoch);

    // Make some Casual progress
    let tiles = session.snapshot().tiles;
    session.swap(tiles[1].id, tiles[2].id);
    session.swap(tiles[5].id, tiles[6].id);
    let casual_before = session.snapshot();
    assert_eq!(casual_before.moves, 2);

    // Switch to Precision (fresh run), move once there
    session.play_or_resume(GameMode::Precision, 4).unwrap();
    let p_epoch = session.snapshot().epoch;
    session.shuffle_now(p_epoch);
    let p_tiles = session.snapshot().tiles;
    session.swap(p_tiles[1].id, p_tiles[2].id);
    assert_eq!(session.snapshot().mode, GameMode::Precision);
    assert_eq!(session.snapshot().moves, 1);

    // Back to Casual: exact prior arrangement and move count
    session.play_or_resume(GameMode::Casual, 4).unwrap();
    let casual_after = session.snapshot();
    assert_eq!(casual_after.tiles, casual_before.tiles);
    assert_eq!(casual_after.moves, casual_before.moves);

    // And Precision still has its own run too
    session.play_or_resume(GameMode::Precision, 4).unwrap();
    assert_eq!(session.snapshot().moves, 1);
}

#[test]
fn test_win_increments_level_counter_once() {
    let mut session = memory_session();
    win_current_level(&mut session);

    let epoch = session.snapshot().epoch;
    // Stale celebration timer fires again: no double count
    assert!(!session.acknowledge_win(epoch));

    session.start_level(None, None, false).unwrap();
    assert_eq!(session.snapshot().level, 2);
}

#[test]
fn test_level_counters_keyed_by_mode_and_dimension() {
    let mut session = memory_session();
    win_current_level(&mut session);

    // A different dimension starts back at level 1
    session.start_level(None, Some(5), false).unwrap();
    assert_eq!(session.snapshot().level, 1);

    // The 4x4 counter is untouched
    session.start_level(None, Some(4), false).unwrap();
    assert_eq!(session.snapshot().level, 2);

    // Other modes have their own streams
    session.play_or_resume(GameMode::Pure, 4).unwrap();
    assert_eq!(session.snapshot().level, 1);
}

#[test]
fn test_stale_timers_are_fenced_by_epoch() {
    let mut session = memory_session();
    let old_epoch = session.snapshot().epoch;

    // Player restarts before the preview timer fires
    let new_epoch = session.start_level(None, None, false).unwrap();
    assert_ne!(old_epoch, new_epoch);

    // The stale timer must not shuffle the new level early
    assert!(!session.shuffle_now(old_epoch));
    assert_eq!(session.snapshot().status, GameStatus::Preview);

    assert!(session.shuffle_now(new_epoch));
    assert_eq!(session.snapshot().status, GameStatus::Playing);
}

#[test]
fn test_precision_refuses_mid_run_resize() {
    let mut session = memory_session();
    session.play_or_resume(GameMode::Precision, 4).unwrap();
    let epoch = session.snapshot().epoch;
    session.shuffle_now(epoch);

    // Restarting mid-run with another dimension keeps the current one
    session
        .start_level(Some(GameMode::Precision), Some(6), false)
        .unwrap();
    assert_eq!(session.snapshot().dimension, 4);

    // Casual resizes freely mid-run
    session.play_or_resume(GameMode::Casual, 4).unwrap();
    session
        .start_level(Some(GameMode::Casual), Some(6), false)
        .unwrap();
    assert_eq!(session.snapshot().dimension, 6);
}

#[test]
fn test_preserve_colors_across_restart() {
    let mut session = memory_session();
    let corners_before = *session.game().corners().unwrap();

    session.start_level(None, Some(5), true).unwrap();
    assert_eq!(session.game().corners(), Some(&corners_before));
}

#[test]
fn test_save_failures_never_break_gameplay() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    // Construction falls back to a fresh level even though nothing saves
    let mut session = Session::new(Box::new(store)).unwrap();

    let epoch = session.snapshot().epoch;
    assert!(session.shuffle_now(epoch));
    let tiles = session.snapshot().tiles;
    let outcome = session.swap(tiles[1].id, tiles[2].id);
    assert_ne!(outcome, SwapOutcome::Ignored);
    assert_eq!(session.snapshot().moves, 1);
}

#[test]
fn test_session_restores_last_active_mode_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut session = Session::new(Box::new(store)).unwrap();
        session.play_or_resume(GameMode::Pure, 5).unwrap();
        let epoch = session.snapshot().epoch;
        session.shuffle_now(epoch);
        let tiles = session.snapshot().tiles;
        session.swap(tiles[1].id, tiles[2].id);
    }

    // A new session resumes the Pure run exactly where it left off
    let store = FileStore::open(dir.path()).unwrap();
    let session = Session::new(Box::new(store)).unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.mode, GameMode::Pure);
    assert_eq!(snap.dimension, 5);
    assert_eq!(snap.moves, 1);
    assert_eq!(snap.status, GameStatus::Playing);
}

#[test]
fn test_corrupt_record_falls_back_to_fresh_level() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut session = Session::new(Box::new(store)).unwrap();
        let epoch = session.snapshot().epoch;
        session.shuffle_now(epoch);
    }

    std::fs::write(dir.path().join("state_casual.json"), "garbage").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let session = Session::new(Box::new(store)).unwrap();
    let snap = session.snapshot();
    // Fresh level, not an error surfaced to the player
    assert_eq!(snap.mode, GameMode::Casual);
    assert_eq!(snap.status, GameStatus::Preview);
    assert_eq!(snap.moves, 0);
}
