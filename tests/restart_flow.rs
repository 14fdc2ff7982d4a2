//! End-to-end scenarios: a countdown session persisted across simulated
//! process restarts, driven the same way the terminal front-end drives the
//! engine.

use hourbank::{CountdownEngine, SaveFile, TimerState};
use tempfile::TempDir;

const BUDGET: f64 = 9_000.0 * 3_600.0;

#[test]
fn fresh_install_runs_and_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hourbank.json");

    // First launch: no save file yet.
    let store = SaveFile::new(&path);
    let state = store.load_or_default(BUDGET, 1_000.0);
    assert_eq!(state.remaining, BUDGET);
    assert!(!state.running);

    let mut engine = CountdownEngine::new(state, store);
    engine.reconcile_on_load(1_000.0);
    engine.start(1_000.0).unwrap();
    engine.tick(1_001.0).unwrap();
    engine.tick(1_002.0).unwrap();
    assert_eq!(engine.remaining_seconds(), BUDGET - 2.0);

    // Process exits without stopping; 38 seconds pass offline.
    drop(engine);
    let store = SaveFile::new(&path);
    let loaded = store.load_or_default(BUDGET, 1_040.0);
    assert!(loaded.running);
    assert_eq!(loaded.remaining, BUDGET - 2.0);

    let mut engine = CountdownEngine::new(loaded, store);
    engine.reconcile_on_load(1_040.0);
    assert_eq!(engine.remaining_seconds(), BUDGET - 40.0);
    assert!(engine.is_running());
}

#[test]
fn stopped_session_does_not_lose_time_while_closed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hourbank.json");

    let store = SaveFile::new(&path);
    let mut engine = CountdownEngine::new(store.load_or_default(BUDGET, 0.0), store);
    engine.start(0.0).unwrap();
    engine.tick(10.0).unwrap();
    engine.stop().unwrap();

    // A week passes with the app closed.
    let store = SaveFile::new(&path);
    let loaded = store.load_or_default(BUDGET, 604_800.0);
    let mut engine = CountdownEngine::new(loaded, store);
    engine.reconcile_on_load(604_800.0);

    assert_eq!(engine.remaining_seconds(), BUDGET - 10.0);
    assert!(!engine.is_running());
}

#[test]
fn manual_adjustments_persist_across_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hourbank.json");

    let store = SaveFile::new(&path);
    let mut engine = CountdownEngine::new(store.load_or_default(7_200.0, 0.0), store);
    engine.adjust(3_600.0).unwrap();
    engine.adjust(-9_000.0).unwrap();
    assert_eq!(engine.remaining_seconds(), 1_800.0);

    let store = SaveFile::new(&path);
    let loaded = store.load_or_default(7_200.0, 100.0);
    assert_eq!(loaded.remaining, 1_800.0);
    assert!(!loaded.running);
}

#[test]
fn corrupt_save_file_degrades_to_a_fresh_budget() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hourbank.json");
    std::fs::write(&path, "{\"remaining\": ").unwrap();

    let store = SaveFile::new(&path);
    assert!(store.read().is_err());

    let state = store.load_or_default(BUDGET, 50.0);
    assert_eq!(state.remaining, BUDGET);
    assert!(!state.running);

    // The next mutation replaces the corrupt record with a valid one.
    let store = SaveFile::new(&path);
    let mut engine = CountdownEngine::new(state, store);
    engine.adjust(-3_600.0).unwrap();

    let reread = SaveFile::new(&path).read().unwrap();
    assert_eq!(reread.remaining, BUDGET - 3_600.0);
}

#[test]
fn save_then_load_round_trips_field_for_field() {
    let dir = TempDir::new().unwrap();
    let store = SaveFile::new(dir.path().join("hourbank.json"));
    let state = TimerState {
        remaining: 360_000.25,
        running: true,
        last_update: 1_756_100_000.5,
    };

    store.save(&state).unwrap();
    assert_eq!(store.read().unwrap(), state);
}
