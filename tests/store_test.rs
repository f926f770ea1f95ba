//! Integration tests for the file-backed store.

use neon_tictactoe::store::{self, JsonFileStore, StateStore};
use neon_tictactoe::{GameMachine, Mark, Theme};

#[test]
fn values_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut store = JsonFileStore::open(&path);
    store.put("theme", serde_json::json!("nature"));
    store.put("scores", serde_json::json!({"x": 2, "o": 1, "ties": 0}));
    drop(store);

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("theme"), Some(serde_json::json!("nature")));
    assert_eq!(
        store.get("scores"),
        Some(serde_json::json!({"x": 2, "o": 1, "ties": 0}))
    );
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("absent.json"));
    assert_eq!(store.get("board"), None);
}

#[test]
fn malformed_file_starts_empty_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("board"), None);
}

#[test]
fn clear_erases_the_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut store = JsonFileStore::open(&path);
    store.put(
        "board",
        serde_json::json!([null, null, null, null, null, null, null, null, null]),
    );
    store.put("mode", serde_json::json!("ai"));
    store.clear();
    drop(store);

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("board"), None);
    assert_eq!(store.get("mode"), None);
}

#[test]
fn remove_drops_a_single_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut store = JsonFileStore::open(&path);
    store.put("a", serde_json::json!(1));
    store.put("b", serde_json::json!(2));
    store.remove("a");
    drop(store);

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get("a"), None);
    assert_eq!(store.get("b"), Some(serde_json::json!(2)));
}

#[test]
fn a_game_session_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut machine = GameMachine::load(JsonFileStore::open(&path));
    machine.set_theme(Theme::Retro);
    machine.apply_move(4);
    machine.apply_move(0);
    drop(machine);

    // Same file, new process: board, turn, and theme come back; undo
    // history does not.
    let machine = GameMachine::load(JsonFileStore::open(&path));
    assert_eq!(machine.board().count(Mark::X), 1);
    assert_eq!(machine.board().count(Mark::O), 1);
    assert_eq!(machine.turn(), Mark::X);
    assert_eq!(machine.theme(), Theme::Retro);
    assert!(!machine.can_undo());
}

#[test]
fn helper_decoders_fall_back_on_corrupt_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("save.json"));
    store.put(store::KEY_THEME, serde_json::json!(["definitely", "wrong"]));

    let theme: Option<Theme> = store::get_json(&store, store::KEY_THEME);
    assert_eq!(theme, None);
}
