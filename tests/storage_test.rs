//! Tests for snapshot store backends: round-trips, wire-format
//! fidelity, and corruption handling.

use tempfile::tempdir;

use tictactoe_engine::{
    Board, FileStore, Game, GameSnapshot, GameStatus, MemoryStore, Player, SnapshotStore, Square,
};

fn sample_snapshot() -> GameSnapshot {
    let mut board = Board::new();
    board.set(0, Square::Occupied(Player::X)).expect("In range");
    board.set(4, Square::Occupied(Player::O)).expect("In range");
    board.set(8, Square::Occupied(Player::X)).expect("In range");
    GameSnapshot::new(board, Player::O)
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    let snapshot = sample_snapshot();

    store.save(&snapshot).expect("Save failed");
    assert_eq!(store.load(), Some(snapshot));
}

#[test]
fn test_memory_store_clear_removes_snapshot() {
    let mut store = MemoryStore::new();
    store.save(&sample_snapshot()).expect("Save failed");

    store.clear().expect("Clear failed");
    assert_eq!(store.load(), None);
}

#[test]
fn test_empty_memory_store_loads_nothing() {
    assert_eq!(MemoryStore::new().load(), None);
}

#[test]
fn test_memory_store_wire_format() {
    let mut store = MemoryStore::new();
    store.save(&sample_snapshot()).expect("Save failed");

    assert_eq!(
        store.get_raw("board"),
        Some(r#"["x",null,null,null,"o",null,null,null,"x"]"#)
    );
    assert_eq!(store.get_raw("turn"), Some("o"));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FileStore::new(dir.path().join("game.json"));
    let snapshot = sample_snapshot();

    store.save(&snapshot).expect("Save failed");
    assert_eq!(store.load(), Some(snapshot));
}

#[test]
fn test_file_store_missing_file_loads_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.load(), None);
}

#[test]
fn test_file_store_garbage_file_loads_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");
    std::fs::write(&path, "not json at all").expect("Write failed");

    let store = FileStore::new(path);
    assert_eq!(store.load(), None);
}

#[test]
fn test_file_store_clear_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FileStore::new(dir.path().join("game.json"));

    // Clearing with no file present succeeds.
    store.clear().expect("Clear on empty store failed");

    store.save(&sample_snapshot()).expect("Save failed");
    store.clear().expect("Clear failed");
    assert_eq!(store.load(), None);
    store.clear().expect("Second clear failed");
}

#[test]
fn test_file_store_creates_parent_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FileStore::new(dir.path().join("nested/saves/game.json"));

    store.save(&sample_snapshot()).expect("Save failed");
    assert!(store.path().exists());
}

#[test]
fn test_game_survives_restart_through_file_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");

    let mut game = Game::new(FileStore::new(&path));
    for index in [4, 0, 8] {
        game.make_move(index).expect("Valid move");
    }
    let board = game.board().clone();
    drop(game);

    let resumed = Game::new(FileStore::new(&path));
    assert_eq!(resumed.board(), &board);
    assert_eq!(resumed.turn(), Player::O);
    assert_eq!(resumed.status(), GameStatus::InProgress);
}

#[test]
fn test_finished_game_resumes_in_terminal_state() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game.json");

    let mut game = Game::new(FileStore::new(&path));
    for index in [0, 1, 3, 2, 6] {
        game.make_move(index).expect("Valid move");
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    drop(game);

    // The winning move was persisted; the restarted engine recomputes
    // the terminal status from the stored board.
    let resumed = Game::new(FileStore::new(&path));
    assert_eq!(resumed.status(), GameStatus::Won(Player::X));
}
