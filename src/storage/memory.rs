//! In-memory snapshot store.

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use super::{BOARD_KEY, SnapshotStore, TURN_KEY};
use crate::error::StoreError;
use crate::snapshot::{GameSnapshot, WireSnapshot};
use crate::types::Player;

/// Snapshot store backed by an in-memory key-value map.
///
/// The default backend for tests and ephemeral sessions. Entries use
/// the same wire encoding as durable backends, so corruption handling
/// can be exercised by seeding raw values with [`MemoryStore::set_raw`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls, for asserting that rejected
    /// moves never touch persistence.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Seeds a raw entry, bypassing snapshot encoding.
    pub fn set_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Reads a raw entry as stored.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotStore for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self) -> Option<GameSnapshot> {
        let board_raw = self.entries.get(BOARD_KEY)?;
        let turn_raw = self.entries.get(TURN_KEY)?;

        let board: Vec<Option<char>> = match serde_json::from_str(board_raw) {
            Ok(board) => board,
            Err(err) => {
                warn!(error = %err, "Discarding unparseable board entry");
                return None;
            }
        };
        let turn = match player_from_raw(turn_raw) {
            Some(turn) => turn.as_wire(),
            None => {
                warn!(turn = %turn_raw, "Discarding unrecognized turn entry");
                return None;
            }
        };

        match GameSnapshot::from_wire(WireSnapshot { board, turn }) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(error = %err, "Discarding corrupt snapshot");
                None
            }
        }
    }

    #[instrument(skip(self, snapshot))]
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        let wire = snapshot.to_wire();
        let board = serde_json::to_string(&wire.board)?;
        self.entries.insert(BOARD_KEY.to_string(), board);
        self.entries
            .insert(TURN_KEY.to_string(), wire.turn.to_string());
        self.saves += 1;
        debug!(saves = self.saves, "Snapshot saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.remove(BOARD_KEY);
        self.entries.remove(TURN_KEY);
        debug!("Snapshot cleared");
        Ok(())
    }
}

/// Parses the raw turn entry, a single `x` or `o` character.
fn player_from_raw(raw: &str) -> Option<Player> {
    let mut chars = raw.chars();
    let mark = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Player::from_wire(mark)
}
