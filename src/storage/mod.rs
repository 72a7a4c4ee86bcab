//! Pluggable persistence for game snapshots.
//!
//! The engine only sees the [`SnapshotStore`] capability set:
//! load, save, clear. Concrete backends decide where the two logical
//! keys (`"board"`, `"turn"`) actually live. [`MemoryStore`] keeps them
//! in a map for tests and ephemeral sessions; [`FileStore`] writes them
//! as one JSON document on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::snapshot::GameSnapshot;

/// Logical key holding the encoded board.
pub(crate) const BOARD_KEY: &str = "board";
/// Logical key holding the next player to move.
pub(crate) const TURN_KEY: &str = "turn";

/// Capability interface the engine persists through.
///
/// Implementations own no game semantics; they store and retrieve an
/// opaque snapshot. `load` treats absent or corrupt data as `None`
/// (logging the defect) so a damaged store degrades to a fresh game
/// rather than an error.
pub trait SnapshotStore {
    /// Loads the persisted snapshot, if a structurally valid one exists.
    fn load(&self) -> Option<GameSnapshot>;

    /// Persists a snapshot, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store rejects the write.
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError>;

    /// Removes any persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store rejects the removal.
    fn clear(&mut self) -> Result<(), StoreError>;
}
