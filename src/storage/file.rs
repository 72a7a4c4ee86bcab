//! File-backed snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, instrument, warn};

use super::SnapshotStore;
use crate::error::StoreError;
use crate::snapshot::{GameSnapshot, WireSnapshot};

/// Snapshot store backed by a single JSON document on disk.
///
/// The document carries the two logical keys directly:
///
/// ```json
/// { "board": ["x", null, "o", ...], "turn": "x" }
/// ```
///
/// A missing file means no game in progress. An unreadable or
/// malformed file is treated the same way, after logging, so a damaged
/// store never blocks starting a fresh game.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store writing to the given path.
    ///
    /// Parent directories are created on first save, not here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Option<GameSnapshot> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(error = %err, "Failed to read snapshot file");
                return None;
            }
        };
        let wire: WireSnapshot = match serde_json::from_str(&data) {
            Ok(wire) => wire,
            Err(err) => {
                warn!(error = %err, "Discarding unparseable snapshot file");
                return None;
            }
        };
        match GameSnapshot::from_wire(wire) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(error = %err, "Discarding corrupt snapshot");
                None
            }
        }
    }

    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&snapshot.to_wire())?;
        fs::write(&self.path, json)?;
        debug!("Snapshot saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Snapshot file removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
