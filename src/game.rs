//! Game state machine with snapshot persistence.

use tracing::{debug, info, instrument, warn};

use crate::error::MoveError;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::storage::SnapshotStore;
use crate::types::{Board, GameStatus, Player, Square};

/// Tic-tac-toe engine bound to a snapshot store.
///
/// Owns the board, the active turn, and the derived status. Every
/// accepted move is persisted through the store; rejected moves and
/// observer calls never touch it. The engine assumes a single owner:
/// callers sharing a `Game` across threads must supply their own
/// mutual exclusion.
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    turn: Player,
    status: GameStatus,
    store: S,
}

impl<S: SnapshotStore> Game<S> {
    /// Creates a game, resuming from the store when it holds a
    /// structurally valid snapshot.
    ///
    /// The status is always recomputed from the resumed board; only
    /// board and turn are ever persisted, so stored state can never
    /// disagree with the derived status. An absent or corrupt snapshot
    /// degrades to a fresh game without surfacing an error.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        match store.load() {
            Some(snapshot) => {
                let status = rules::evaluate(snapshot.board());
                info!(?status, turn = %snapshot.turn(), "Resuming persisted game");
                let (board, turn) = snapshot.into_parts();
                Self {
                    board,
                    turn,
                    status,
                    store,
                }
            }
            None => {
                info!("Starting fresh game");
                Self {
                    board: Board::new(),
                    turn: Player::X,
                    status: GameStatus::InProgress,
                    store,
                }
            }
        }
    }

    /// Makes a move at the given board index (0-8).
    ///
    /// An occupied square or a finished game is not an error: the move
    /// is rejected as a no-op and the unchanged status is returned,
    /// with no persistence call. An accepted move marks the square for
    /// the active player, toggles the turn, re-evaluates the status,
    /// persists the new snapshot, and returns the new status.
    ///
    /// Persistence failures are logged and swallowed; the in-memory
    /// game remains the source of truth for the session.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is outside 0-8.
    /// No state changes on error.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if index >= 9 {
            return Err(MoveError::InvalidIndex { index });
        }
        if self.status != GameStatus::InProgress {
            debug!(status = ?self.status, "Move rejected: game already over");
            return Ok(self.status);
        }
        if !self.board.is_empty(index) {
            debug!(index, "Move rejected: square occupied");
            return Ok(self.status);
        }

        let player = self.turn;
        self.board.set(index, Square::Occupied(player))?;
        self.turn = player.opponent();
        self.status = rules::evaluate(&self.board);
        debug!(index, player = %player, status = ?self.status, "Move accepted");

        self.persist();
        Ok(self.status)
    }

    /// Resets to an empty board with X to move and asks the store to
    /// clear its snapshot. Always succeeds regardless of prior state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.status = GameStatus::InProgress;
        info!("Game reset");
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to clear persisted snapshot");
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move comes next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the snapshot store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the current board and turn through the store, keeping
    /// gameplay ahead of persistence: in-memory state is already
    /// consistent before the write, and a failed write is only logged.
    fn persist(&mut self) {
        let snapshot = GameSnapshot::new(self.board.clone(), self.turn);
        if let Err(err) = self.store.save(&snapshot) {
            warn!(error = %err, "Failed to persist snapshot; continuing in memory");
        }
    }
}
