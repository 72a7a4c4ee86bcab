//! Tic-tac-toe game engine with pluggable snapshot persistence.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Game**: the state machine owning board, turn, and status
//! - **Storage**: the snapshot store capability the game persists
//!   through, with in-memory and file-backed implementations
//!
//! Rendering, input handling, and celebratory effects on a win belong
//! to the host; the engine only reports [`GameStatus`] transitions.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, MemoryStore, Player};
//!
//! let mut game = Game::new(MemoryStore::new());
//! assert_eq!(game.turn(), Player::X);
//!
//! let status = game.make_move(4)?;
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(game.turn(), Player::O);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod rules;
mod snapshot;
mod storage;
mod types;

// Crate-level exports - errors
pub use error::{MoveError, StoreError};

// Crate-level exports - game engine
pub use game::Game;

// Crate-level exports - rules
pub use rules::{WINNING_LINES, check_winner, evaluate, is_draw};

// Crate-level exports - persistence
pub use snapshot::GameSnapshot;
pub use storage::{FileStore, MemoryStore, SnapshotStore};

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};
