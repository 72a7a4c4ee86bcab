//! Outcome evaluation: win and draw detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{WINNING_LINES, check_winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board into its current status.
///
/// Pure and idempotent: the status of a board depends on nothing but
/// its squares, so callers may re-evaluate freely, including when
/// rehydrating a persisted board whose status was never stored.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
