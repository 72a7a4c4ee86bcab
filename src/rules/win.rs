//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines in scan order: rows, then columns, then
/// diagonals.
///
/// The scan order is the tie-break for boards holding more than one
/// completed line. Legal alternating play can complete at most one
/// line per move, so the tie-break only matters for hand-built boards,
/// but it keeps evaluation deterministic.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first uniformly-marked line in
/// [`WINNING_LINES`] order, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for [a, b, c] in WINNING_LINES {
        if let Square::Occupied(player) = squares[a] {
            if squares[b] == squares[a] && squares[c] == squares[a] {
                return Some(player);
            }
        }
    }
    None
}
