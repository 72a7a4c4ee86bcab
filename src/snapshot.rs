//! Persisted game snapshot and its wire encoding.
//!
//! The wire layout is two logical keys: `"board"`, a JSON array of nine
//! entries holding `"x"`, `"o"`, or `null`, and `"turn"`, a single
//! `"x"` or `"o"` string naming the next player to move. Game status is
//! deliberately absent; it is recomputed from the board on load.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::types::{Board, Player, Square};

/// The persisted unit: board plus next player to move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct GameSnapshot {
    /// Board at the moment the snapshot was taken.
    board: Board,
    /// Player whose move comes next.
    turn: Player,
}

impl GameSnapshot {
    /// Splits the snapshot into its owned parts.
    pub(crate) fn into_parts(self) -> (Board, Player) {
        (self.board, self.turn)
    }

    /// Converts to the raw serde image.
    pub(crate) fn to_wire(&self) -> WireSnapshot {
        let board = self
            .board
            .squares()
            .iter()
            .map(|sq| match sq {
                Square::Empty => None,
                Square::Occupied(p) => Some(p.as_wire()),
            })
            .collect();
        WireSnapshot {
            board,
            turn: self.turn.as_wire(),
        }
    }

    /// Validates a raw serde image into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the board does not hold exactly
    /// nine cells or a cell carries an unknown mark.
    pub(crate) fn from_wire(wire: WireSnapshot) -> Result<Self, SnapshotError> {
        if wire.board.len() != 9 {
            return Err(SnapshotError::WrongCellCount {
                count: wire.board.len(),
            });
        }
        let mut squares = [Square::Empty; 9];
        for (slot, cell) in squares.iter_mut().zip(&wire.board) {
            *slot = match cell {
                None => Square::Empty,
                Some(mark) => Square::Occupied(
                    Player::from_wire(*mark)
                        .ok_or(SnapshotError::UnknownMark { mark: *mark })?,
                ),
            };
        }
        let turn = Player::from_wire(wire.turn)
            .ok_or(SnapshotError::UnknownMark { mark: wire.turn })?;
        Ok(Self {
            board: Board::from_squares(squares),
            turn,
        })
    }
}

/// Raw serde image of a snapshot, matching the documented wire layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WireSnapshot {
    pub(crate) board: Vec<Option<char>>,
    pub(crate) turn: char,
}

/// Structural defect found in persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub(crate) enum SnapshotError {
    /// Board did not hold exactly nine cells.
    #[display("expected 9 board cells, found {}", count)]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
    /// Cell or turn value was not `x` or `o`.
    #[display("unknown mark '{}'", mark)]
    UnknownMark {
        /// The unrecognized character.
        mark: char,
    },
}

impl Player {
    /// Wire character for this player.
    pub(crate) const fn as_wire(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    /// Parses a wire character back into a player.
    pub(crate) fn from_wire(c: char) -> Option<Self> {
        match c {
            'x' => Some(Player::X),
            'o' => Some(Player::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> GameSnapshot {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(4, Square::Occupied(Player::O)).unwrap();
        GameSnapshot::new(board, Player::X)
    }

    #[test]
    fn wire_round_trip_preserves_marks_and_turn() {
        let snapshot = sample_snapshot();
        let restored = GameSnapshot::from_wire(snapshot.to_wire()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn wire_json_matches_documented_layout() {
        let json = serde_json::to_string(&sample_snapshot().to_wire()).unwrap();
        assert_eq!(
            json,
            r#"{"board":["x",null,null,null,"o",null,null,null,null],"turn":"x"}"#
        );
    }

    #[test]
    fn short_board_is_rejected() {
        let wire = WireSnapshot {
            board: vec![None; 8],
            turn: 'x',
        };
        assert_eq!(
            GameSnapshot::from_wire(wire),
            Err(SnapshotError::WrongCellCount { count: 8 })
        );
    }

    #[test]
    fn unknown_mark_is_rejected() {
        let mut board = vec![None; 9];
        board[3] = Some('z');
        let wire = WireSnapshot { board, turn: 'o' };
        assert_eq!(
            GameSnapshot::from_wire(wire),
            Err(SnapshotError::UnknownMark { mark: 'z' })
        );
    }

    #[test]
    fn unknown_turn_is_rejected() {
        let wire = WireSnapshot {
            board: vec![None; 9],
            turn: 'q',
        };
        assert_eq!(
            GameSnapshot::from_wire(wire),
            Err(SnapshotError::UnknownMark { mark: 'q' })
        );
    }
}
