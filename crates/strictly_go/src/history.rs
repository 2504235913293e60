//! Append/pop log of board snapshots and moves.

use super::board::BoardState;
use super::types::Move;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Stack-disciplined game history.
///
/// Holds one snapshot per turn plus the initial board, so
/// `snapshots.len() == moves.len() + 1` at all times. Stored snapshots are
/// never modified; the log only grows and shrinks at the tail.
///
/// Deserialization enforces the same shape: at least one snapshot, one more
/// snapshot than moves, and a single board size throughout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardHistory {
    snapshots: Vec<BoardState>,
    moves: Vec<Move>,
}

impl BoardHistory {
    /// Starts a history from `initial`.
    pub fn new(initial: BoardState) -> Self {
        Self {
            snapshots: vec![initial],
            moves: Vec::new(),
        }
    }

    /// Appends the board produced by `mv`.
    pub fn push(&mut self, snapshot: BoardState, mv: Move) {
        self.snapshots.push(snapshot);
        self.moves.push(mv);
    }

    /// Removes the most recent turn, returning its snapshot and move.
    ///
    /// The initial snapshot is never removed.
    pub fn pop(&mut self) -> Option<(BoardState, Move)> {
        let mv = self.moves.pop()?;
        let snapshot = self.snapshots.pop()?;
        Some((snapshot, mv))
    }

    /// The latest snapshot.
    pub fn current(&self) -> &BoardState {
        // Never empty: `new` seeds one snapshot and `pop` keeps it.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Snapshot at `turn`, where turn 0 is the initial board.
    pub fn snapshot(&self, turn: usize) -> Option<&BoardState> {
        self.snapshots.get(turn)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[BoardState] {
        &self.snapshots
    }

    /// All moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Snapshots up to and including `turn`.
    pub fn up_to(&self, turn: usize) -> &[BoardState] {
        &self.snapshots[..=turn.min(self.snapshots.len() - 1)]
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True before the first move.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// True if `board` equals any stored snapshot up to `turn`.
    pub fn repeats(&self, board: &BoardState, turn: usize) -> bool {
        self.up_to(turn).iter().any(|earlier| earlier == board)
    }
}

impl<'de> Deserialize<'de> for BoardHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            snapshots: Vec<BoardState>,
            moves: Vec<Move>,
        }

        let Raw { snapshots, moves } = Raw::deserialize(deserializer)?;
        let Some(initial) = snapshots.first() else {
            return Err(de::Error::custom("history needs an initial snapshot"));
        };
        if snapshots.len() != moves.len() + 1 {
            return Err(de::Error::custom(format!(
                "history has {} snapshots for {} moves",
                snapshots.len(),
                moves.len()
            )));
        }
        if snapshots.iter().any(|s| s.size() != initial.size()) {
            return Err(de::Error::custom("history mixes board sizes"));
        }
        Ok(Self { snapshots, moves })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Vertex};

    fn with_stone(x: usize, y: usize) -> BoardState {
        let mut b = BoardState::empty(3);
        b.set(Vertex::new(x, y), Color::Black);
        b
    }

    #[test]
    fn test_new_history_has_one_snapshot() {
        let h = BoardHistory::new(BoardState::empty(3));
        assert_eq!(h.snapshots().len(), 1);
        assert!(h.is_empty());
    }

    #[test]
    fn test_push_pop_symmetry() {
        let mut h = BoardHistory::new(BoardState::empty(3));
        h.push(with_stone(0, 0), Move::at(0, 0));
        h.push(with_stone(0, 0), Move::Pass);
        assert_eq!(h.len(), 2);

        let (snapshot, mv) = h.pop().unwrap();
        assert_eq!(mv, Move::Pass);
        assert_eq!(snapshot, with_stone(0, 0));
        assert_eq!(h.snapshots().len(), h.moves().len() + 1);
    }

    #[test]
    fn test_pop_keeps_initial_snapshot() {
        let mut h = BoardHistory::new(BoardState::empty(3));
        assert!(h.pop().is_none());
        assert_eq!(h.snapshots().len(), 1);
    }

    #[test]
    fn test_repeats_respects_turn() {
        let mut h = BoardHistory::new(BoardState::empty(3));
        h.push(with_stone(1, 1), Move::at(1, 1));
        assert!(h.repeats(&with_stone(1, 1), 1));
        assert!(!h.repeats(&with_stone(1, 1), 0));
    }

    #[test]
    fn test_deserialize_keeps_history_shape() {
        let mut h = BoardHistory::new(BoardState::empty(3));
        h.push(with_stone(1, 1), Move::at(1, 1));
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(serde_json::from_str::<BoardHistory>(&json).unwrap(), h);

        let no_snapshots = r#"{"snapshots":[],"moves":[]}"#;
        let err = serde_json::from_str::<BoardHistory>(no_snapshots).unwrap_err();
        assert!(err.to_string().contains("initial snapshot"));

        let board = serde_json::to_string(&BoardState::empty(3)).unwrap();
        let short = format!(r#"{{"snapshots":[{board}],"moves":["Pass"]}}"#);
        let err = serde_json::from_str::<BoardHistory>(&short).unwrap_err();
        assert!(err.to_string().contains("1 snapshots for 1 moves"));

        let small = serde_json::to_string(&BoardState::empty(2)).unwrap();
        let mixed = format!(r#"{{"snapshots":[{board},{small}],"moves":["Pass"]}}"#);
        let err = serde_json::from_str::<BoardHistory>(&mixed).unwrap_err();
        assert!(err.to_string().contains("mixes board sizes"));
    }
}
