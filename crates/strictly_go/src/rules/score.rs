//! Tromp-Taylor area scoring.

use super::super::board::BoardState;
use super::super::types::Color;
use super::distance::{components, reaches, taxicab_distances};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Area score of a position, komi included in White's total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Black stones plus territory reaching only Black.
    pub black: f64,
    /// White stones plus territory reaching only White, plus komi.
    pub white: f64,
}

impl Score {
    /// Higher-scoring color, or `None` on an exact tie.
    pub fn leader(&self) -> Option<Color> {
        match self.black.partial_cmp(&self.white) {
            Some(Ordering::Greater) => Some(Color::Black),
            Some(Ordering::Less) => Some(Color::White),
            _ => None,
        }
    }

    /// Absolute point difference.
    pub fn margin(&self) -> f64 {
        (self.black - self.white).abs()
    }
}

/// Scores `board` with Tromp-Taylor area rules.
///
/// A player's score is the number of points of that player's color plus the number of
/// empty points that reach only that color. An empty region reaches a color
/// when one of its points is at taxicab distance exactly 1 from a stone of
/// that color.
#[instrument(level = "debug", skip(board), fields(board_size = board.size()))]
pub fn score(board: &BoardState, komi: f64) -> Score {
    let black_dist = taxicab_distances(board, Color::Black);
    let white_dist = taxicab_distances(board, Color::White);

    let mut black = board.count(Color::Black);
    let mut white = board.count(Color::White);

    for territory in components(board, Color::Empty) {
        let reaches_black = reaches(&territory, &black_dist);
        let reaches_white = reaches(&territory, &white_dist);
        match (reaches_black, reaches_white) {
            (true, false) => black += territory.len(),
            (false, true) => white += territory.len(),
            _ => {}
        }
    }

    Score {
        black: black as f64,
        white: white as f64 + komi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;

    const B: Color = Color::Black;
    const W: Color = Color::White;
    const E: Color = Color::Empty;

    #[test]
    fn test_empty_board_is_komi_only() {
        let s = score(&BoardState::empty(9), 7.5);
        assert_eq!(s, Score { black: 0.0, white: 7.5 });
        assert_eq!(s.leader(), Some(W));
    }

    #[test]
    fn test_lone_stone_owns_board() {
        let mut board = BoardState::empty(5);
        board.set(Vertex::new(2, 2), B);
        let s = score(&board, 0.0);
        assert_eq!(s.black, 25.0);
        assert_eq!(s.white, 0.0);
    }

    #[test]
    fn test_wall_splits_territory() {
        let board = BoardState::from_rows(&[
            vec![E, B, W, E],
            vec![E, B, W, E],
            vec![E, B, W, E],
            vec![E, B, W, E],
        ])
        .unwrap();
        let s = score(&board, 0.5);
        assert_eq!(s.black, 8.0);
        assert_eq!(s.white, 8.5);
    }

    #[test]
    fn test_shared_region_is_dame() {
        let board = BoardState::from_rows(&[vec![B, E, W], vec![E, E, E], vec![E, E, E]]).unwrap();
        let s = score(&board, 0.0);
        assert_eq!(s.black, 1.0);
        assert_eq!(s.white, 1.0);
        assert_eq!(s.leader(), None);
    }
}
