//! Core domain types: stone colors, vertices and moves.

use super::error::InvalidColorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// The color of a point on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Color {
    /// No stone.
    #[default]
    Empty,
    /// Black stone (moves first).
    Black,
    /// White stone (receives komi).
    White,
}

impl Color {
    /// Returns the opposing stone color.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorError::Empty`] for [`Color::Empty`].
    pub fn opponent(self) -> Result<Self, InvalidColorError> {
        match self {
            Color::Black => Ok(Color::White),
            Color::White => Ok(Color::Black),
            Color::Empty => Err(InvalidColorError::Empty),
        }
    }

    /// Returns the SGF/GTP letter, `"B"` or `"W"`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorError::Empty`] for [`Color::Empty`].
    pub fn as_str(self) -> Result<&'static str, InvalidColorError> {
        match self {
            Color::Black => Ok("B"),
            Color::White => Ok("W"),
            Color::Empty => Err(InvalidColorError::Empty),
        }
    }

    /// Returns true for Black and White.
    pub fn is_stone(self) -> bool {
        self != Color::Empty
    }

    /// Color to move after `moves_played` moves.
    pub fn to_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl FromStr for Color {
    type Err = InvalidColorError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Color::Black),
            "W" => Ok(Color::White),
            other => Err(InvalidColorError::Unknown(other.to_string())),
        }
    }
}

/// A board intersection in zero-indexed Cartesian coordinates.
///
/// `x` counts columns from the left, `y` counts rows from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    /// Column, from the left edge.
    pub x: usize,
    /// Row, from the bottom edge.
    pub y: usize,
}

impl Vertex {
    /// Creates a new vertex.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns true if the vertex lies on a `board_size` board.
    pub fn is_on_board(self, board_size: usize) -> bool {
        self.x < board_size && self.y < board_size
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Vertex {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// A turn: either a stone placed on a vertex or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the vertex.
    Vertex(Vertex),
    /// Skip the turn.
    Pass,
}

impl Move {
    /// Shorthand for `Move::Vertex(Vertex::new(x, y))`.
    pub const fn at(x: usize, y: usize) -> Self {
        Move::Vertex(Vertex::new(x, y))
    }

    /// Returns the vertex, or `None` for a pass.
    pub fn vertex(self) -> Option<Vertex> {
        match self {
            Move::Vertex(v) => Some(v),
            Move::Pass => None,
        }
    }

    /// Returns true for [`Move::Pass`].
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Vertex> for Move {
    fn from(vertex: Vertex) -> Self {
        Move::Vertex(vertex)
    }
}
