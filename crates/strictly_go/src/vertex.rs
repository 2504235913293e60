//! GTP vertex notation (`"Q16"`, `"pass"`).
//!
//! Columns use the alphabet `A`-`Z` without `I`; rows are 1-indexed from the
//! bottom edge.

use super::error::VertexParseError;
use super::types::{Move, Vertex};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Column letters in GTP order.
pub const GO_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

const PASS: &str = "pass";

/// Returns the GTP letter for column `x`, if it has one.
pub fn column_letter(x: usize) -> Option<char> {
    GO_LETTERS.chars().nth(x)
}

/// Returns the column index for a GTP letter (case-insensitive).
pub fn column_index(letter: char) -> Option<usize> {
    GO_LETTERS.find(letter.to_ascii_uppercase())
}

impl Vertex {
    /// Formats the vertex as a GTP string such as `"D4"`.
    ///
    /// # Errors
    ///
    /// Returns [`VertexParseError::ColumnOutOfRange`] when `x` is past the
    /// 25-letter alphabet.
    pub fn try_to_vertex_string(self) -> Result<String, VertexParseError> {
        let letter = column_letter(self.x).ok_or(VertexParseError::ColumnOutOfRange(self.x))?;
        Ok(format!("{}{}", letter, self.y + 1))
    }
}

impl Move {
    /// Formats the move as a GTP vertex string, or `"pass"`.
    ///
    /// # Errors
    ///
    /// See [`Vertex::try_to_vertex_string`].
    pub fn to_vertex_string(self) -> Result<String, VertexParseError> {
        match self {
            Move::Vertex(v) => v.try_to_vertex_string(),
            Move::Pass => Ok(PASS.to_string()),
        }
    }

    /// Parses a GTP vertex string such as `"A5"`, `"q16"` or `"pass"`.
    ///
    /// # Errors
    ///
    /// Returns a [`VertexParseError`] describing the malformed part.
    #[instrument]
    pub fn from_vertex_string(s: &str) -> Result<Self, VertexParseError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(PASS) {
            return Ok(Move::Pass);
        }

        let mut chars = s.chars();
        let letter = chars.next().ok_or(VertexParseError::Empty)?;
        let x = column_index(letter).ok_or(VertexParseError::InvalidColumn(letter))?;

        let row = chars.as_str();
        let y = match row.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => return Err(VertexParseError::InvalidRow(row.to_string())),
        };

        Ok(Move::at(x, y))
    }
}

impl FromStr for Move {
    type Err = VertexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_vertex_string(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_vertex_string() {
            Ok(s) => f.write_str(&s),
            // Off-alphabet columns fall back to raw coordinates
            Err(_) => match self {
                Move::Vertex(v) => write!(f, "{}", v),
                Move::Pass => f.write_str(PASS),
            },
        }
    }
}
