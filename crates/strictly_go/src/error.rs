//! Error types for the Go rules engine.
//!
//! Every failure is surfaced immediately to the caller; the engine has no
//! retry or degraded mode.

use super::types::{Color, Vertex};

/// Raised when a color operation is applied to [`Color::Empty`] or a color
/// string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidColorError {
    /// `opponent()` or `as_str()` was called on an empty point.
    #[display("Empty has no opponent or string form")]
    Empty,

    /// The string is neither "B" nor "W".
    #[display("Invalid color string: {:?}", _0)]
    Unknown(String),
}

impl std::error::Error for InvalidColorError {}

/// Raised when a GTP vertex string cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum VertexParseError {
    /// The input was empty.
    #[display("Empty vertex string")]
    Empty,

    /// The column letter is not part of the GTP alphabet.
    #[display("Invalid column letter {:?}", _0)]
    InvalidColumn(char),

    /// The row part is missing, not a number, or zero.
    #[display("Invalid row {:?}", _0)]
    InvalidRow(String),

    /// The column index has no letter in the 25-letter GTP alphabet.
    #[display("Column {} has no GTP letter", _0)]
    ColumnOutOfRange(usize),
}

impl std::error::Error for VertexParseError {}

/// Raised when a move cannot be committed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The vertex lies outside the board.
    #[display("{vertex} is out of bounds for a {board_size}x{board_size} board")]
    OutOfBounds {
        /// The rejected vertex.
        vertex: Vertex,
        /// Size of the board the move was played on.
        board_size: usize,
    },

    /// The vertex already holds a stone.
    #[display("Cannot place stone on top of an existing {color:?} stone at {vertex}")]
    Occupied {
        /// The rejected vertex.
        vertex: Vertex,
        /// Color of the stone already there.
        color: Color,
    },

    /// The resulting position repeats an earlier one.
    #[display("Superko violation: {vertex} repeats an earlier board state")]
    Superko {
        /// The rejected vertex.
        vertex: Vertex,
    },

    /// A historical query referenced a turn that has not been played.
    #[display("Turn {turn} does not exist (history has {available} states)")]
    UnknownTurn {
        /// The requested snapshot index.
        turn: usize,
        /// Number of stored snapshots.
        available: usize,
    },
}

impl std::error::Error for IllegalMoveError {}

/// Raised when an SGF record cannot be loaded.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum SgfError {
    /// The record does not start with `(;FF[4]`.
    #[display("Only FF[4] SGFs are supported")]
    #[from(ignore)]
    UnsupportedFormat,

    /// The text is not well-formed SGF.
    #[display("SGF syntax error at byte {offset}: {message}")]
    #[from(ignore)]
    Syntax {
        /// Byte offset of the problem.
        offset: usize,
        /// What went wrong.
        message: String,
    },

    /// A root property has a value that cannot be interpreted.
    #[display("Invalid {name} property value {value:?}")]
    #[from(ignore)]
    InvalidProperty {
        /// Property identifier, e.g. `SZ`.
        name: String,
        /// The raw value.
        value: String,
    },

    /// A move value is not empty and not two lowercase letters.
    #[display("Malformed move value {:?} on turn {}", value, turn + 1)]
    #[from(ignore)]
    MalformedVertex {
        /// Zero-based move index.
        turn: usize,
        /// The raw value.
        value: String,
    },

    /// Colors do not strictly alternate starting with Black.
    #[display("Expected {} to play on turn {}, got {}", expected, turn + 1, found)]
    #[from(ignore)]
    UnexpectedColor {
        /// Zero-based move index.
        turn: usize,
        /// Color required by alternation ("B" or "W").
        expected: &'static str,
        /// Color found in the record.
        found: &'static str,
    },

    /// The record contains `AB`/`AW`/`AE` setup stones.
    #[display("Setup property {} is not supported", _0)]
    #[from(ignore)]
    SetupStonesUnsupported(String),

    /// Replaying a move failed the legality check.
    #[display("Illegal move in SGF: {}", _0)]
    IllegalMove(IllegalMoveError),
}

impl std::error::Error for SgfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SgfError::IllegalMove(err) => Some(err),
            _ => None,
        }
    }
}

/// Crate-level error covering every failure the engine reports.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum GoError {
    /// See [`InvalidColorError`].
    #[display("{}", _0)]
    Color(InvalidColorError),
    /// See [`VertexParseError`].
    #[display("{}", _0)]
    Vertex(VertexParseError),
    /// See [`IllegalMoveError`].
    #[display("{}", _0)]
    IllegalMove(IllegalMoveError),
    /// See [`SgfError`].
    #[display("{}", _0)]
    Sgf(SgfError),
}

impl std::error::Error for GoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GoError::Color(err) => Some(err),
            GoError::Vertex(err) => Some(err),
            GoError::IllegalMove(err) => Some(err),
            GoError::Sgf(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_color_message_is_one_based() {
        let err = SgfError::UnexpectedColor {
            turn: 1,
            expected: "W",
            found: "B",
        };
        assert_eq!(err.to_string(), "Expected W to play on turn 2, got B");
    }

    #[test]
    fn test_sgf_error_wraps_illegal_move() {
        let inner = IllegalMoveError::Superko {
            vertex: Vertex::new(0, 0),
        };
        let err: SgfError = inner.clone().into();
        assert_eq!(err, SgfError::IllegalMove(inner));
        assert!(std::error::Error::source(&err).is_some());
    }
}
