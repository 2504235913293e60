//! Strictly Go - Tromp-Taylor Go rules as a ground-truth referee
//!
//! This library scores finished games, checks move legality with full
//! positional superko, and exchanges game records as SGF.
//!
//! # Architecture
//!
//! - **Primitives**: [`Color`], [`Vertex`], [`Move`] and GTP vertex strings
//! - **Board**: immutable [`BoardState`] snapshots in a [`BoardHistory`] log
//! - **Rules**: group clearing and area scoring over plain grids
//! - **Contracts**: legality as composable preconditions
//! - **Game**: the [`Game`] facade tying history, legality and scoring together
//! - **SGF**: reading and writing the alternating, no-setup subset
//!
//! # Example
//!
//! ```
//! use strictly_go::{Color, Game, Move};
//!
//! # fn example() -> Result<(), strictly_go::IllegalMoveError> {
//! let mut game = Game::new(9, 7.5);
//! game.play_move(Move::at(4, 4))?;
//! game.play_move(Move::Pass)?;
//! game.play_move(Move::Pass)?;
//!
//! assert!(game.is_over());
//! assert_eq!(game.winner(), Some(Color::Black));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod board;
mod error;
mod filter;
mod game;
mod geometry;
mod history;
mod sgf;
mod types;
mod vertex;

// Public modules - rules and proof-style checks
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Primitives
pub use types::{Color, Move, Vertex};
pub use vertex::{GO_LETTERS, column_index, column_letter};

// Crate-level exports - Errors
pub use error::{GoError, IllegalMoveError, InvalidColorError, SgfError, VertexParseError};

// Crate-level exports - Board and history
pub use board::BoardState;
pub use history::BoardHistory;

// Crate-level exports - Game
pub use game::{DEFAULT_KOMI, Game, GameStatus, Outcome};
pub use rules::Score;

// Crate-level exports - SGF
pub use sgf::{Node as SgfNode, Property as SgfProperty, SgfOptions, parse as parse_sgf};

// Crate-level exports - Policy helpers
pub use analysis::{AnalysisQuery, RULES};
pub use filter::MoveFilter;
pub use geometry::{l1_distance, mirror_move};
