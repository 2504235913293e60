//! Contract-based legality checking.
//!
//! A move is legal when its preconditions hold: the vertex is on the board,
//! the point is empty, and the resulting position repeats no earlier
//! position (positional superko). Suicide is *not* a precondition; see
//! [`MoveFilter`](super::MoveFilter) for the policy layer that removes it.

use super::board::BoardState;
use super::error::IllegalMoveError;
use super::game::Game;
use super::invariants::InvariantViolation;
use super::rules::virtual_move;
use super::types::{Color, Move, Vertex};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the vertex lies on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with [`IllegalMoveError::OutOfBounds`].
    pub fn check(vertex: Vertex, board_size: usize) -> Result<(), IllegalMoveError> {
        if vertex.is_on_board(board_size) {
            Ok(())
        } else {
            Err(IllegalMoveError::OutOfBounds { vertex, board_size })
        }
    }
}

/// Precondition: the point holds no stone.
pub struct PointIsEmpty;

impl PointIsEmpty {
    /// Fails with [`IllegalMoveError::Occupied`].
    pub fn check(vertex: Vertex, board: &BoardState) -> Result<(), IllegalMoveError> {
        match board.get(vertex) {
            Some(Color::Empty) | None => Ok(()),
            Some(color) => Err(IllegalMoveError::Occupied { vertex, color }),
        }
    }
}

/// Precondition: the resulting board equals no snapshot in `history`.
pub struct NoRepetition;

impl NoRepetition {
    /// Fails with [`IllegalMoveError::Superko`].
    pub fn check(
        vertex: Vertex,
        next: &BoardState,
        history: &[BoardState],
    ) -> Result<(), IllegalMoveError> {
        if history.iter().any(|earlier| earlier == next) {
            Err(IllegalMoveError::Superko { vertex })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for placing a stone.
pub struct LegalMove;

impl LegalMove {
    /// Validates `color` playing at `vertex` after `history`, whose last
    /// element is the current board.
    ///
    /// Returns the board the move would produce.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition.
    #[instrument(level = "trace", skip(history), fields(turn = history.len().saturating_sub(1)))]
    pub fn check(
        vertex: Vertex,
        color: Color,
        history: &[BoardState],
    ) -> Result<BoardState, IllegalMoveError> {
        let Some(current) = history.last() else {
            return Err(IllegalMoveError::UnknownTurn {
                turn: 0,
                available: 0,
            });
        };
        InBounds::check(vertex, current.size())?;
        PointIsEmpty::check(vertex, current)?;
        let next = virtual_move(current, vertex, color)?;
        NoRepetition::check(vertex, &next, history)?;
        Ok(next)
    }
}

/// Free-function form of [`LegalMove::check`] for a bare board size and
/// history.
pub fn is_legal(mv: Move, board_size: usize, history: &[BoardState]) -> bool {
    match mv {
        Move::Pass => true,
        Move::Vertex(vertex) => {
            InBounds::check(vertex, board_size).is_ok()
                && LegalMove::check(
                    vertex,
                    Color::to_move(history.len().saturating_sub(1)),
                    history,
                )
                .is_ok()
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Commit Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for committing a checked move to a [`Game`].
///
/// Preconditions: [`LegalMove`] for vertex moves; passes are always legal.
///
/// Postconditions: exactly one turn was appended, earlier snapshots are
/// untouched, and the history-length invariant holds.
pub struct CommitContract;

impl Contract<Game, Move> for CommitContract {
    fn pre(game: &Game, action: &Move) -> Result<(), IllegalMoveError> {
        match action {
            Move::Pass => Ok(()),
            Move::Vertex(vertex) => {
                LegalMove::check(*vertex, game.current_player(), game.board_states()).map(|_| ())
            }
        }
    }

    fn post(before: &Game, after: &Game) -> Result<(), InvariantViolation> {
        if after.moves().len() != before.moves().len() + 1 {
            warn!(
                before = before.moves().len(),
                after = after.moves().len(),
                "Commit did not append exactly one move"
            );
            return Err(InvariantViolation::new("Commit appends exactly one move"));
        }
        if after.board_states()[..before.board_states().len()] != *before.board_states() {
            return Err(InvariantViolation::new("Commit leaves earlier snapshots untouched"));
        }
        if after.board_states().len() != after.moves().len() + 1 {
            return Err(InvariantViolation::new("Snapshot count is move count plus one"));
        }
        Ok(())
    }
}
