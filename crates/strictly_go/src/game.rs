//! Game orchestrator: history, legality and scoring behind one facade.
//!
//! A [`Game`] owns a stack-disciplined [`BoardHistory`]. Checked moves go
//! through [`CommitContract`]; unchecked moves only go through the capture
//! rules. Every query can be asked "as of" an earlier turn, where turn `t`
//! means snapshot `t` and Black moves on even turns.

use super::board::BoardState;
use super::contracts::{CommitContract, Contract, LegalMove};
use super::error::{IllegalMoveError, SgfError};
use super::history::BoardHistory;
use super::invariants::{
    GoInvariants, HistoryLengthInvariant, InvariantSet, InvariantViolation,
    ReplayConsistentInvariant,
};
use super::rules::{self, Score};
use super::sgf::{self, SgfOptions};
use super::types::{Color, Move, Vertex};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use tracing::{debug, instrument};

/// Komi used when none is given.
pub const DEFAULT_KOMI: f64 = 7.5;

/// Whether the game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Fewer than two consecutive passes at the tail.
    #[display("in progress")]
    InProgress,
    /// The last two moves were passes.
    #[display("over")]
    Over,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// One color finished ahead.
    Winner {
        /// The winning color.
        color: Color,
        /// Point difference, komi included.
        margin: f64,
    },
    /// Exact tie.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { color, margin } => {
                let letter = color.as_str().map_err(|_| fmt::Error)?;
                write!(f, "{letter}+{margin}")
            }
            Outcome::Draw => write!(f, "0"),
        }
    }
}

/// A Go game under Tromp-Taylor rules.
///
/// Holds `moves().len() + 1` snapshots at all times: the initial board plus
/// one per move. Passes repeat the previous snapshot.
///
/// Deserialized games must replay: every snapshot is its predecessor with
/// the recorded move applied. Superko is not required, so unchecked games
/// load too.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    board_size: usize,
    komi: f64,
    history: BoardHistory,
}

// ─────────────────────────────────────────────────────────────
//  Construction and accessors
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a game on an empty `board_size × board_size` board.
    #[instrument]
    pub fn new(board_size: usize, komi: f64) -> Self {
        Self::from_position(BoardState::empty(board_size), komi)
    }

    /// Creates a game whose initial snapshot is `initial`, Black to move.
    #[instrument(skip(initial), fields(board_size = initial.size()))]
    pub fn from_position(initial: BoardState, komi: f64) -> Self {
        Self {
            board_size: initial.size(),
            komi,
            history: BoardHistory::new(initial),
        }
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Points credited to White.
    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        self.history.moves()
    }

    /// Every snapshot, starting with the initial board.
    pub fn board_states(&self) -> &[BoardState] {
        self.history.snapshots()
    }

    /// The underlying history log.
    pub fn history(&self) -> &BoardHistory {
        &self.history
    }

    /// The latest snapshot.
    pub fn current_board(&self) -> &BoardState {
        self.history.current()
    }

    /// Color to move now.
    pub fn current_player(&self) -> Color {
        Color::to_move(self.history.len())
    }

    /// Snapshot at `turn`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::UnknownTurn`] past the last snapshot.
    pub fn board_at(&self, turn: usize) -> Result<&BoardState, IllegalMoveError> {
        self.history
            .snapshot(turn)
            .ok_or(IllegalMoveError::UnknownTurn {
                turn,
                available: self.board_states().len(),
            })
    }

    fn last_turn(&self) -> usize {
        self.history.len()
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Color of the point `(x, y)` on the current board.
    ///
    /// Off-board points read as [`Color::Empty`].
    pub fn color_at(&self, x: usize, y: usize) -> Color {
        self.current_board()
            .get(Vertex::new(x, y))
            .unwrap_or(Color::Empty)
    }

    /// Color of the point `(x, y)` at `turn`.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfBounds` for off-board points and `UnknownTurn` past
    /// the last snapshot.
    pub fn color_at_turn(
        &self,
        x: usize,
        y: usize,
        turn: usize,
    ) -> Result<Color, IllegalMoveError> {
        let vertex = Vertex::new(x, y);
        self.board_at(turn)?
            .get(vertex)
            .ok_or(IllegalMoveError::OutOfBounds {
                vertex,
                board_size: self.board_size,
            })
    }

    /// Board the current player would produce by playing at `vertex`.
    ///
    /// Occupancy and superko are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::OutOfBounds`] for off-board vertices.
    pub fn virtual_move(&self, vertex: Vertex) -> Result<BoardState, IllegalMoveError> {
        rules::virtual_move(self.current_board(), vertex, self.current_player())
    }

    /// Checks `mv` for the current player, returning the first failed rule.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds`, `Occupied` or `Superko`.
    pub fn check_legal(&self, mv: Move) -> Result<(), IllegalMoveError> {
        CommitContract::pre(self, &mv)
    }

    /// True if `mv` may be committed now. Passes are always legal.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_legal(mv).is_ok()
    }

    /// True if `mv` would have been legal at `turn`.
    ///
    /// Superko compares against snapshots `0..=turn`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::UnknownTurn`] past the last snapshot.
    pub fn is_legal_at(&self, mv: Move, turn: usize) -> Result<bool, IllegalMoveError> {
        self.board_at(turn)?;
        Ok(match mv {
            Move::Pass => true,
            Move::Vertex(vertex) => {
                LegalMove::check(vertex, Color::to_move(turn), self.history.up_to(turn)).is_ok()
            }
        })
    }

    /// True if the current player's stone at `vertex` would be cleared.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::OutOfBounds`] for off-board vertices.
    pub fn is_suicide(&self, vertex: Vertex) -> Result<bool, IllegalMoveError> {
        self.is_suicide_at(vertex, self.last_turn())
    }

    /// Suicide check at `turn`, for the color to move at that turn.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownTurn` or `OutOfBounds`.
    pub fn is_suicide_at(&self, vertex: Vertex, turn: usize) -> Result<bool, IllegalMoveError> {
        rules::is_suicide(self.board_at(turn)?, vertex, Color::to_move(turn))
    }

    /// Legal vertices for the current player, `x` outer and `y` inner.
    pub fn legal_moves(&self) -> Vec<Vertex> {
        self.legal_moves_in(self.history.snapshots(), self.current_player())
    }

    /// Legal vertices for the color to move at `turn`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::UnknownTurn`] past the last snapshot.
    pub fn legal_moves_at(&self, turn: usize) -> Result<Vec<Vertex>, IllegalMoveError> {
        self.board_at(turn)?;
        Ok(self.legal_moves_in(self.history.up_to(turn), Color::to_move(turn)))
    }

    #[instrument(level = "trace", skip_all)]
    fn legal_moves_in(&self, history: &[BoardState], color: Color) -> Vec<Vertex> {
        (0..self.board_size)
            .flat_map(|x| (0..self.board_size).map(move |y| Vertex::new(x, y)))
            .filter(|&v| LegalMove::check(v, color, history).is_ok())
            .collect()
    }

    /// Legal-move grid, row 0 at the top (`y = board_size - 1`).
    pub fn legal_move_mask(&self) -> Vec<Vec<bool>> {
        let n = self.board_size;
        let mut mask = vec![vec![false; n]; n];
        for v in self.legal_moves() {
            mask[n - 1 - v.y][v.x] = true;
        }
        mask
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Plays `mv` for the current player after checking legality.
    ///
    /// # Errors
    ///
    /// Returns the failed precondition; the game is left unchanged.
    #[instrument(skip(self), fields(turn = self.last_turn(), player = ?self.current_player()))]
    pub fn play_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        let vertex = match mv {
            Move::Pass => {
                self.skip_turn();
                return Ok(());
            }
            Move::Vertex(vertex) => vertex,
        };

        let next = LegalMove::check(vertex, self.current_player(), self.board_states())?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.commit(next, mv);

        #[cfg(debug_assertions)]
        debug_assert!(
            CommitContract::post(&before, self).is_ok(),
            "commit postcondition violated"
        );
        Ok(())
    }

    /// Plays `mv` without occupancy or superko checks.
    ///
    /// Captures still apply.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::OutOfBounds`] for off-board vertices.
    #[instrument(skip(self), fields(turn = self.last_turn()))]
    pub fn play_move_unchecked(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        match mv {
            Move::Pass => self.skip_turn(),
            Move::Vertex(vertex) => {
                let next = self.virtual_move(vertex)?;
                self.commit(next, mv);
            }
        }
        Ok(())
    }

    /// Passes: appends a copy of the current board.
    pub fn skip_turn(&mut self) {
        let next = self.current_board().clone();
        self.commit(next, Move::Pass);
    }

    fn commit(&mut self, next: BoardState, mv: Move) {
        let player = self.current_player();
        self.history.push(next, mv);
        debug!(turn = self.last_turn(), ?player, %mv, "Committed move");
        debug_assert_eq!(self.board_states().len(), self.moves().len() + 1);
    }

    /// Removes the last turn and returns its snapshot.
    ///
    /// Returns `None` when no moves have been played.
    #[instrument(skip(self), fields(turn = self.last_turn()))]
    pub fn undo(&mut self) -> Option<BoardState> {
        let (snapshot, mv) = self.history.pop()?;
        debug!(%mv, "Undid move");
        Some(snapshot)
    }
}

// ─────────────────────────────────────────────────────────────
//  Status and scoring
// ─────────────────────────────────────────────────────────────

impl Game {
    /// True once the last two moves are passes.
    pub fn is_over(&self) -> bool {
        matches!(self.moves(), [.., Move::Pass, Move::Pass])
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Area score of the current board.
    pub fn score(&self) -> Score {
        rules::score(self.current_board(), self.komi)
    }

    /// Area score of the snapshot at `turn`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::UnknownTurn`] past the last snapshot.
    pub fn score_at(&self, turn: usize) -> Result<Score, IllegalMoveError> {
        Ok(rules::score(self.board_at(turn)?, self.komi))
    }

    /// Winner of a finished game; `None` while in progress or on a tie.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_over() {
            return None;
        }
        self.score().leader()
    }

    /// Result of a finished game; `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let score = self.score();
        Some(match score.leader() {
            Some(color) => Outcome::Winner {
                color,
                margin: score.margin(),
            },
            None => Outcome::Draw,
        })
    }

    /// Checks every history invariant.
    ///
    /// # Errors
    ///
    /// Returns each violated invariant.
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        GoInvariants::check_all(self)
    }
}

// ─────────────────────────────────────────────────────────────
//  SGF
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Serializes the game as FF[4] SGF with an optional root comment.
    ///
    /// # Errors
    ///
    /// Returns [`SgfError::InvalidProperty`] for boards larger than 26.
    pub fn to_sgf(&self, comment: Option<&str>) -> Result<String, SgfError> {
        sgf::write(self, comment)
    }

    /// Parses an SGF record, replaying every move with legality checks.
    ///
    /// # Errors
    ///
    /// Returns [`SgfError`] for malformed input or illegal moves.
    pub fn from_sgf(text: &str) -> Result<Self, SgfError> {
        sgf::read(text, SgfOptions::default())
    }

    /// Parses an SGF record without occupancy or superko checks.
    ///
    /// # Errors
    ///
    /// Returns [`SgfError`] for malformed input or off-board moves.
    pub fn from_sgf_unchecked(text: &str) -> Result<Self, SgfError> {
        sgf::read(
            text,
            SgfOptions {
                check_legal: false,
                ..SgfOptions::default()
            },
        )
    }

    /// Parses an SGF record with explicit [`SgfOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`SgfError`] for malformed input or rejected moves.
    pub fn from_sgf_with(text: &str, options: SgfOptions) -> Result<Self, SgfError> {
        sgf::read(text, options)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            board_size: usize,
            komi: f64,
            history: BoardHistory,
        }

        let Raw {
            board_size,
            komi,
            history,
        } = Raw::deserialize(deserializer)?;
        if history.current().size() != board_size {
            return Err(de::Error::custom(format!(
                "board_size {board_size} disagrees with {}x{0} snapshots",
                history.current().size()
            )));
        }
        let game = Self {
            board_size,
            komi,
            history,
        };
        <(HistoryLengthInvariant, ReplayConsistentInvariant)>::check_all(&game).map_err(
            |violations| {
                let described: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                de::Error::custom(described.join("; "))
            },
        )?;
        Ok(game)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game(board_size={}, komi={}, moves={}, to_move={:?})",
            self.board_size,
            self.komi,
            self.moves().len(),
            self.current_player()
        )?;
        write!(f, "{}", self.current_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty_black_to_move() {
        let game = Game::new(9, DEFAULT_KOMI);
        assert_eq!(game.board_states().len(), 1);
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.legal_moves().len(), 81);
    }

    #[test]
    fn test_occupied_rejected_and_game_unchanged() {
        let mut game = Game::new(5, 0.0);
        game.play_move(Move::at(2, 2)).unwrap();
        let before = game.clone();
        assert!(matches!(
            game.play_move(Move::at(2, 2)),
            Err(IllegalMoveError::Occupied { .. })
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected_even_unchecked() {
        let mut game = Game::new(5, 0.0);
        assert!(matches!(
            game.play_move_unchecked(Move::at(5, 0)),
            Err(IllegalMoveError::OutOfBounds { .. })
        ));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_undo_returns_discarded_snapshot() {
        let mut game = Game::new(5, 0.0);
        game.play_move(Move::at(1, 1)).unwrap();
        let undone = game.undo().unwrap();
        assert_eq!(undone.get(Vertex::new(1, 1)), Some(Color::Black));
        assert_eq!(game.current_player(), Color::Black);
        assert!(game.undo().is_none());
    }

    #[test]
    fn test_two_passes_end_game_and_undo_reopens() {
        let mut game = Game::new(5, 0.5);
        game.play_move(Move::Pass).unwrap();
        assert!(game.winner().is_none());
        game.play_move(Move::Pass).unwrap();
        assert_eq!(game.status(), GameStatus::Over);
        assert_eq!(game.winner(), Some(Color::White));
        assert_eq!(game.outcome().unwrap().to_string(), "W+0.5");

        game.undo();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_zero_komi_pass_out_is_draw() {
        let mut game = Game::new(5, 0.0);
        game.skip_turn();
        game.skip_turn();
        assert_eq!(game.winner(), None);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(Outcome::Draw.to_string(), "0");
    }

    #[test]
    fn test_queries_at_earlier_turn() {
        let mut game = Game::new(3, 0.0);
        game.play_move(Move::at(0, 0)).unwrap();
        assert_eq!(game.color_at_turn(0, 0, 0).unwrap(), Color::Empty);
        assert_eq!(game.color_at_turn(0, 0, 1).unwrap(), Color::Black);
        assert!(game.is_legal_at(Move::at(0, 0), 0).unwrap());
        assert!(!game.is_legal(Move::at(0, 0)));
        assert_eq!(game.legal_moves_at(0).unwrap().len(), 9);
        assert!(matches!(
            game.score_at(5),
            Err(IllegalMoveError::UnknownTurn { turn: 5, available: 2 })
        ));
    }

    #[test]
    fn test_legal_move_mask_is_top_down() {
        let mut game = Game::new(3, 0.0);
        game.play_move(Move::at(0, 2)).unwrap();
        let mask = game.legal_move_mask();
        assert!(!mask[0][0]);
        assert!(mask[2][0]);
    }

    #[test]
    fn test_verify_clean_game() {
        let mut game = Game::new(5, 7.5);
        for mv in [Move::at(0, 0), Move::at(4, 4), Move::Pass, Move::at(2, 2)] {
            game.play_move(mv).unwrap();
        }
        assert!(game.verify().is_ok());
    }
}
