//! History length invariant: one snapshot per move plus the initial board.

use super::super::Game;
use super::Invariant;

/// Invariant: `board_states().len() == moves().len() + 1`.
pub struct HistoryLengthInvariant;

impl Invariant<Game> for HistoryLengthInvariant {
    fn holds(game: &Game) -> bool {
        game.board_states().len() == game.moves().len() + 1
    }

    fn description() -> &'static str {
        "Snapshot count is move count plus one"
    }
}
