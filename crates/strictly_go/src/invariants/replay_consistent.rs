//! Replay consistency: every snapshot is its predecessor plus its move.

use super::super::rules::virtual_move;
use super::super::types::{Color, Move};
use super::super::Game;
use super::Invariant;

/// Invariant: `snapshots[i + 1]` is `moves[i]` applied to `snapshots[i]`.
///
/// Holds for unchecked play too, since bypassing legality never bypasses the
/// capture rules.
pub struct ReplayConsistentInvariant;

impl Invariant<Game> for ReplayConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let states = game.board_states();
        game.moves().iter().enumerate().all(|(i, mv)| {
            let (before, after) = (&states[i], &states[i + 1]);
            match mv {
                Move::Pass => before == after,
                Move::Vertex(v) => virtual_move(before, *v, Color::to_move(i))
                    .map(|next| &next == after)
                    .unwrap_or(false),
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot is the previous snapshot with its move applied"
    }
}
