//! Policy-layer filtering of the raw legal-move set.
//!
//! Raw legality (see [`contracts`](super::contracts)) permits suicide. Policies
//! that do not want to play suicide moves filter them here, on top of the
//! legal set, rather than in the legality check itself.

use super::game::Game;
use super::types::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Candidate-move filter applied on top of [`Game::legal_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFilter {
    /// Keep moves whose own stones are immediately cleared.
    pub allow_suicide: bool,
    /// Append [`Move::Pass`] to the candidates.
    pub allow_pass: bool,
}

impl Default for MoveFilter {
    fn default() -> Self {
        Self {
            allow_suicide: false,
            allow_pass: true,
        }
    }
}

impl MoveFilter {
    /// Creates a filter.
    pub fn new(allow_suicide: bool, allow_pass: bool) -> Self {
        Self {
            allow_suicide,
            allow_pass,
        }
    }

    /// Moves a policy may choose from in the current position.
    #[instrument(skip(game), fields(turn = game.moves().len()))]
    pub fn candidates(&self, game: &Game) -> Vec<Move> {
        let legal = game.legal_moves();
        let total = legal.len();

        let mut moves: Vec<Move> = legal
            .into_iter()
            .filter(|v| self.allow_suicide || !game.is_suicide(*v).unwrap_or(false))
            .map(Move::Vertex)
            .collect();

        debug!(legal = total, kept = moves.len(), "Filtered candidate moves");

        if self.allow_pass {
            moves.push(Move::Pass);
        }
        moves
    }
}
