//! KataGo analysis-engine queries.
//!
//! Converts a [`Game`] into the JSON query the external engine reads on
//! stdin, one object per line.

use super::error::VertexParseError;
use super::game::Game;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rules name sent with every query.
pub const RULES: &str = "tromp-taylor";

/// A KataGo analysis query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisQuery {
    /// Caller-chosen query identifier, echoed in the response.
    pub id: String,
    /// Setup stones as `[color, vertex]`; always empty here.
    pub initial_stones: Vec<[String; 2]>,
    /// Moves as `[color, GTP vertex]`, passes as `"pass"`.
    pub moves: Vec<[String; 2]>,
    /// Always [`RULES`].
    pub rules: String,
    /// Komi credited to White.
    pub komi: f64,
    /// Board width.
    pub board_x_size: usize,
    /// Board height.
    pub board_y_size: usize,
    /// Turns to analyze; turn `n` is the position after `n` moves.
    pub analyze_turns: Vec<usize>,
    /// Search budget per analyzed turn.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_visits: Option<u32>,
}

impl AnalysisQuery {
    /// Builds a query analyzing the final position of `game`.
    ///
    /// # Errors
    ///
    /// Returns [`VertexParseError::ColumnOutOfRange`] if a move lies beyond
    /// the GTP column alphabet.
    #[instrument(skip(game, id), fields(moves = game.moves().len()))]
    pub fn from_game(game: &Game, id: impl Into<String>) -> Result<Self, VertexParseError> {
        let moves = game
            .moves()
            .iter()
            .enumerate()
            .map(|(turn, mv)| {
                let player = if turn % 2 == 0 { "B" } else { "W" };
                Ok([player.to_string(), mv.to_vertex_string()?])
            })
            .collect::<Result<Vec<_>, VertexParseError>>()?;

        Ok(Self {
            id: id.into(),
            initial_stones: Vec::new(),
            analyze_turns: vec![moves.len()],
            moves,
            rules: RULES.to_string(),
            komi: game.komi(),
            board_x_size: game.board_size(),
            board_y_size: game.board_size(),
            max_visits: None,
        })
    }

    /// Sets the search budget.
    pub fn with_max_visits(mut self, visits: u32) -> Self {
        self.max_visits = Some(visits);
        self
    }

    /// Replaces the analyzed turns.
    pub fn with_analyze_turns(mut self, turns: Vec<usize>) -> Self {
        self.analyze_turns = turns;
        self
    }

    /// Compact single-line JSON, as the engine expects.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
