//! Subcommand implementations. Each returns the text to print.

use crate::cli::{Cli, Command};
use crate::config::EngineConfig;
use anyhow::{Context, Result};
use std::path::Path;
use strictly_go::{AnalysisQuery, Game, Move, MoveFilter, SgfOptions, mirror_move};
use tracing::{info, instrument};

/// Runs the parsed command line against `config`.
#[instrument(skip_all, fields(command = ?cli.command))]
pub fn run(cli: &Cli, config: &EngineConfig) -> Result<String> {
    let options = SgfOptions {
        check_legal: *config.check_legal() && !cli.unchecked,
        default_komi: *config.komi(),
    };

    match &cli.command {
        Command::Score { sgf } => Ok(score_report(&load_game(sgf, options)?)),
        Command::Legal {
            sgf,
            allow_suicide,
            no_pass,
        } => {
            let filter = MoveFilter::new(*allow_suicide || *config.allow_suicide(), !no_pass);
            legal_report(&load_game(sgf, options)?, filter)
        }
        Command::Show { sgf, turn } => show_report(&load_game(sgf, options)?, *turn),
        Command::Analysis {
            sgf,
            id,
            max_visits,
            output,
        } => {
            let json = analysis_json(&load_game(sgf, options)?, id, *max_visits)?;
            match output {
                Some(path) => {
                    std::fs::write(path, format!("{json}\n"))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Wrote analysis query");
                    Ok(format!("Wrote analysis query to {}", path.display()))
                }
                None => Ok(json),
            }
        }
        Command::Mirror { vertex, size } => mirror_report(vertex, *size),
    }
}

/// Reads and replays an SGF file.
#[instrument(skip(options), fields(path = %path.display()))]
pub fn load_game(path: &Path, options: SgfOptions) -> Result<Game> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let game = Game::from_sgf_with(&text, options)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    info!(
        board_size = game.board_size(),
        moves = game.moves().len(),
        "Loaded game"
    );
    Ok(game)
}

/// Scores and result line of the final position.
pub fn score_report(game: &Game) -> String {
    let score = game.score();
    let result = match game.outcome() {
        Some(outcome) => outcome.to_string(),
        None => format!("{} (not finished)", game.status()),
    };
    format!("B {}\nW {}\nResult: {}", score.black, score.white, result)
}

/// Candidate moves as GTP vertices, one line.
pub fn legal_report(game: &Game, filter: MoveFilter) -> Result<String> {
    let moves = filter
        .candidates(game)
        .into_iter()
        .map(Move::to_vertex_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(moves.join(" "))
}

/// Board diagram at `turn`, or at the final position.
pub fn show_report(game: &Game, turn: Option<usize>) -> Result<String> {
    let turn = turn.unwrap_or(game.moves().len());
    let board = game.board_at(turn)?;
    let to_move = if turn % 2 == 0 { "B" } else { "W" };
    Ok(format!("Turn {turn}, {to_move} to move\n{board}"))
}

/// Single-line analysis query for the final position.
pub fn analysis_json(game: &Game, id: &str, max_visits: Option<u32>) -> Result<String> {
    let mut query = AnalysisQuery::from_game(game, id)?;
    if let Some(visits) = max_visits {
        query = query.with_max_visits(visits);
    }
    Ok(query.to_json()?)
}

/// Mirror-go reply to a GTP vertex.
pub fn mirror_report(vertex: &str, board_size: usize) -> Result<String> {
    let mv: Move = vertex.parse()?;
    let Some(v) = mv.vertex() else {
        return Ok(Move::Pass.to_string());
    };
    anyhow::ensure!(
        v.is_on_board(board_size),
        "{vertex} is off a {board_size}x{board_size} board"
    );
    Ok(Move::Vertex(mirror_move(v, board_size)).to_vertex_string()?)
}
