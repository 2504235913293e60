//! Positional superko: stone placements never recreate an earlier position.

use super::super::types::Move;
use super::super::Game;
use super::Invariant;

/// Invariant: after every vertex move, the new snapshot differs from all
/// earlier snapshots.
///
/// Passes repeat the previous snapshot by definition and are exempt.
pub struct PositionalSuperkoInvariant;

impl Invariant<Game> for PositionalSuperkoInvariant {
    fn holds(game: &Game) -> bool {
        let states = game.board_states();
        game.moves().iter().enumerate().all(|(i, mv)| match mv {
            Move::Pass => true,
            Move::Vertex(_) => !states[..=i].contains(&states[i + 1]),
        })
    }

    fn description() -> &'static str {
        "No stone placement repeats an earlier board state"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, IllegalMoveError};

    /// Sets up a ko on a 4x4 board with White to capture at (1, 1).
    fn ko_game() -> Game {
        let mut game = Game::new(4, 0.0);
        let moves = [
            Move::at(1, 0), // B
            Move::at(2, 0), // W
            Move::at(0, 1), // B
            Move::at(3, 1), // W
            Move::at(1, 2), // B
            Move::at(2, 2), // W
            Move::at(2, 1), // B
        ];
        for mv in moves {
            game.play_move(mv).unwrap();
        }
        game
    }

    #[test]
    fn test_ko_recapture_is_rejected() {
        let mut game = ko_game();
        // White takes the ko.
        game.play_move(Move::at(1, 1)).unwrap();
        assert_eq!(game.color_at(2, 1), Color::Empty);
        // Immediate recapture would restore the position before White's move.
        assert!(matches!(
            game.play_move(Move::at(2, 1)),
            Err(IllegalMoveError::Superko { .. })
        ));
        assert!(PositionalSuperkoInvariant::holds(&game));
    }

    #[test]
    fn test_unchecked_recapture_violates() {
        let mut game = ko_game();
        game.play_move(Move::at(1, 1)).unwrap();
        game.play_move_unchecked(Move::at(2, 1)).unwrap();
        assert!(!PositionalSuperkoInvariant::holds(&game));
    }

    #[test]
    fn test_passes_are_exempt() {
        let mut game = Game::new(5, 7.5);
        game.skip_turn();
        game.skip_turn();
        assert!(PositionalSuperkoInvariant::holds(&game));
    }
}
