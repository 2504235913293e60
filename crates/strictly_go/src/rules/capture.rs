//! Stone placement and group clearing.

use super::super::board::BoardState;
use super::super::error::IllegalMoveError;
use super::super::types::{Color, Vertex};
use super::distance::{components, reaches, taxicab_distances};
use tracing::{instrument, trace};

/// Removes every group of `color` that does not reach an empty point.
///
/// Liberties are measured once, before any group is removed. Returns the
/// number of stones taken off the board.
#[instrument(level = "trace", skip(board))]
pub fn clear_color(board: &mut BoardState, color: Color) -> usize {
    let to_empty = taxicab_distances(board, Color::Empty);
    let dead: Vec<Vec<usize>> = components(board, color)
        .into_iter()
        .filter(|group| !reaches(group, &to_empty))
        .collect();

    let mut removed = 0;
    let points = board.points_mut();
    for group in dead {
        removed += group.len();
        for i in group {
            points[i] = Color::Empty;
        }
    }

    if removed > 0 {
        trace!(removed, "Cleared stones without liberties");
    }
    removed
}

/// Computes the board that results from `color` playing at `vertex`.
///
/// The stone is placed, then the opponent's dead groups are cleared, then the
/// mover's own. Occupancy and repetition are not checked here; a move onto an
/// occupied point simply recolors it.
///
/// Playing [`Color::Empty`] leaves the board unchanged.
///
/// # Errors
///
/// Returns [`IllegalMoveError::OutOfBounds`] if `vertex` is off the board.
#[instrument(level = "trace", skip(board))]
pub fn virtual_move(
    board: &BoardState,
    vertex: Vertex,
    color: Color,
) -> Result<BoardState, IllegalMoveError> {
    if !vertex.is_on_board(board.size()) {
        return Err(IllegalMoveError::OutOfBounds {
            vertex,
            board_size: board.size(),
        });
    }
    let mut next = board.clone();
    let Ok(opponent) = color.opponent() else {
        return Ok(next);
    };
    next.set(vertex, color);
    clear_color(&mut next, opponent);
    clear_color(&mut next, color);
    Ok(next)
}

/// True if `color` playing at `vertex` leaves that vertex empty.
///
/// # Errors
///
/// Returns [`IllegalMoveError::OutOfBounds`] if `vertex` is off the board.
pub fn is_suicide(
    board: &BoardState,
    vertex: Vertex,
    color: Color,
) -> Result<bool, IllegalMoveError> {
    let next = virtual_move(board, vertex, color)?;
    Ok(next.get(vertex) == Some(Color::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: Color = Color::Black;
    const W: Color = Color::White;
    const E: Color = Color::Empty;

    fn board(rows: &[Vec<Color>]) -> BoardState {
        BoardState::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_stone_capture() {
        let before = board(&[vec![E, B, E], vec![B, W, B], vec![E, E, E]]);
        let after = virtual_move(&before, Vertex::new(1, 0), B).unwrap();
        assert_eq!(
            after,
            board(&[vec![E, B, E], vec![B, E, B], vec![E, B, E]])
        );
    }

    #[test]
    fn test_capture_before_self_capture() {
        // Black fills White's last liberty while having none itself.
        let before = board(&[vec![W, B, E], vec![E, W, B], vec![W, B, E]]);
        let after = virtual_move(&before, Vertex::new(0, 1), B).unwrap();
        assert_eq!(after.get(Vertex::new(0, 1)), Some(B));
        assert_eq!(after.get(Vertex::new(1, 1)), Some(E));
    }

    #[test]
    fn test_suicide_clears_own_group() {
        let before = board(&[vec![E, W, E], vec![W, E, W], vec![E, W, E]]);
        let after = virtual_move(&before, Vertex::new(1, 1), B).unwrap();
        assert_eq!(after, before);
        assert!(is_suicide(&before, Vertex::new(1, 1), B).unwrap());
    }

    #[test]
    fn test_clear_color_keeps_living_groups() {
        let mut b = board(&[vec![B, W, E], vec![W, E, E], vec![E, E, E]]);
        assert_eq!(clear_color(&mut b, B), 1);
        assert_eq!(clear_color(&mut b, W), 0);
        assert_eq!(b.count(W), 2);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let before = BoardState::empty(3);
        assert!(matches!(
            virtual_move(&before, Vertex::new(3, 0), B),
            Err(IllegalMoveError::OutOfBounds { board_size: 3, .. })
        ));
    }
}
