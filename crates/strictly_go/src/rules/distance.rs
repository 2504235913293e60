//! Grid traversal primitives: connected components and taxicab distances.

use super::super::board::BoardState;
use super::super::types::Color;
use std::collections::VecDeque;
use tracing::instrument;

/// Labels the maximal 4-connected components of points holding `color`.
///
/// Each component is a list of flat indices.
#[instrument(level = "trace", skip_all, fields(color = ?color))]
pub fn components(board: &BoardState, color: Color) -> Vec<Vec<usize>> {
    let mut seen = vec![false; board.len()];
    let mut groups = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..board.len() {
        if seen[start] || board.points()[start] != color {
            continue;
        }
        seen[start] = true;
        queue.push_back(start);
        let mut group = Vec::new();

        while let Some(i) = queue.pop_front() {
            group.push(i);
            for n in board.neighbors(i) {
                if !seen[n] && board.points()[n] == color {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
        groups.push(group);
    }

    groups
}

/// Taxicab distance from every point to the nearest point holding `color`.
///
/// Distances run across the whole grid regardless of what lies between.
/// Points holding `color` are at distance 0; every entry is `None` when the
/// board has no such point.
#[instrument(level = "trace", skip_all, fields(color = ?color))]
pub fn taxicab_distances(board: &BoardState, color: Color) -> Vec<Option<u32>> {
    let mut dist = vec![None; board.len()];
    let mut queue = VecDeque::new();

    for (i, c) in board.points().iter().enumerate() {
        if *c == color {
            dist[i] = Some(0);
            queue.push_back(i);
        }
    }

    while let Some(i) = queue.pop_front() {
        let next = dist[i].map(|d: u32| d + 1);
        for n in board.neighbors(i) {
            if dist[n].is_none() {
                dist[n] = next;
                queue.push_back(n);
            }
        }
    }

    dist
}

/// True if any point of `region` is at distance exactly 1 in `dist`.
pub fn reaches(region: &[usize], dist: &[Option<u32>]) -> bool {
    region.iter().any(|&i| dist[i] == Some(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;

    const B: Color = Color::Black;
    const W: Color = Color::White;
    const E: Color = Color::Empty;

    #[test]
    fn test_components_split_diagonal_stones() {
        let board = BoardState::from_rows(&[vec![B, E], vec![E, B]]).unwrap();
        assert_eq!(components(&board, B).len(), 2);
        assert_eq!(components(&board, E).len(), 2);
    }

    #[test]
    fn test_components_join_orthogonal_stones() {
        let board = BoardState::from_rows(&[vec![W, W, E], vec![E, W, E], vec![E, E, E]]).unwrap();
        let groups = components(&board, W);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_distances_ignore_obstacles() {
        let board = BoardState::from_rows(&[vec![E, E, E], vec![E, E, E], vec![B, W, E]]).unwrap();
        let dist = taxicab_distances(&board, B);
        let far = board.index(Vertex::new(2, 0)).unwrap();
        assert_eq!(dist[far], Some(2));
        let corner = board.index(Vertex::new(2, 2)).unwrap();
        assert_eq!(dist[corner], Some(4));
    }

    #[test]
    fn test_distances_absent_color() {
        let board = BoardState::empty(4);
        assert!(taxicab_distances(&board, B).iter().all(Option::is_none));
    }
}
