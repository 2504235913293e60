//! Tests for mirror-go geometry.

use strictly_go::{Vertex, l1_distance, mirror_move};

#[test]
fn test_mirror_is_involution_on_board() {
    for board_size in [9, 13, 19] {
        for x in 0..board_size {
            for y in 0..board_size {
                let v = Vertex::new(x, y);
                let m = mirror_move(v, board_size);
                assert!(m.is_on_board(board_size), "{v} -> {m} left the board");
                assert_eq!(mirror_move(m, board_size), v);
            }
        }
    }
}

#[test]
fn test_mirror_preserves_distance_to_centre() {
    let centre = Vertex::new(9, 9);
    for v in [Vertex::new(0, 0), Vertex::new(3, 15), Vertex::new(18, 2)] {
        assert_eq!(
            l1_distance(v, centre),
            l1_distance(mirror_move(v, 19), centre)
        );
    }
}
