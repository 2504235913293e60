//! Vertex arithmetic used by mirror-style policies.

use super::types::Vertex;

/// Taxicab distance between two vertices.
pub fn l1_distance(a: Vertex, b: Vertex) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// The "Mirror Go" reply to `vertex`.
///
/// Reflects through the board centre. On the `x + y == last` diagonal this is
/// the same as swapping the coordinates. For on-board vertices, applying it
/// twice returns the input. Off-board input is clamped onto the board first.
pub fn mirror_move(vertex: Vertex, board_size: usize) -> Vertex {
    let last = board_size.saturating_sub(1);
    let (x, y) = (vertex.x.min(last), vertex.y.min(last));
    Vertex::new(last - x, last - y)
}
