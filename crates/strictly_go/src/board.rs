//! Immutable board snapshots.

use super::types::{Color, Vertex};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// A `size x size` grid of [`Color`].
///
/// Points are stored row-major with row 0 at the bottom edge (`y == 0`).
/// Stored snapshots are never mutated; the rules engine copies a board and
/// modifies the copy.
///
/// Deserialization rejects point lists whose length is not `size * size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardState {
    size: usize,
    points: Vec<Color>,
}

impl BoardState {
    /// Creates an empty board.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            points: vec![Color::Empty; size * size],
        }
    }

    /// Builds a board from rows listed top to bottom, the way a diagram is
    /// read: `rows[0]` is the row at `y == size - 1`.
    ///
    /// Returns `None` unless the rows form a square.
    pub fn from_rows(rows: &[Vec<Color>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        let mut board = Self::empty(size);
        for (row_idx, row) in rows.iter().enumerate() {
            let y = size - row_idx - 1;
            for (x, color) in row.iter().enumerate() {
                board.set(Vertex::new(x, y), *color);
            }
        }
        Some(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of points on the board.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true for a zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Color at `vertex`, or `None` off the board.
    pub fn get(&self, vertex: Vertex) -> Option<Color> {
        self.index(vertex).map(|i| self.points[i])
    }

    /// Sets a point on a board that has not been stored yet.
    ///
    /// Off-board vertices are ignored.
    pub(crate) fn set(&mut self, vertex: Vertex, color: Color) {
        if let Some(i) = self.index(vertex) {
            self.points[i] = color;
        }
    }

    /// Flat index of an on-board vertex.
    pub fn index(&self, vertex: Vertex) -> Option<usize> {
        vertex
            .is_on_board(self.size)
            .then(|| vertex.y * self.size + vertex.x)
    }

    /// Vertex for a flat index.
    pub fn vertex(&self, index: usize) -> Vertex {
        Vertex::new(index % self.size, index / self.size)
    }

    /// Colors in flat index order.
    pub fn points(&self) -> &[Color] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Color] {
        &mut self.points
    }

    /// Flat indices of the orthogonal neighbours of `index`.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let size = self.size;
        let (x, y) = (index % size, index / size);
        let mut out = [None; 4];
        if x > 0 {
            out[0] = Some(index - 1);
        }
        if x + 1 < size {
            out[1] = Some(index + 1);
        }
        if y > 0 {
            out[2] = Some(index - size);
        }
        if y + 1 < size {
            out[3] = Some(index + size);
        }
        out.into_iter().flatten()
    }

    /// Number of points holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.points.iter().filter(|c| **c == color).count()
    }

    /// Rows top to bottom, the inverse of [`BoardState::from_rows`].
    pub fn rows(&self) -> Vec<Vec<Color>> {
        (0..self.size)
            .rev()
            .map(|y| self.points[y * self.size..(y + 1) * self.size].to_vec())
            .collect()
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            size: usize,
            points: Vec<Color>,
        }

        let Raw { size, points } = Raw::deserialize(deserializer)?;
        if size.checked_mul(size) != Some(points.len()) {
            return Err(de::Error::custom(format!(
                "board of size {size} needs {} points, got {}",
                size.saturating_mul(size),
                points.len()
            )));
        }
        Ok(Self { size, points })
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (x, color) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                let symbol = match color {
                    Color::Empty => '.',
                    Color::Black => 'X',
                    Color::White => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
