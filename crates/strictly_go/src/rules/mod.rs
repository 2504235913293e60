//! Tromp-Taylor rules for Go.
//!
//! This module contains pure functions over [`BoardState`](super::BoardState)
//! snapshots. Rules are separated from history storage so the same code
//! computes hypothetical boards, live moves and final scores.

pub mod capture;
pub mod distance;
pub mod score;

pub use capture::{clear_color, is_suicide, virtual_move};
pub use distance::{components, taxicab_distances};
pub use score::{Score, score};
