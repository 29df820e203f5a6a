//! Read-only state copies handed to collaborators
//!
//! UI layers render from snapshots and send discrete intents back; they
//! never mutate tile data directly.

use crate::grid::Tile;
use huesort_types::{GameMode, GameStatus};

/// A point-in-time copy of the full game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub tiles: Vec<Tile>,
    pub status: GameStatus,
    pub mode: GameMode,
    pub dimension: usize,
    pub level: u32,
    pub moves: u32,
    pub min_moves: usize,
    pub selected: Option<usize>,
    pub epoch: u32,
}

impl GameSnapshot {
    /// Number of tiles currently sitting at their correct index.
    pub fn placed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_placed()).count()
    }

    pub fn is_solved(&self) -> bool {
        self.placed_count() == self.tiles.len()
    }
}
