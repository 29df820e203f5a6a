//! Persisted record types mirroring the external JSON schema
//!
//! Schema (per mode key):
//! `{ tiles: [{id, correctId, color:{r,g,b}, isFixed, currentIndex}],
//!   status, gridDimension, moveCount, corners:{tl,tr,bl,br}, minMoves,
//!   mode }`

use serde::{Deserialize, Serialize};

use huesort_core::{Corners, Game, Rgb, Tile};
use huesort_types::{GameMode, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl From<Rgb> for PersistedColor {
    fn from(value: Rgb) -> Self {
        Self {
            r: value.r,
            g: value.g,
            b: value.b,
        }
    }
}

impl From<PersistedColor> for Rgb {
    fn from(value: PersistedColor) -> Self {
        Rgb::new(value.r, value.g, value.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedCorners {
    pub tl: PersistedColor,
    pub tr: PersistedColor,
    pub bl: PersistedColor,
    pub br: PersistedColor,
}

impl From<Corners> for PersistedCorners {
    fn from(value: Corners) -> Self {
        Self {
            tl: value.tl.into(),
            tr: value.tr.into(),
            bl: value.bl.into(),
            br: value.br.into(),
        }
    }
}

impl From<PersistedCorners> for Corners {
    fn from(value: PersistedCorners) -> Self {
        Corners {
            tl: value.tl.into(),
            tr: value.tr.into(),
            bl: value.bl.into(),
            br: value.br.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTile {
    pub id: usize,
    pub correct_id: usize,
    pub color: PersistedColor,
    pub is_fixed: bool,
    pub current_index: usize,
}

impl From<&Tile> for PersistedTile {
    fn from(value: &Tile) -> Self {
        Self {
            id: value.id,
            correct_id: value.correct_id,
            color: value.color.into(),
            is_fixed: value.is_fixed,
            current_index: value.current_index,
        }
    }
}

impl From<&PersistedTile> for Tile {
    fn from(value: &PersistedTile) -> Self {
        Tile {
            id: value.id,
            correct_id: value.correct_id,
            color: value.color.into(),
            is_fixed: value.is_fixed,
            current_index: value.current_index,
        }
    }
}

/// One mode's complete saved run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub tiles: Vec<PersistedTile>,
    pub status: GameStatus,
    pub grid_dimension: usize,
    pub move_count: u32,
    pub corners: PersistedCorners,
    pub min_moves: usize,
    pub mode: GameMode,
}

impl PersistedState {
    /// Capture the current game state into a record.
    ///
    /// Returns `None` before the first level exists (no corners yet).
    pub fn capture(game: &Game) -> Option<Self> {
        let corners = (*game.corners()?).into();
        Some(Self {
            tiles: game.tiles().iter().map(PersistedTile::from).collect(),
            status: game.status(),
            grid_dimension: game.dimension(),
            move_count: game.moves(),
            corners,
            min_moves: game.min_moves(),
            mode: game.mode(),
        })
    }

    /// Rebuild a game from this record; `level` comes from the per-mode
    /// completion counter, which is stored separately.
    pub fn into_game(self, level: u32) -> Game {
        Game::restore(
            self.tiles.iter().map(Tile::from).collect(),
            self.status,
            self.mode,
            self.grid_dimension,
            level,
            self.move_count,
            self.min_moves,
            self.corners.into(),
        )
    }
}
