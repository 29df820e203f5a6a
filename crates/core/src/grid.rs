//! Grid builder - lays out the N x N tile grid from four corner colors
//!
//! Tiles are flat-indexed row-major (`index = y * n + x`). The four
//! geometric corners are fixed anchors: they keep their position through
//! shuffling and are never swappable.

use anyhow::{ensure, Result};
use arrayvec::ArrayVec;

use crate::color::{Corners, Rgb};
use huesort_types::{MAX_GRID_DIM, MIN_GRID_DIM};

/// One tile of the puzzle grid.
///
/// `id` is the stable identity assigned once per level; `correct_id` is
/// the flat index this tile's color belongs at; `current_index` mirrors
/// the tile's position in the authoritative array and is rewritten on
/// every swap so the UI can map identities to positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: usize,
    pub correct_id: usize,
    pub color: Rgb,
    pub is_fixed: bool,
    pub current_index: usize,
}

impl Tile {
    /// True when the tile sits at the index its color belongs at.
    pub fn is_placed(&self) -> bool {
        self.correct_id == self.current_index
    }
}

/// Build a solved `dimension` x `dimension` grid from the corner colors.
///
/// Before shuffling, `id`, `correct_id` and `current_index` all equal
/// the flat index. Dimensions outside [4,12] are rejected outright; the
/// bound is policy, so it is never silently clamped.
pub fn build_grid(dimension: usize, corners: &Corners) -> Result<Vec<Tile>> {
    ensure!(
        (MIN_GRID_DIM..=MAX_GRID_DIM).contains(&dimension),
        "grid dimension {dimension} outside supported range {MIN_GRID_DIM}..={MAX_GRID_DIM}"
    );

    let mut tiles = Vec::with_capacity(dimension * dimension);
    for y in 0..dimension {
        for x in 0..dimension {
            let index = y * dimension + x;
            tiles.push(Tile {
                id: index,
                correct_id: index,
                color: Rgb::interpolated(x, y, dimension, dimension, corners),
                is_fixed: is_corner(x, y, dimension),
                current_index: index,
            });
        }
    }
    Ok(tiles)
}

/// Whether (x, y) is one of the four geometric corners.
pub fn is_corner(x: usize, y: usize, dimension: usize) -> bool {
    let last = dimension - 1;
    (x == 0 || x == last) && (y == 0 || y == last)
}

/// Flat indices of the four anchor corners of an N x N grid.
pub fn corner_indices(dimension: usize) -> ArrayVec<usize, 4> {
    let last = dimension - 1;
    let mut out = ArrayVec::new();
    out.push(0);
    out.push(last);
    out.push(last * dimension);
    out.push(last * dimension + last);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_corners() -> Corners {
        Corners {
            tl: Rgb::new(1.0, 1.0, 1.0),
            tr: Rgb::new(1.0, 0.0, 0.0),
            bl: Rgb::new(0.0, 1.0, 0.0),
            br: Rgb::new(0.0, 0.0, 0.2),
        }
    }

    #[test]
    fn test_build_grid_rejects_bad_dimension() {
        let c = test_corners();
        assert!(build_grid(3, &c).is_err());
        assert!(build_grid(13, &c).is_err());
        assert!(build_grid(0, &c).is_err());
        for dim in MIN_GRID_DIM..=MAX_GRID_DIM {
            assert!(build_grid(dim, &c).is_ok());
        }
    }

    #[test]
    fn test_fresh_grid_identity_invariant() {
        let tiles = build_grid(5, &test_corners()).unwrap();
        assert_eq!(tiles.len(), 25);
        for (i, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.id, i);
            assert_eq!(tile.correct_id, i);
            assert_eq!(tile.current_index, i);
        }
    }

    #[test]
    fn test_correct_ids_are_a_full_set() {
        let tiles = build_grid(6, &test_corners()).unwrap();
        let mut ids: Vec<usize> = tiles.iter().map(|t| t.correct_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..36).collect::<Vec<_>>());
    }

    #[test]
    fn test_exactly_four_fixed_corners() {
        for dim in MIN_GRID_DIM..=MAX_GRID_DIM {
            let tiles = build_grid(dim, &test_corners()).unwrap();
            let fixed: Vec<usize> = tiles
                .iter()
                .filter(|t| t.is_fixed)
                .map(|t| t.correct_id)
                .collect();
            assert_eq!(fixed.len(), 4);
            assert_eq!(fixed, corner_indices(dim).to_vec());
        }
    }

    #[test]
    fn test_corner_tiles_carry_corner_colors() {
        let c = test_corners();
        let dim = 4;
        let tiles = build_grid(dim, &c).unwrap();
        assert_eq!(tiles[0].color, c.tl);
        assert_eq!(tiles[dim - 1].color, c.tr);
        assert_eq!(tiles[dim * (dim - 1)].color, c.bl);
        assert_eq!(tiles[dim * dim - 1].color, c.br);
    }

    #[test]
    fn test_is_corner() {
        assert!(is_corner(0, 0, 4));
        assert!(is_corner(3, 0, 4));
        assert!(is_corner(0, 3, 4));
        assert!(is_corner(3, 3, 4));
        assert!(!is_corner(1, 0, 4));
        assert!(!is_corner(3, 1, 4));
        assert!(!is_corner(2, 2, 4));
    }
}
