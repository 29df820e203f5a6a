//! Shuffle & permutation engine
//!
//! Shuffles the movable tiles of a grid with a seeded Fisher-Yates while
//! the four corner anchors stay put, and computes the minimum number of
//! swaps needed to restore the gradient via cycle decomposition.

use crate::grid::Tile;
use crate::rng::SimpleRng;

/// Permute the movable tiles of a grid, leaving fixed tiles in place.
///
/// Fixed tiles are re-inserted at their `correct_id` slots; the shuffled
/// movables fill the remaining slots in order. Every tile's
/// `current_index` is rewritten to its new flat position.
pub fn shuffle_tiles(tiles: &[Tile], rng: &mut SimpleRng) -> Vec<Tile> {
    let mut movable: Vec<Tile> = tiles.iter().filter(|t| !t.is_fixed).copied().collect();
    rng.shuffle(&mut movable);

    let mut grid: Vec<Option<Tile>> = vec![None; tiles.len()];
    for tile in tiles.iter().filter(|t| t.is_fixed) {
        grid[tile.correct_id] = Some(*tile);
    }

    let mut next_movable = movable.into_iter();
    let mut out = Vec::with_capacity(tiles.len());
    for (index, slot) in grid.into_iter().enumerate() {
        let mut tile = match slot {
            Some(fixed) => fixed,
            // Slots not owned by an anchor take the next shuffled tile
            None => next_movable.next().expect("movable count matches empty slots"),
        };
        tile.current_index = index;
        out.push(tile);
    }
    out
}

/// Minimum number of swaps to reach the solved state.
///
/// `i -> tiles[i].correct_id` induces a permutation of positions; the
/// answer is `n - cycles` of its disjoint cycle decomposition. A tile
/// already in place (every fixed tile included) is its own 1-cycle.
pub fn min_moves(tiles: &[Tile]) -> usize {
    let n = tiles.len();
    let mut visited = vec![false; n];
    let mut cycles = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            current = tiles[current].correct_id;
        }
        cycles += 1;
    }

    n - cycles
}
