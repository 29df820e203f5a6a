//! Game state machine - the authoritative owner of the tile array
//!
//! Status flow: `Menu -> Preview -> Playing -> Animating -> Won`, with
//! `GameOver` reachable from `Playing` when a Precision move budget runs
//! out. All transitions are synchronous; the preview and celebration
//! delays belong to the caller, which fences its timers with [`Game::epoch`]
//! so a timer armed for an abandoned level can never touch its successor.
//!
//! Intents arriving in the wrong state (swap while not Playing, hint in a
//! mode that forbids it) degrade to no-ops rather than errors: they are
//! reachable through UI races and must never crash the engine.

use anyhow::Result;

use crate::color::Corners;
use crate::grid::{build_grid, Tile};
use crate::palette::generate_corners;
use crate::rng::{palette_seed, shuffle_seed, SimpleRng};
use crate::shuffle::{min_moves, shuffle_tiles};
use crate::snapshot::GameSnapshot;
use huesort_types::{GameMode, GameStatus};

/// Result of a swap intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Nothing happened: wrong state, unknown id, or self-swap.
    Ignored,
    /// Tiles exchanged, game continues.
    Moved,
    /// The swap completed the gradient; status is now `Animating`.
    Solved,
    /// The swap exhausted the move budget; status is now `GameOver`.
    Failed,
}

/// Complete puzzle state for one mode's run.
#[derive(Debug, Clone)]
pub struct Game {
    tiles: Vec<Tile>,
    status: GameStatus,
    mode: GameMode,
    dimension: usize,
    level: u32,
    moves: u32,
    min_moves: usize,
    selected: Option<usize>,
    corners: Option<Corners>,
    /// Monotonic level token (increments on every start_level). Callers
    /// stamp their timers with it and re-check before firing.
    epoch: u32,
}

impl Game {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            status: GameStatus::Menu,
            mode: GameMode::Casual,
            dimension: huesort_types::DEFAULT_GRID_DIM,
            level: 1,
            moves: 0,
            min_moves: 0,
            selected: None,
            corners: None,
            epoch: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Static minimum-swap target published at shuffle time.
    pub fn min_moves(&self) -> usize {
        self.min_moves
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn corners(&self) -> Option<&Corners> {
        self.corners.as_ref()
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Build a fresh level and enter `Preview`.
    ///
    /// Corners regenerate from the level's palette seed unless
    /// `preserve_colors` keeps the previous ones (color-preserving
    /// regeneration, e.g. after a mid-run resize).
    pub fn start_level(
        &mut self,
        mode: GameMode,
        dimension: usize,
        level: u32,
        preserve_colors: bool,
    ) -> Result<()> {
        let corners = match self.corners {
            Some(existing) if preserve_colors => existing,
            _ => {
                let mut rng = SimpleRng::new(palette_seed(mode, level));
                generate_corners(&mut rng)
            }
        };

        // Build before committing any state so a bad dimension leaves
        // the previous level intact.
        let tiles = build_grid(dimension, &corners)?;

        self.tiles = tiles;
        self.corners = Some(corners);
        self.mode = mode;
        self.dimension = dimension;
        self.level = level;
        self.moves = 0;
        self.min_moves = 0;
        self.selected = None;
        self.status = GameStatus::Preview;
        self.epoch = self.epoch.wrapping_add(1);
        Ok(())
    }

    /// Run the shuffle engine and enter `Playing`.
    ///
    /// Only valid from `Preview`; the caller invokes this when its
    /// preview timer fires. Publishes the minimum-move target for the
    /// freshly shuffled layout.
    pub fn shuffle_now(&mut self) -> bool {
        if self.status != GameStatus::Preview {
            return false;
        }

        let mut rng = SimpleRng::new(shuffle_seed(self.mode, self.level));
        self.tiles = shuffle_tiles(&self.tiles, &mut rng);
        self.min_moves = min_moves(&self.tiles);
        self.status = GameStatus::Playing;
        true
    }

    /// Exchange the positions of two tiles, identified by stable id.
    ///
    /// Counts one move. Win check runs first; only a non-winning move
    /// can trip the Precision budget into `GameOver`.
    pub fn swap(&mut self, id_a: usize, id_b: usize) -> SwapOutcome {
        if !self.status.accepts_moves() || id_a == id_b {
            return SwapOutcome::Ignored;
        }
        let (Some(pos_a), Some(pos_b)) = (self.position_of(id_a), self.position_of(id_b)) else {
            return SwapOutcome::Ignored;
        };

        self.swap_positions(pos_a, pos_b);
        self.moves += 1;

        if self.is_solved() {
            self.status = GameStatus::Animating;
            return SwapOutcome::Solved;
        }

        if let Some(limit) = self.mode.move_limit() {
            if self.moves >= limit {
                self.status = GameStatus::GameOver;
                return SwapOutcome::Failed;
            }
        }

        SwapOutcome::Moved
    }

    /// Tap intent: select, deselect, or swap with the prior selection.
    ///
    /// Fixed tiles are never selectable, and modes that lock solved
    /// tiles refuse tiles already sitting in their correct slot. Returns
    /// the swap outcome when a swap was performed, `None` when only the
    /// selection changed.
    pub fn select_tile(&mut self, id: usize) -> Option<SwapOutcome> {
        if !self.status.accepts_moves() {
            return None;
        }
        let pos = self.position_of(id)?;
        let tile = self.tiles[pos];
        if tile.is_fixed || (self.mode.locks_solved() && tile.is_placed()) {
            return None;
        }

        match self.selected {
            Some(prev) if prev == id => {
                self.selected = None;
                None
            }
            Some(prev) => {
                self.selected = None;
                Some(self.swap(prev, id))
            }
            None => {
                self.selected = Some(id);
                None
            }
        }
    }

    /// Assist operation: put the first misplaced movable tile home.
    ///
    /// Scans in index order, swaps the tile straight into `correct_id`,
    /// and does not count a move. Disabled outside `Playing`, in modes
    /// without hints, and on an already-solved grid.
    pub fn use_hint(&mut self) -> bool {
        if !self.status.accepts_moves() || !self.mode.hints_allowed() {
            return false;
        }

        let Some(pos) = self
            .tiles
            .iter()
            .position(|t| !t.is_fixed && t.correct_id != t.current_index)
        else {
            return false;
        };

        let target = self.tiles[pos].correct_id;
        self.swap_positions(pos, target);

        if self.is_solved() {
            self.status = GameStatus::Animating;
        }
        true
    }

    /// Solved iff every tile sits at its `correct_id` index.
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, tile)| tile.correct_id == index)
    }

    /// Celebration acknowledged: `Animating -> Won`.
    pub fn acknowledge_win(&mut self) -> bool {
        if self.status != GameStatus::Animating {
            return false;
        }
        self.status = GameStatus::Won;
        true
    }

    /// Back to the menu; refused while a `GameOver` awaits acknowledgment.
    pub fn go_to_menu(&mut self) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }
        self.status = GameStatus::Menu;
        true
    }

    /// Resume a non-terminal saved run.
    pub fn resume(&mut self) -> bool {
        if self.tiles.is_empty() || self.status.is_terminal() {
            return false;
        }
        self.status = GameStatus::Playing;
        true
    }

    /// Read-only copy of the current state for collaborators.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tiles: self.tiles.clone(),
            status: self.status,
            mode: self.mode,
            dimension: self.dimension,
            level: self.level,
            moves: self.moves,
            min_moves: self.min_moves,
            selected: self.selected,
            epoch: self.epoch,
        }
    }

    /// Reconstruct a game from a persisted record.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        tiles: Vec<Tile>,
        status: GameStatus,
        mode: GameMode,
        dimension: usize,
        level: u32,
        moves: u32,
        min_moves: usize,
        corners: Corners,
    ) -> Self {
        Self {
            tiles,
            status,
            mode,
            dimension,
            level,
            moves,
            min_moves,
            selected: None,
            corners: Some(corners),
            epoch: 0,
        }
    }

    fn position_of(&self, id: usize) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.tiles.swap(a, b);
        self.tiles[a].current_index = a;
        self.tiles[b].current_index = b;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
