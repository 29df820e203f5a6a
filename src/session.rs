//! Session layer - the collaborator-facing surface of the engine
//!
//! A [`Session`] owns one [`Game`] and a [`StateStore`], autosaving after
//! every mutating operation. Save failures are logged and swallowed so
//! persistence never blocks gameplay. Timer-driven transitions
//! (preview-to-shuffle, win celebration) take the epoch returned by
//! [`Session::start_level`]; a timer armed for an abandoned level then
//! fences itself out instead of mutating its successor.

use anyhow::Result;
use tracing::warn;

use huesort_core::{Game, GameSnapshot, SwapOutcome};
use huesort_store::{PersistedState, StateStore};
use huesort_types::{GameMode, GameStatus, DEFAULT_GRID_DIM};

pub struct Session {
    game: Game,
    store: Box<dyn StateStore>,
}

impl Session {
    /// Restore the last active mode's run, or start a fresh Casual 4x4.
    pub fn new(store: Box<dyn StateStore>) -> Result<Self> {
        let mut session = Self {
            game: Game::new(),
            store,
        };

        let last_mode = session.store.last_active_mode().unwrap_or_default();
        if !session.restore_mode(last_mode) {
            session.start_level(Some(GameMode::Casual), Some(DEFAULT_GRID_DIM), false)?;
        }
        Ok(session)
    }

    /// Start a new level, returning its epoch for timer fencing.
    ///
    /// Omitted arguments keep the current mode/dimension. A dimension
    /// change is refused while a mode that forbids mid-run resizing has
    /// an unfinished run.
    pub fn start_level(
        &mut self,
        mode: Option<GameMode>,
        dimension: Option<usize>,
        preserve_colors: bool,
    ) -> Result<u32> {
        let mode = mode.unwrap_or_else(|| self.game.mode());
        let mut dimension = dimension.unwrap_or_else(|| self.game.dimension());

        let mid_run = !self.game.tiles().is_empty()
            && self.game.mode() == mode
            && !self.game.status().is_terminal()
            && self.game.status() != GameStatus::Menu;
        if !mode.resize_allowed() && mid_run {
            dimension = self.game.dimension();
        }

        let level = self.store.level_count(mode, dimension) + 1;
        self.game.start_level(mode, dimension, level, preserve_colors)?;
        self.persist();
        Ok(self.game.epoch())
    }

    /// Preview timer fired: shuffle and enter `Playing`.
    pub fn shuffle_now(&mut self, epoch: u32) -> bool {
        if self.game.epoch() != epoch {
            return false;
        }
        if !self.game.shuffle_now() {
            return false;
        }
        self.persist();
        true
    }

    /// Tap intent on a tile; persists when a swap resulted.
    pub fn select_tile(&mut self, id: usize) -> Option<SwapOutcome> {
        let outcome = self.game.select_tile(id);
        if matches!(
            outcome,
            Some(SwapOutcome::Moved | SwapOutcome::Solved | SwapOutcome::Failed)
        ) {
            self.persist();
        }
        outcome
    }

    /// Direct swap of two tiles by id.
    pub fn swap(&mut self, id_a: usize, id_b: usize) -> SwapOutcome {
        let outcome = self.game.swap(id_a, id_b);
        if outcome != SwapOutcome::Ignored {
            self.persist();
        }
        outcome
    }

    pub fn use_hint(&mut self) -> bool {
        if !self.game.use_hint() {
            return false;
        }
        self.persist();
        true
    }

    /// Celebration timer fired: `Animating -> Won`, counting the level
    /// as completed exactly once.
    pub fn acknowledge_win(&mut self, epoch: u32) -> bool {
        if self.game.epoch() != epoch {
            return false;
        }
        if !self.game.acknowledge_win() {
            return false;
        }

        let (mode, dimension) = (self.game.mode(), self.game.dimension());
        if let Err(err) = self.store.increment_level_count(mode, dimension) {
            warn!(mode = mode.as_str(), dimension, %err, "level counter not persisted");
        }
        self.persist();
        true
    }

    pub fn go_to_menu(&mut self) -> bool {
        if !self.game.go_to_menu() {
            return false;
        }
        self.persist();
        true
    }

    /// Switch to `mode`, resuming its own saved run when one exists.
    ///
    /// The outgoing mode's record is saved first, so flipping between
    /// modes round-trips each run exactly.
    pub fn play_or_resume(&mut self, mode: GameMode, dimension: usize) -> Result<()> {
        if !self.game.tiles().is_empty() {
            self.persist();
        }

        if self.restore_mode(mode) {
            return Ok(());
        }

        self.start_level(Some(mode), Some(dimension), false)?;
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Load `mode`'s record into the game. False when absent or corrupt,
    /// in which case the caller starts fresh.
    fn restore_mode(&mut self, mode: GameMode) -> bool {
        let Some(record) = self.store.load_state(mode) else {
            return false;
        };

        let level = self.store.level_count(mode, record.grid_dimension) + 1;
        self.game = record.into_game(level);
        if self.game.status() == GameStatus::Menu {
            self.game.resume();
        }
        if let Err(err) = self.store.set_last_active_mode(mode) {
            warn!(mode = mode.as_str(), %err, "last active mode not persisted");
        }
        true
    }

    /// Synchronous save of the current state; failures are logged, never
    /// surfaced to gameplay.
    fn persist(&mut self) {
        let Some(record) = PersistedState::capture(&self.game) else {
            return;
        };
        let mode = self.game.mode();
        if let Err(err) = self.store.save_state(mode, &record) {
            warn!(mode = mode.as_str(), %err, "state not persisted");
        }
        if let Err(err) = self.store.set_last_active_mode(mode) {
            warn!(mode = mode.as_str(), %err, "last active mode not persisted");
        }
    }
}
