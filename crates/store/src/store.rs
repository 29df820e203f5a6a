//! State stores - where per-mode records and level counters live
//!
//! [`FileStore`] keeps one JSON file per mode plus a small meta file for
//! the level-completion counters and the last active mode. It never
//! propagates read problems: a corrupt record reads as absent, which the
//! session layer answers with a fresh level.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::PersistedState;
use huesort_types::GameMode;

/// Persistence contract, keyed by mode.
///
/// Level counters are keyed by (mode, dimension) and increment exactly
/// once per won level; they seed the next level number and its RNG
/// streams.
pub trait StateStore {
    fn save_state(&mut self, mode: GameMode, state: &PersistedState) -> Result<()>;

    /// Load a mode's record. Corruption reads as `None`.
    fn load_state(&self, mode: GameMode) -> Option<PersistedState>;

    fn level_count(&self, mode: GameMode, dimension: usize) -> u32;

    fn increment_level_count(&mut self, mode: GameMode, dimension: usize) -> Result<()>;

    fn last_active_mode(&self) -> Option<GameMode>;

    fn set_last_active_mode(&mut self, mode: GameMode) -> Result<()>;
}

fn counter_key(mode: GameMode, dimension: usize) -> String {
    format!("{}_{}", mode.as_str(), dimension)
}

/// Counters and the last active mode, persisted alongside the records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Meta {
    last_active_mode: Option<GameMode>,
    level_counts: HashMap<String, u32>,
}

/// JSON-file-backed store: `state_<mode>.json` per mode plus `meta.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    meta: Meta,
}

impl FileStore {
    /// Open (or initialize) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating store directory {}", dir.display()))?;

        let meta_path = dir.join("meta.json");
        let meta = match fs::read_to_string(&meta_path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %meta_path.display(), %err, "meta file corrupt, resetting");
                Meta::default()
            }),
            Err(_) => Meta::default(),
        };

        Ok(Self { dir, meta })
    }

    fn state_path(&self, mode: GameMode) -> PathBuf {
        self.dir.join(format!("state_{}.json", mode.as_str()))
    }

    fn write_meta(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.meta)?;
        fs::write(self.dir.join("meta.json"), raw).context("writing meta.json")?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn save_state(&mut self, mode: GameMode, state: &PersistedState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        let path = self.state_path(mode);
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn load_state(&self, mode: GameMode) -> Option<PersistedState> {
        let path = self.state_path(mode);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                // Corrupt record: treated as absent, caller starts fresh
                warn!(path = %path.display(), %err, "discarding corrupt state record");
                None
            }
        }
    }

    fn level_count(&self, mode: GameMode, dimension: usize) -> u32 {
        self.meta
            .level_counts
            .get(&counter_key(mode, dimension))
            .copied()
            .unwrap_or(0)
    }

    fn increment_level_count(&mut self, mode: GameMode, dimension: usize) -> Result<()> {
        *self
            .meta
            .level_counts
            .entry(counter_key(mode, dimension))
            .or_insert(0) += 1;
        self.write_meta()
    }

    fn last_active_mode(&self) -> Option<GameMode> {
        self.meta.last_active_mode
    }

    fn set_last_active_mode(&mut self, mode: GameMode) -> Result<()> {
        self.meta.last_active_mode = Some(mode);
        self.write_meta()
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    states: HashMap<GameMode, PersistedState>,
    level_counts: HashMap<String, u32>,
    last_mode: Option<GameMode>,
    /// When set, every write fails; exercises the swallow-and-log path.
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn save_state(&mut self, mode: GameMode, state: &PersistedState) -> Result<()> {
        anyhow::ensure!(!self.fail_writes, "simulated write failure");
        self.states.insert(mode, state.clone());
        Ok(())
    }

    fn load_state(&self, mode: GameMode) -> Option<PersistedState> {
        self.states.get(&mode).cloned()
    }

    fn level_count(&self, mode: GameMode, dimension: usize) -> u32 {
        self.level_counts
            .get(&counter_key(mode, dimension))
            .copied()
            .unwrap_or(0)
    }

    fn increment_level_count(&mut self, mode: GameMode, dimension: usize) -> Result<()> {
        anyhow::ensure!(!self.fail_writes, "simulated write failure");
        *self
            .level_counts
            .entry(counter_key(mode, dimension))
            .or_insert(0) += 1;
        Ok(())
    }

    fn last_active_mode(&self) -> Option<GameMode> {
        self.last_mode
    }

    fn set_last_active_mode(&mut self, mode: GameMode) -> Result<()> {
        anyhow::ensure!(!self.fail_writes, "simulated write failure");
        self.last_mode = Some(mode);
        Ok(())
    }
}
