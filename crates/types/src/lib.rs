//! Shared types and tuning constants
//!
//! Pure data types used across the engine and the persistence layer.
//! Serde derives live here because persisted records carry these enums;
//! everything else is dependency-free.

use serde::{Deserialize, Serialize};

/// Grid dimension bounds (inclusive). A level grid is always square.
pub const MIN_GRID_DIM: usize = 4;
pub const MAX_GRID_DIM: usize = 12;
pub const DEFAULT_GRID_DIM: usize = 4;

/// Caller-owned timer durations (in milliseconds).
///
/// The engine never sleeps; these are exported so the UI layer schedules
/// the preview-to-shuffle and win-celebration delays consistently.
pub const PREVIEW_DELAY_MS: u32 = 2500;
pub const WIN_DELAY_MS: u32 = 2000;

/// Move budget for a Precision level.
pub const PRECISION_MOVE_BUDGET: u32 = 200;

/// Per-channel threshold for two colors to count as visually similar.
pub const COLOR_SIMILARITY_THRESHOLD: f64 = 0.05;

/// Seed derivation: `palette_seed = (ordinal + 1) * STRIDE + level`,
/// `shuffle_seed = palette_seed + SHUFFLE_SEED_OFFSET`. Both streams are
/// deterministic per (mode, level) yet independent of each other.
pub const PALETTE_SEED_STRIDE: u32 = 10_000;
pub const SHUFFLE_SEED_OFFSET: u32 = 999;

/// Game modes with their rule-sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Unrestricted moves, hints allowed, grid size adjustable mid-run.
    Casual,
    /// Fixed move budget per level, no hints, no mid-run resize.
    Precision,
    /// No hints, no limit, and solved tiles never lock.
    Pure,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Casual, GameMode::Precision, GameMode::Pure];

    /// Ordinal used in seed derivation. Stable across releases.
    pub fn ordinal(&self) -> u32 {
        match self {
            GameMode::Casual => 0,
            GameMode::Precision => 1,
            GameMode::Pure => 2,
        }
    }

    /// Maximum moves per level, if the mode imposes one.
    pub fn move_limit(&self) -> Option<u32> {
        match self {
            GameMode::Precision => Some(PRECISION_MOVE_BUDGET),
            GameMode::Casual | GameMode::Pure => None,
        }
    }

    pub fn hints_allowed(&self) -> bool {
        matches!(self, GameMode::Casual)
    }

    /// Whether the grid dimension may change while a run is in progress.
    pub fn resize_allowed(&self) -> bool {
        !matches!(self, GameMode::Precision)
    }

    /// Whether a movable tile sitting in its correct slot refuses
    /// further selection.
    pub fn locks_solved(&self) -> bool {
        !matches!(self, GameMode::Pure)
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "casual" => Some(GameMode::Casual),
            "precision" => Some(GameMode::Precision),
            "pure" => Some(GameMode::Pure),
            _ => None,
        }
    }

    /// Convert to lowercase string (used for persistence keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Casual => "casual",
            GameMode::Precision => "precision",
            GameMode::Pure => "pure",
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Casual
    }
}

/// Lifecycle states of a level
///
/// `Menu -> Preview -> Playing -> Animating -> Won`, with `GameOver`
/// reachable from `Playing` only in Precision mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Menu,
    Preview,
    Playing,
    Animating,
    Won,
    GameOver,
}

impl GameStatus {
    /// True while swap/hint intents are accepted.
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// True once the level reached a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::GameOver)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "menu" => Some(GameStatus::Menu),
            "preview" => Some(GameStatus::Preview),
            "playing" => Some(GameStatus::Playing),
            "animating" => Some(GameStatus::Animating),
            "won" => Some(GameStatus::Won),
            "gameover" => Some(GameStatus::GameOver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "menu",
            GameStatus::Preview => "preview",
            GameStatus::Playing => "playing",
            GameStatus::Animating => "animating",
            GameStatus::Won => "won",
            GameStatus::GameOver => "gameover",
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Menu
    }
}
