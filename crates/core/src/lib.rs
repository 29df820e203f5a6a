//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the entire gradient-puzzle rule set: color math,
//! palette generation, grid construction, shuffling, and the game state
//! machine. It has **zero dependencies** on UI, persistence, or I/O,
//! making it:
//!
//! - **Deterministic**: the same (mode, level) pair produces an identical
//!   palette and shuffle, bit for bit
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run headless, in a GUI, or in a terminal
//!
//! # Module Structure
//!
//! - [`color`]: RGB color model with HSB construction, similarity, and
//!   bilinear gradient interpolation
//! - [`rng`]: seeded LCG, Fisher-Yates shuffling, and the per-level seed
//!   derivation contract
//! - [`palette`]: harmony profiles and corner-color generation
//! - [`grid`]: N x N tile grid construction with fixed corner anchors
//! - [`shuffle`]: movable-tile permutation and minimum-swap computation
//! - [`game`]: the authoritative state machine (swap, hint, win, budget)
//! - [`snapshot`]: read-only state copies for collaborators
//!
//! # Game Rules
//!
//! - Four corner tiles are anchors: never shuffled, never swappable
//! - A level is solved when every tile sits at its `correct_id` index
//! - The minimum-swap count is `N^2 - cycles` of the current permutation,
//!   computed once per shuffle and held static afterwards
//! - Precision mode fails a level when the move budget runs out, but a
//!   budget-exhausting move that solves the grid still wins
//!
//! # Example
//!
//! ```
//! use huesort_core::Game;
//! use huesort_types::GameMode;
//!
//! let mut game = Game::new();
//! game.start_level(GameMode::Casual, 4, 1, false).unwrap();
//! game.shuffle_now();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.tiles.len(), 16);
//! ```

pub mod color;
pub mod game;
pub mod grid;
pub mod palette;
pub mod rng;
pub mod shuffle;
pub mod snapshot;

pub use huesort_types as types;

// Re-export commonly used types for convenience
pub use color::{Corners, Rgb};
pub use game::{Game, SwapOutcome};
pub use grid::{build_grid, Tile};
pub use palette::{generate_corners, HarmonyProfile};
pub use rng::{palette_seed, shuffle_seed, SimpleRng};
pub use shuffle::{min_moves, shuffle_tiles};
pub use snapshot::GameSnapshot;
