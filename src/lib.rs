//! huesort (workspace facade crate).
//!
//! This package keeps a stable `huesort::{core,store,types}` public API
//! while the implementation lives in dedicated crates under `crates/`,
//! and adds the [`Session`] layer that wires the game engine to a state
//! store.

pub use huesort_core as core;
pub use huesort_store as store;
pub use huesort_types as types;

pub mod session;

pub use session::Session;
