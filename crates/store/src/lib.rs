//! Persistence layer - one saved record per game mode
//!
//! Each of the three modes resumes independently: saving Casual never
//! touches the Precision or Pure records. The JSON schema is an external
//! contract (camelCase keys), so the serde types live here rather than
//! in the core crate, which stays serialization-free.
//!
//! Failure philosophy: a corrupt or missing record means a fresh level,
//! never an error shown to the player; a failed write is logged and
//! swallowed so persistence can never block gameplay.

pub mod record;
pub mod store;

pub use record::{PersistedColor, PersistedCorners, PersistedState, PersistedTile};
pub use store::{FileStore, MemoryStore, StateStore};
