//! Persistence boundary: capture a running game and rebuild it later.
//!
//! File handling and UI belong to the caller; this module only converts
//! between a `GameEngine` and a serializable `SaveGame`.

pub mod snapshot;

pub use snapshot::{resolve_saved_tile, SaveGame, SavedPlayer};
