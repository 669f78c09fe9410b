//! Board graph: tiles, the path that links them, and named variants.
//!
//! The board exclusively owns its tiles. Everything else (players, actions,
//! events) refers to tiles by `TileId`.

pub mod layout;
pub mod tile;
pub mod variant;

pub use layout::{Board, MAX_PATH_LENGTH};
pub use tile::{Tile, TileId};
pub use variant::{ActionPlacement, VariantConfig};
