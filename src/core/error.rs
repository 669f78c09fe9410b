//! Engine error taxonomy.
//!
//! Three families of failure reach callers:
//!
//! - **Configuration**: the board data is corrupt (a reroute pointing at a
//!   tile that does not exist, a broken path link). Fatal for the turn.
//! - **Precondition**: the caller broke the API contract (unknown player,
//!   empty roster, lookup on an unbuilt board, turn after game over).
//! - **Persistence**: a snapshot or variant file could not be decoded.
//!
//! Expected branches (no action on a tile, a waiting player, overshooting
//! the last tile) are policy and never show up here.

use super::player::PlayerId;
use crate::board::TileId;

/// Errors produced by the board, actions and turn engine.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board has no tiles; build a variant before looking up tiles")]
    BoardNotBuilt,

    #[error("tile {id} does not exist on this board")]
    MissingTile { id: TileId },

    #[error("tile {id} is already registered")]
    DuplicateTile { id: TileId },

    #[error("reroute on tile {tile} points at missing tile {destination}")]
    MissingDestination { tile: TileId, destination: TileId },

    #[error("tile {tile} links to missing tile {next}")]
    BrokenLink { tile: TileId, next: TileId },

    #[error("invalid board layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("unknown board variant: {name}")]
    UnknownVariant { name: String },

    #[error("game needs at least one player")]
    NoPlayers,

    #[error("at most {max} players supported, got {count}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("player name must not be empty")]
    EmptyName,

    #[error("{player} is not part of this game")]
    UnknownPlayer { player: PlayerId },

    #[error("{player} has not been placed on the board")]
    NotPlaced { player: PlayerId },

    #[error("game is over; {winner} already won")]
    GameOver { winner: PlayerId },

    #[error("engine aborted after a fatal configuration error")]
    Aborted,

    #[error("board was not built from a variant; the game cannot be saved")]
    NoVariant,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse variant: {0}")]
    VariantFormat(#[from] toml::de::Error),

    #[error("failed to decode save: {0}")]
    SaveJson(#[from] serde_json::Error),

    #[error("failed to decode binary save: {0}")]
    SaveBinary(#[from] bincode::Error),
}

impl GameError {
    /// Whether this error means the board data itself is corrupt.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::MissingDestination { .. }
                | GameError::BrokenLink { .. }
                | GameError::InvalidLayout { .. }
        )
    }
}
