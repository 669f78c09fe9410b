//! The board: every tile of one game, keyed by id.
//!
//! Tiles form a single forward chain from tile 1. `advance` walks that
//! chain and stops at the last tile instead of overshooting or wrapping.

use rustc_hash::FxHashMap;

use super::tile::{Tile, TileId};
use crate::actions::TileAction;
use crate::core::GameError;

/// Longest path `from_layout` will build. Lengths come from variant files
/// and saves, so they are bounded before any tile is allocated.
pub const MAX_PATH_LENGTH: u32 = 10_000;

/// Owns every tile on the path.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: FxHashMap<TileId, Tile>,
    winning_tile: TileId,
}

impl Board {
    /// Create an empty board. Tiles are registered with `add_tile`.
    #[must_use]
    pub fn new(winning_tile: TileId) -> Self {
        Self {
            tiles: FxHashMap::default(),
            winning_tile,
        }
    }

    /// Build a plain path `1 -> 2 -> ... -> length` with no actions.
    pub fn linear(length: u32, winning_tile: TileId) -> Result<Self, GameError> {
        Self::from_layout(length, winning_tile, std::iter::empty())
    }

    /// Build a path of `length` tiles with actions attached at the given
    /// tiles, then validate it.
    pub fn from_layout(
        length: u32,
        winning_tile: TileId,
        actions: impl IntoIterator<Item = (TileId, TileAction)>,
    ) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidLayout {
                reason: "path needs at least one tile".to_string(),
            });
        }
        if length > MAX_PATH_LENGTH {
            return Err(GameError::InvalidLayout {
                reason: format!(
                    "path of {} tiles exceeds the limit of {}",
                    length, MAX_PATH_LENGTH
                ),
            });
        }

        let mut placed: FxHashMap<TileId, TileAction> = FxHashMap::default();
        for (tile, action) in actions {
            if tile.raw() == 0 || tile.raw() > length {
                return Err(GameError::InvalidLayout {
                    reason: format!("action on {} is outside the path 1..={}", tile, length),
                });
            }
            if placed.insert(tile, action).is_some() {
                return Err(GameError::InvalidLayout {
                    reason: format!("{} carries more than one action", tile),
                });
            }
        }

        let mut board = Self::new(winning_tile);
        for raw in 1..=length {
            let id = TileId::new(raw);
            let mut tile = Tile::new(id);
            if raw < length {
                tile = tile.with_next(TileId::new(raw + 1));
            }
            if let Some(action) = placed.remove(&id) {
                tile = tile.with_action(action);
            }
            board.add_tile(tile)?;
        }

        board.validate()?;
        Ok(board)
    }

    /// Register a tile under its id. Duplicate ids are rejected.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), GameError> {
        let id = tile.id();
        if self.tiles.contains_key(&id) {
            return Err(GameError::DuplicateTile { id });
        }
        self.tiles.insert(id, tile);
        Ok(())
    }

    /// Look up a tile. A missing id is `None`, not an error.
    #[must_use]
    pub fn get_tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Look up a tile that must exist.
    ///
    /// Fails with `BoardNotBuilt` if no tiles were ever registered.
    pub fn tile(&self, id: TileId) -> Result<&Tile, GameError> {
        if self.tiles.is_empty() {
            return Err(GameError::BoardNotBuilt);
        }
        self.tiles.get(&id).ok_or(GameError::MissingTile { id })
    }

    /// The tile `steps` links after `from`, clamped to the end of the path.
    pub fn advance(&self, from: TileId, steps: u32) -> Result<TileId, GameError> {
        let mut current = self.tile(from)?;
        for _ in 0..steps {
            let Some(next) = current.next() else {
                break;
            };
            current = self.tiles.get(&next).ok_or(GameError::BrokenLink {
                tile: current.id(),
                next,
            })?;
        }
        Ok(current.id())
    }

    /// Check the board is playable: start and winning tiles exist, every
    /// link and every reroute destination resolves.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.tiles.is_empty() {
            return Err(GameError::BoardNotBuilt);
        }
        if !self.tiles.contains_key(&TileId::START) {
            return Err(GameError::InvalidLayout {
                reason: "start tile 1 is missing".to_string(),
            });
        }
        if !self.tiles.contains_key(&self.winning_tile) {
            return Err(GameError::InvalidLayout {
                reason: format!("winning {} is missing", self.winning_tile),
            });
        }

        for tile in self.tiles.values() {
            if let Some(next) = tile.next() {
                if !self.tiles.contains_key(&next) {
                    return Err(GameError::BrokenLink { tile: tile.id(), next });
                }
            }
            if let Some(TileAction::Reroute { destination, .. }) = tile.action() {
                if !self.tiles.contains_key(destination) {
                    return Err(GameError::MissingDestination {
                        tile: tile.id(),
                        destination: *destination,
                    });
                }
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn winning_tile(&self) -> TileId {
        self.winning_tile
    }

    #[must_use]
    pub fn is_winning_tile(&self, id: TileId) -> bool {
        id == self.winning_tile
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over tiles that carry an action, in id order.
    pub fn action_tiles(&self) -> impl Iterator<Item = &Tile> {
        let mut tiles: Vec<_> = self.tiles.values().filter(|t| t.action().is_some()).collect();
        tiles.sort_by_key(|t| t.id());
        tiles.into_iter()
    }
}
