//! Board variants: named layouts supplied as data.
//!
//! A variant gives the path length, the winning tile and which tiles carry
//! which action. Two layouts ship built in; others load from TOML:
//!
//! ```toml
//! name = "tiny"
//! length = 12
//! winning_tile = 12
//!
//! [[actions]]
//! tile = 3
//! action = { reroute = { destination = 9, direction = "forward" } }
//!
//! [[actions]]
//! tile = 7
//! action = "skip_next_turn"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::layout::Board;
use super::tile::TileId;
use crate::actions::TileAction;
use crate::core::GameError;

/// One action attached to one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlacement {
    pub tile: TileId,
    pub action: TileAction,
}

impl ActionPlacement {
    #[must_use]
    pub fn new(tile: u32, action: TileAction) -> Self {
        Self {
            tile: TileId::new(tile),
            action,
        }
    }
}

/// A named board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Human-readable name.
    pub name: String,

    /// Number of tiles on the path.
    pub length: u32,

    /// Reaching this tile wins the game.
    pub winning_tile: TileId,

    /// Tile actions.
    #[serde(default)]
    pub actions: Vec<ActionPlacement>,
}

impl VariantConfig {
    /// The reference 90-tile board.
    #[must_use]
    pub fn classic() -> Self {
        let ladders = [(3, 21), (8, 30), (28, 46), (35, 53), (50, 69), (63, 81), (71, 88)];
        let snakes = [(25, 5), (44, 22), (56, 37), (66, 42), (76, 58), (86, 61)];
        let waits = [12, 39, 60, 74];

        let mut actions: Vec<_> = ladders
            .iter()
            .map(|&(from, to)| ActionPlacement::new(from, TileAction::ladder(TileId::new(to))))
            .chain(snakes.iter().map(|&(from, to)| {
                ActionPlacement::new(from, TileAction::snake(TileId::new(to)))
            }))
            .chain(
                waits
                    .iter()
                    .map(|&tile| ActionPlacement::new(tile, TileAction::SkipNextTurn)),
            )
            .collect();
        actions.push(ActionPlacement::new(80, TileAction::back_to_start()));
        actions.push(ActionPlacement::new(45, TileAction::NoOp));

        Self {
            name: "classic".to_string(),
            length: 90,
            winning_tile: TileId::new(90),
            actions,
        }
    }

    /// A 30-tile board for quick games.
    #[must_use]
    pub fn short() -> Self {
        Self {
            name: "short".to_string(),
            length: 30,
            winning_tile: TileId::new(30),
            actions: vec![
                ActionPlacement::new(4, TileAction::ladder(TileId::new(12))),
                ActionPlacement::new(9, TileAction::ladder(TileId::new(20))),
                ActionPlacement::new(17, TileAction::snake(TileId::new(7))),
                ActionPlacement::new(26, TileAction::snake(TileId::new(15))),
                ActionPlacement::new(22, TileAction::SkipNextTurn),
            ],
        }
    }

    /// A plain path with no actions.
    #[must_use]
    pub fn plain(length: u32) -> Self {
        Self {
            name: format!("plain-{}", length),
            length,
            winning_tile: TileId::new(length),
            actions: Vec::new(),
        }
    }

    /// Look up a built-in variant by name.
    pub fn by_name(name: &str) -> Result<Self, GameError> {
        match name {
            "classic" => Ok(Self::classic()),
            "short" => Ok(Self::short()),
            _ => Err(GameError::UnknownVariant {
                name: name.to_string(),
            }),
        }
    }

    /// Parse a variant from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a variant from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let variant = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            name = %variant.name,
            length = variant.length,
            actions = variant.actions.len(),
            "loaded board variant"
        );
        Ok(variant)
    }

    /// Build and validate the board this variant describes.
    pub fn build_board(&self) -> Result<Board, GameError> {
        if self.winning_tile.raw() == 0 || self.winning_tile.raw() > self.length {
            return Err(GameError::InvalidLayout {
                reason: format!(
                    "winning {} is outside the path 1..={}",
                    self.winning_tile, self.length
                ),
            });
        }
        Board::from_layout(
            self.length,
            self.winning_tile,
            self.actions.iter().map(|p| (p.tile, p.action.clone())),
        )
    }
}
