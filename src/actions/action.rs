//! Tile actions and how they resolve.

use serde::{Deserialize, Serialize};

use crate::board::{Board, TileId};
use crate::core::{GameError, Player};

/// Which way a reroute sends the player. A display label only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Ladder: jump ahead.
    Forward,
    /// Snake: slide back.
    Backward,
    /// Straight back to tile 1.
    ToStart,
}

/// Effect executed when a player's move ends on a tile.
///
/// Actions carry no state; everything they change lives on the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileAction {
    /// Relocate the player to `destination`.
    Reroute {
        destination: TileId,
        direction: Direction,
    },
    /// The player sits out their next turn.
    SkipNextTurn,
    /// Informational tile; nothing happens.
    NoOp,
}

/// Discriminant of a `TileAction`, reported in events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Reroute,
    SkipNextTurn,
    NoOp,
}

impl ActionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Reroute => "reroute",
            ActionKind::SkipNextTurn => "skip_next_turn",
            ActionKind::NoOp => "no_op",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What performing an action did to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    /// Player was relocated. `from == to` when a reroute points at its own tile.
    Moved { from: TileId, to: TileId },
    /// Player's waiting flag is now set.
    Waiting,
    /// Nothing changed.
    Unchanged,
}

impl TileAction {
    /// A ladder up to `destination`.
    #[must_use]
    pub fn ladder(destination: TileId) -> Self {
        TileAction::Reroute {
            destination,
            direction: Direction::Forward,
        }
    }

    /// A snake down to `destination`.
    #[must_use]
    pub fn snake(destination: TileId) -> Self {
        TileAction::Reroute {
            destination,
            direction: Direction::Backward,
        }
    }

    /// Send the player back to tile 1.
    #[must_use]
    pub fn back_to_start() -> Self {
        TileAction::Reroute {
            destination: TileId::START,
            direction: Direction::ToStart,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            TileAction::Reroute { .. } => ActionKind::Reroute,
            TileAction::SkipNextTurn => ActionKind::SkipNextTurn,
            TileAction::NoOp => ActionKind::NoOp,
        }
    }

    /// Apply this action to a player standing on the tile that carries it.
    ///
    /// A reroute resolves its destination before touching the player, so
    /// on `MissingDestination` the player is left where the dice put them.
    pub fn perform(&self, player: &mut Player, board: &Board) -> Result<ActionEffect, GameError> {
        match self {
            TileAction::Reroute { destination, direction } => {
                let from = player.current_tile()?;
                let to = board
                    .get_tile(*destination)
                    .ok_or(GameError::MissingDestination {
                        tile: from,
                        destination: *destination,
                    })?
                    .id();
                player.place_on_tile(to);
                tracing::debug!(
                    player = %player.id(),
                    %from,
                    %to,
                    ?direction,
                    "reroute"
                );
                Ok(ActionEffect::Moved { from, to })
            }
            TileAction::SkipNextTurn => {
                player.set_wait_turn(true);
                tracing::debug!(player = %player.id(), "next turn will be skipped");
                Ok(ActionEffect::Waiting)
            }
            TileAction::NoOp => Ok(ActionEffect::Unchanged),
        }
    }
}
