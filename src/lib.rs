//! # ladder-race
//!
//! A turn-based race board game engine: players roll two dice, walk a
//! linked path of tiles, and get rerouted (ladders, snakes, back-to-start)
//! or delayed (skip next turn) by actions attached to tiles. First to the
//! winning tile wins.
//!
//! ## Design Principles
//!
//! 1. **Core only**: no rendering, audio, menus or timers. A driver calls
//!    `GameEngine::take_turn`; a view subscribes to `GameEvent`s.
//!
//! 2. **Closed action set**: `TileAction` is an enum dispatched by `match`.
//!
//! 3. **Ids, not pointers**: the board owns every tile, the engine owns the
//!    board, dice and players. Everything else holds `TileId`/`PlayerId`.
//!
//! 4. **Deterministic**: same seed, same game. Saves resume the exact dice
//!    stream.
//!
//! ## Modules
//!
//! - `core`: players, dice, RNG, configuration, errors
//! - `board`: tiles, path traversal, variants
//! - `actions`: tile actions and their effects
//! - `events`: engine → observer notifications
//! - `engine`: the turn state machine
//! - `save`: snapshot and restore

pub mod actions;
pub mod board;
pub mod core;
pub mod engine;
pub mod events;
pub mod save;

// Re-export commonly used types
pub use crate::core::{
    Dice, DieRoller, EngineConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerMap,
    ScriptedDice,
};

pub use crate::board::{ActionPlacement, Board, Tile, TileId, VariantConfig};

pub use crate::actions::{ActionEffect, ActionKind, Direction, TileAction};

pub use crate::events::{EventListener, EventLog, GameEvent};

pub use crate::engine::{GameBuilder, GameEngine, TurnOutcome, TurnPhase, TurnReport};

pub use crate::save::{SaveGame, SavedPlayer};
