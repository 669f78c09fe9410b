//! Core engine types: players, dice, RNG, configuration, errors.
//!
//! These are the leaf building blocks the board and turn engine sit on.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::EngineConfig;
pub use dice::{Dice, DieRoller, ScriptedDice, DIE_FACES};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState};
