//! Turn engine: drives a game from the first roll to the winner.
//!
//! - `GameEngine`: owns board, dice and players; `take_turn` runs one turn
//! - `GameBuilder`: assembles a session from players and configuration
//! - `TurnReport`: what one turn did

pub mod builder;
pub mod game;

pub use builder::GameBuilder;
pub use game::{GameEngine, TurnOutcome, TurnPhase, TurnReport};
