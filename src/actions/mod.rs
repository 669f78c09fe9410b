//! Tile actions: what happens when a move ends on a special tile.
//!
//! The set is closed (`Reroute`, `SkipNextTurn`, `NoOp`) and dispatched
//! with `match`. Adding a variant makes every unhandled site a compile
//! error.

pub mod action;

pub use action::{ActionEffect, ActionKind, Direction, TileAction};
