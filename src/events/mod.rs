//! Engine → observer notification contract.
//!
//! The engine pushes a `GameEvent` to every subscribed `EventListener` as
//! each turn step happens, and also returns the turn's events in its
//! `TurnReport`. A view layer animates from these; tests assert on them.

pub mod event;
pub mod listener;

pub use event::GameEvent;
pub use listener::{EventListener, EventLog};
