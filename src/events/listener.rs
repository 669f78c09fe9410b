//! Observers of engine events.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// Receives every event the engine emits, in emission order.
///
/// Any `FnMut(&GameEvent)` closure is a listener.
pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Listener that records events into a buffer shared with the caller.
///
/// ```
/// use ladder_race::events::{EventListener, EventLog, GameEvent};
/// use ladder_race::core::PlayerId;
///
/// let log = EventLog::new();
/// let mut listener = log.listener();
/// listener.on_event(&GameEvent::GameWon { player: PlayerId::new(0) });
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener writing into this log.
    #[must_use]
    pub fn listener(&self) -> EventLog {
        self.clone()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_closure_listener() {
        let mut count = 0;
        {
            let mut listener = |_: &GameEvent| count += 1;
            listener.on_event(&GameEvent::CurrentPlayerChanged { player: PlayerId::new(0) });
            listener.on_event(&GameEvent::CurrentPlayerChanged { player: PlayerId::new(1) });
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_event_log_shares_buffer() {
        let log = EventLog::new();
        let mut listener = log.listener();
        listener.on_event(&GameEvent::PlayerSkippedTurn { player: PlayerId::new(1) });

        assert_eq!(log.len(), 1);
        assert_eq!(
            log.drain(),
            vec![GameEvent::PlayerSkippedTurn { player: PlayerId::new(1) }]
        );
        assert!(log.is_empty());
    }
}
