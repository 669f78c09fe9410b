//! Notifications the engine emits while running a turn.
//!
//! Within one turn events arrive in this order:
//!
//! 1. `PlayerSkippedTurn` (waiting player; steps 2–4 are then skipped)
//! 2. `PlayerMoved` with the dice total
//! 3. `ActionTriggered`, then `PlayerMoved` with `dice_value == 0` if the
//!    action relocated the player
//! 4. `GameWon`, which ends the game, or `CurrentPlayerChanged` followed
//!    by `TurnCompleted`

use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;
use crate::board::TileId;
use crate::core::PlayerId;

/// One observable step of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A player changed tiles. `dice_value` is 0 for action-driven moves.
    PlayerMoved {
        player: PlayerId,
        from: TileId,
        to: TileId,
        dice_value: u8,
    },
    /// A waiting player used up their turn without rolling.
    PlayerSkippedTurn { player: PlayerId },
    /// The tile the player landed on carries an action.
    ActionTriggered { player: PlayerId, kind: ActionKind },
    /// It is now this player's turn.
    CurrentPlayerChanged { player: PlayerId },
    /// The player reached the winning tile. No more turns follow.
    GameWon { player: PlayerId },
    /// The turn is over and the driver may call `take_turn` again.
    TurnCompleted { player: PlayerId, turn: u32 },
}

impl GameEvent {
    /// The player this event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::PlayerMoved { player, .. }
            | GameEvent::PlayerSkippedTurn { player }
            | GameEvent::ActionTriggered { player, .. }
            | GameEvent::CurrentPlayerChanged { player }
            | GameEvent::GameWon { player }
            | GameEvent::TurnCompleted { player, .. } => *player,
        }
    }

    /// True for moves caused by a tile action rather than the dice.
    #[must_use]
    pub fn is_action_move(&self) -> bool {
        matches!(self, GameEvent::PlayerMoved { dice_value: 0, .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerMoved { player, from, to, dice_value: 0 } => {
                write!(f, "{} sent from {} to {}", player, from, to)
            }
            GameEvent::PlayerMoved { player, from, to, dice_value } => {
                write!(f, "{} rolled {} and moved from {} to {}", player, dice_value, from, to)
            }
            GameEvent::PlayerSkippedTurn { player } => write!(f, "{} skips this turn", player),
            GameEvent::ActionTriggered { player, kind } => {
                write!(f, "{} triggered {}", player, kind)
            }
            GameEvent::CurrentPlayerChanged { player } => write!(f, "{} to play", player),
            GameEvent::GameWon { player } => write!(f, "{} wins", player),
            GameEvent::TurnCompleted { player, turn } => {
                write!(f, "turn {} by {} complete", turn, player)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_accessor() {
        let p = PlayerId::new(1);
        let events = [
            GameEvent::PlayerSkippedTurn { player: p },
            GameEvent::GameWon { player: p },
            GameEvent::ActionTriggered {
                player: p,
                kind: ActionKind::Reroute,
            },
        ];
        assert!(events.iter().all(|e| e.player() == p));
    }

    #[test]
    fn test_action_move_detection() {
        let dice_move = GameEvent::PlayerMoved {
            player: PlayerId::new(0),
            from: TileId::new(1),
            to: TileId::new(8),
            dice_value: 7,
        };
        let action_move = GameEvent::PlayerMoved {
            player: PlayerId::new(0),
            from: TileId::new(8),
            to: TileId::new(30),
            dice_value: 0,
        };
        assert!(!dice_move.is_action_move());
        assert!(action_move.is_action_move());
        assert_eq!(action_move.to_string(), "Player 0 sent from Tile(8) to Tile(30)");
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::ActionTriggered {
            player: PlayerId::new(1),
            kind: ActionKind::SkipNextTurn,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"action_triggered","player":1,"kind":"skip_next_turn"}"#
        );
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
