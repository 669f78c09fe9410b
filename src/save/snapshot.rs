//! Game snapshots for an external save/load layer.
//!
//! A `SaveGame` holds just enough to rebuild a session: the variant, each
//! player's name, token, tile and waiting flag, whose turn it is and the
//! dice stream position. Tiles are stored as text because save files are
//! edited and corrupted in the wild; a tile that does not parse or does not
//! exist on the board puts the player back on tile 1.

use serde::{Deserialize, Serialize};

use crate::board::{Board, TileId, VariantConfig};
use crate::core::{Dice, DieRoller, EngineConfig, GameError, GameRngState, Player, PlayerId};
use crate::engine::GameEngine;

/// One player as saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlayer {
    pub name: String,
    pub token: String,
    /// Tile id as text. Missing or bad values restore to tile 1.
    #[serde(default)]
    pub tile: Option<String>,
    #[serde(default)]
    pub waiting: bool,
}

/// A restorable game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub variant: VariantConfig,
    /// In turn order.
    pub players: Vec<SavedPlayer>,
    pub current: PlayerId,
    pub turn_number: u32,
    #[serde(default)]
    pub winner: Option<PlayerId>,
    /// Dice position; `None` when the dice could not be checkpointed.
    #[serde(default)]
    pub rng: Option<GameRngState>,
}

impl SaveGame {
    /// Snapshot a running game.
    pub fn capture<D: DieRoller>(engine: &GameEngine<D>) -> Result<Self, GameError> {
        let variant = engine.variant().ok_or(GameError::NoVariant)?.clone();
        let players = engine
            .players()
            .iter()
            .map(|(_, player)| SavedPlayer {
                name: player.name().to_string(),
                token: player.token().to_string(),
                tile: player.current_tile().ok().map(|t| t.raw().to_string()),
                waiting: player.will_wait_turn(),
            })
            .collect();

        Ok(Self {
            variant,
            players,
            current: engine.current_player(),
            turn_number: engine.turn_number(),
            winner: engine.winner(),
            rng: engine.dice().rng_state(),
        })
    }

    /// Rebuild the game, resuming the saved dice stream.
    ///
    /// Without a saved stream the dice start from the default seed.
    pub fn restore(&self) -> Result<GameEngine<Dice>, GameError> {
        let dice = match &self.rng {
            Some(state) => Dice::from_state(state),
            None => Dice::new(EngineConfig::default().seed),
        };
        self.restore_with_dice(dice)
    }

    /// Rebuild the game with a caller-supplied dice source.
    pub fn restore_with_dice<D: DieRoller>(&self, dice: D) -> Result<GameEngine<D>, GameError> {
        let board = self.variant.build_board()?;

        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(i, saved)| {
                let id = PlayerId::new(i as u8);
                let mut player = Player::new(id, saved.name.clone(), saved.token.clone())?;
                let tile = resolve_saved_tile(&board, &saved.name, saved.tile.as_deref());
                player.place_on_tile(tile);
                player.set_wait_turn(saved.waiting);
                Ok::<_, GameError>(player)
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        let mut engine = GameEngine::from_board(board, dice, players)?;
        engine.set_variant(self.variant.clone());
        engine.restore_progress(self.current, self.turn_number, self.winner)?;
        tracing::debug!(
            variant = %self.variant.name,
            players = self.players.len(),
            turn = self.turn_number,
            "game restored"
        );
        Ok(engine)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Resolve a saved tile id, falling back to tile 1.
///
/// Bad data is logged and recovered from, never propagated.
pub fn resolve_saved_tile(board: &Board, player: &str, saved: Option<&str>) -> TileId {
    let Some(text) = saved else {
        tracing::warn!(player, "saved tile missing, using start tile");
        return TileId::START;
    };
    match TileId::parse(text) {
        Some(id) if board.get_tile(id).is_some() => id,
        Some(id) => {
            tracing::warn!(player, tile = %id, "saved tile not on board, using start tile");
            TileId::START
        }
        None => {
            tracing::warn!(player, saved = text, "saved tile malformed, using start tile");
            TileId::START
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::engine::GameBuilder;

    fn saved(tile: Option<&str>) -> SaveGame {
        SaveGame {
            variant: VariantConfig::short(),
            players: vec![
                SavedPlayer {
                    name: "Ada".to_string(),
                    token: "red".to_string(),
                    tile: tile.map(str::to_string),
                    waiting: false,
                },
                SavedPlayer {
                    name: "Bo".to_string(),
                    token: "blue".to_string(),
                    tile: Some("14".to_string()),
                    waiting: true,
                },
            ],
            current: PlayerId::new(1),
            turn_number: 9,
            winner: None,
            rng: None,
        }
    }

    #[test]
    fn test_resolve_saved_tile() {
        let board = VariantConfig::plain(30).build_board().unwrap();
        assert_eq!(resolve_saved_tile(&board, "Ada", Some("12")), TileId::new(12));
        assert_eq!(resolve_saved_tile(&board, "Ada", Some("abc")), TileId::START);
        assert_eq!(resolve_saved_tile(&board, "Ada", Some("0")), TileId::START);
        assert_eq!(resolve_saved_tile(&board, "Ada", Some("31")), TileId::START);
        assert_eq!(resolve_saved_tile(&board, "Ada", None), TileId::START);
    }

    #[test]
    fn test_restore_positions_and_turn() {
        let game = saved(Some("11")).restore().unwrap();

        assert_eq!(game.position(PlayerId::new(0)).unwrap(), TileId::new(11));
        assert_eq!(game.position(PlayerId::new(1)).unwrap(), TileId::new(14));
        assert!(game.player(PlayerId::new(1)).unwrap().will_wait_turn());
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.turn_number(), 9);
    }

    #[test]
    fn test_restore_malformed_tile_falls_back() {
        let game = saved(Some("eleven")).restore().unwrap();
        assert_eq!(game.position(PlayerId::new(0)).unwrap(), TileId::START);

        let game = saved(Some("999")).restore().unwrap();
        assert_eq!(game.position(PlayerId::new(0)).unwrap(), TileId::START);

        let game = saved(None).restore().unwrap();
        assert_eq!(game.position(PlayerId::new(0)).unwrap(), TileId::START);
    }

    #[test]
    fn test_restore_rejects_unknown_current_player() {
        let mut save = saved(Some("3"));
        save.current = PlayerId::new(5);
        assert!(matches!(save.restore(), Err(GameError::UnknownPlayer { .. })));
    }

    #[test]
    fn test_restore_at_last_turn_number() {
        let mut save = saved(Some("3"));
        save.turn_number = u32::MAX;
        let mut game = save.restore().unwrap();

        let report = game.take_turn().unwrap();
        assert_eq!(report.turn, u32::MAX);
        assert_eq!(game.turn_number(), u32::MAX);
        game.take_turn().unwrap();
        assert_eq!(game.turn_number(), u32::MAX);
    }

    #[test]
    fn test_restore_oversized_variant_fails() {
        let mut save = saved(Some("3"));
        save.variant.length = u32::MAX;
        save.variant.winning_tile = TileId::new(u32::MAX);
        assert!(matches!(save.restore(), Err(GameError::InvalidLayout { .. })));
    }

    #[test]
    fn test_restore_finished_game() {
        let mut save = saved(Some("30"));
        save.winner = Some(PlayerId::new(0));
        let mut game = save.restore().unwrap();

        assert!(game.is_over());
        assert!(matches!(game.take_turn(), Err(GameError::GameOver { .. })));
    }

    #[test]
    fn test_capture_and_restore_round_trip() {
        let mut game = GameBuilder::new()
            .player("Ada", "red")
            .player("Bo", "blue")
            .variant(VariantConfig::classic())
            .seed(5)
            .build()
            .unwrap();
        for _ in 0..6 {
            game.take_turn().unwrap();
        }

        let save = SaveGame::capture(&game).unwrap();
        let mut restored = save.restore().unwrap();
        assert_eq!(restored.variant(), Some(&save.variant));
        assert_eq!(SaveGame::capture(&restored).unwrap(), save);

        for id in PlayerId::all(2) {
            assert_eq!(restored.position(id).unwrap(), game.position(id).unwrap());
        }
        assert_eq!(restored.current_player(), game.current_player());

        // Same dice stream from here on
        let next = game.take_turn().unwrap();
        let resumed = restored.take_turn().unwrap();
        assert_eq!(next.dice, resumed.dice);
        assert_eq!(next.events, resumed.events);
    }

    #[test]
    fn test_json_and_binary_encodings() {
        let save = saved(Some("7"));

        let json = save.to_json().unwrap();
        assert_eq!(SaveGame::from_json(&json).unwrap(), save);

        let bytes = save.to_bytes().unwrap();
        assert_eq!(SaveGame::from_bytes(&bytes).unwrap(), save);

        assert!(matches!(SaveGame::from_json("{"), Err(GameError::SaveJson(_))));
    }

    #[test]
    fn test_capture_requires_variant() {
        let board = Board::linear(10, TileId::new(10)).unwrap();
        let players = vec![Player::new(PlayerId::new(0), "Ada", "red").unwrap()];
        let game = GameEngine::from_board(board, ScriptedDice::default(), players).unwrap();

        assert!(matches!(SaveGame::capture(&game), Err(GameError::NoVariant)));
    }
}
