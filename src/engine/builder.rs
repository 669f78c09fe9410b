//! Builder for a new game session.

use crate::board::VariantConfig;
use crate::core::{Dice, DieRoller, EngineConfig, GameError, Player, PlayerId, MAX_PLAYERS};

use super::game::GameEngine;

/// Collects players and configuration, then creates a `GameEngine`.
///
/// ```
/// use ladder_race::engine::GameBuilder;
/// use ladder_race::board::VariantConfig;
///
/// let game = GameBuilder::new()
///     .player("Ada", "red")
///     .player("Bo", "blue")
///     .variant(VariantConfig::short())
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.player_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: EngineConfig,
    players: Vec<(String, String)>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
        }
    }

    /// Add a player. Turn order follows the order players are added.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, token: impl Into<String>) -> Self {
        self.players.push((name.into(), token.into()));
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: VariantConfig) -> Self {
        self.config.variant = variant;
        self
    }

    /// Build the game with seeded dice.
    pub fn build(self) -> Result<GameEngine<Dice>, GameError> {
        let dice = Dice::new(self.config.seed);
        self.build_with_dice(dice)
    }

    /// Build the game with a custom dice source.
    pub fn build_with_dice<D: DieRoller>(self, dice: D) -> Result<GameEngine<D>, GameError> {
        if self.players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: self.players.len(),
                max: MAX_PLAYERS,
            });
        }
        let players = self
            .players
            .into_iter()
            .enumerate()
            .map(|(i, (name, token))| Player::new(PlayerId::new(i as u8), name, token))
            .collect::<Result<Vec<_>, _>>()?;

        GameEngine::new(self.config.variant, dice, players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;
    use crate::core::ScriptedDice;

    #[test]
    fn test_builder_defaults_to_classic() {
        let game = GameBuilder::new().player("Ada", "red").build().unwrap();
        assert_eq!(game.board().len(), 90);
        assert_eq!(game.variant().unwrap().name, "classic");
    }

    #[test]
    fn test_builder_turn_order() {
        let game = GameBuilder::new()
            .player("Ada", "red")
            .player("Bo", "blue")
            .player("Cy", "green")
            .build()
            .unwrap();

        let names: Vec<_> = game.players().iter().map(|(_, p)| p.name().to_string()).collect();
        assert_eq!(names, vec!["Ada", "Bo", "Cy"]);
        assert_eq!(game.player(PlayerId::new(2)).unwrap().token(), "green");
    }

    #[test]
    fn test_builder_rejects_bad_rosters() {
        assert!(matches!(GameBuilder::new().build(), Err(GameError::NoPlayers)));
        assert!(matches!(
            GameBuilder::new().player("", "red").build(),
            Err(GameError::EmptyName)
        ));
    }

    #[test]
    fn test_builder_with_scripted_dice() {
        let mut game = GameBuilder::new()
            .player("Ada", "red")
            .variant(VariantConfig::plain(20))
            .build_with_dice(ScriptedDice::new([1, 2]))
            .unwrap();

        game.take_turn().unwrap();
        assert_eq!(game.position(PlayerId::new(0)).unwrap(), TileId::new(4));
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut game = GameBuilder::new()
                .player("Ada", "red")
                .player("Bo", "blue")
                .seed(seed)
                .build()
                .unwrap();
            game.play_to_completion(500).unwrap();
            game.history().clone()
        };

        assert_eq!(play(11), play(11));
    }
}
