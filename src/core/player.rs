//! Player identification, per-player storage and the player token.
//!
//! ## PlayerId
//!
//! Turn-order index of a player (0-based). Doubles as the player's
//! non-owning reference back into the engine's roster.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A token on the board: identity, the tile it stands on (by id, the board
//! owns the tile) and the "skip next turn" flag.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;
use crate::board::{Board, TileId};

/// Maximum players in one game.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier; also the player's position in turn order.
///
/// The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in turn order, wrapping at `player_count`.
    ///
    /// ```
    /// use ladder_race::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use ladder_race::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// laps[PlayerId::new(1)] += 1;
/// assert_eq!(laps[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Take ownership of values already in turn order.
    pub fn from_vec(data: Vec<T>) -> Result<Self, GameError> {
        if data.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if data.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: data.len(),
                max: MAX_PLAYERS,
            });
        }
        Ok(Self { data })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the player exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A player token on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Visual marker label; only used for identity.
    token: String,
    /// `None` until the game places the player.
    tile: Option<TileId>,
    waiting: bool,
}

impl Player {
    /// Create an unplaced player.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            token: token.into(),
            tile: None,
            waiting: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The tile this player stands on.
    pub fn current_tile(&self) -> Result<TileId, GameError> {
        self.tile.ok_or(GameError::NotPlaced { player: self.id })
    }

    /// Whether the player has been placed on the board yet.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.tile.is_some()
    }

    /// Unconditionally put the player on `tile`.
    pub fn place_on_tile(&mut self, tile: TileId) {
        self.tile = Some(tile);
    }

    /// Advance `steps` tiles along the path, stopping at the last tile.
    ///
    /// Returns the tile the player ends on.
    pub fn move_by(&mut self, steps: u32, board: &Board) -> Result<TileId, GameError> {
        let from = self.current_tile()?;
        let to = board.advance(from, steps)?;
        self.tile = Some(to);
        Ok(to)
    }

    pub fn set_wait_turn(&mut self, waiting: bool) {
        self.waiting = waiting;
    }

    #[must_use]
    pub fn will_wait_turn(&self) -> bool {
        self.waiting
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}
