//! The turn-sequencing state machine.
//!
//! `GameEngine::take_turn` runs one complete turn for the current player:
//!
//! 1. A waiting player clears their flag and passes without rolling.
//! 2. Otherwise roll two dice and walk that many tiles (clamped at the end).
//! 3. Resolve the landing tile's action, if any.
//! 4. Landing on the winning tile ends the game.
//! 5. Otherwise the next player in turn order is up.
//!
//! Each step is reported as a `GameEvent`. The engine never waits or
//! schedules anything; the driver calls `take_turn` again whenever it is
//! ready (typically after seeing `TurnCompleted`).

use im::Vector;
use smallvec::SmallVec;

use crate::actions::ActionEffect;
use crate::board::{Board, TileId, VariantConfig};
use crate::core::{Dice, DieRoller, GameError, Player, PlayerId, PlayerMap};
use crate::events::{EventListener, GameEvent};

/// Where the state machine is.
///
/// Between `take_turn` calls the engine is always in `AwaitingRoll`,
/// `GameOver` or `Aborted`; the other phases are passed through mid-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for `player` to take their turn.
    AwaitingRoll { player: PlayerId },
    /// `player` landed on a tile whose action is being resolved.
    ActionResolution { player: PlayerId },
    /// `player`'s turn is done; turn order is about to advance.
    TurnComplete { player: PlayerId },
    /// `winner` reached the winning tile. No further turns.
    GameOver { winner: PlayerId },
    /// A fatal configuration error stopped the game.
    Aborted,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player was waiting and did not roll.
    Skipped,
    /// The player moved; play passes on.
    Continued,
    /// The player won.
    Won,
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Who took the turn.
    pub player: PlayerId,
    /// Turn number (starts at 1).
    pub turn: u32,
    /// The two faces rolled, `None` for a skipped turn.
    pub dice: Option<(u8, u8)>,
    /// Tile the player ended the turn on.
    pub final_tile: TileId,
    pub outcome: TurnOutcome,
    /// Events in emission order.
    pub events: SmallVec<[GameEvent; 6]>,
}

impl TurnReport {
    /// Sum of the two dice, 0 for a skipped turn.
    #[must_use]
    pub fn distance(&self) -> u8 {
        self.dice.map_or(0, |(a, b)| a + b)
    }
}

/// A game session: the board, the dice, the players and whose turn it is.
pub struct GameEngine<D: DieRoller = Dice> {
    board: Board,
    /// The variant the board was built from; needed to snapshot the game.
    variant: Option<VariantConfig>,
    dice: D,
    players: PlayerMap<Player>,
    current: PlayerId,
    phase: TurnPhase,
    winner: Option<PlayerId>,
    turn_number: u32,
    history: Vector<GameEvent>,
    listeners: Vec<Box<dyn EventListener>>,
}

impl<D: DieRoller> GameEngine<D> {
    /// Start a game on a board built from `variant`.
    pub fn new(variant: VariantConfig, dice: D, players: Vec<Player>) -> Result<Self, GameError> {
        let board = variant.build_board()?;
        let mut engine = Self::from_board(board, dice, players)?;
        engine.set_variant(variant);
        Ok(engine)
    }

    /// Start a game on a hand-built board.
    ///
    /// Only the start and winning tiles are checked here. Reroute
    /// destinations are resolved when a player lands on them, so a corrupt
    /// board surfaces as an error from `take_turn`.
    ///
    /// Players without a tile are placed on tile 1. Players must be listed
    /// in turn order with ids `0..n`.
    pub fn from_board(board: Board, dice: D, players: Vec<Player>) -> Result<Self, GameError> {
        board.tile(TileId::START)?;
        board.tile(board.winning_tile())?;

        let mut players = PlayerMap::from_vec(players)?;
        for (id, player) in players.iter_mut() {
            if player.id() != id {
                return Err(GameError::UnknownPlayer { player: player.id() });
            }
            match player.current_tile() {
                Ok(tile) => {
                    board.tile(tile)?;
                }
                Err(_) => player.place_on_tile(TileId::START),
            }
        }

        tracing::debug!(
            players = players.player_count(),
            tiles = board.len(),
            winning_tile = %board.winning_tile(),
            "game created"
        );

        let first = PlayerId::new(0);
        Ok(Self {
            board,
            variant: None,
            dice,
            players,
            current: first,
            phase: TurnPhase::AwaitingRoll { player: first },
            winner: None,
            turn_number: 1,
            history: Vector::new(),
            listeners: Vec::new(),
        })
    }

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn variant(&self) -> Option<&VariantConfig> {
        self.variant.as_ref()
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(id)
            .ok_or(GameError::UnknownPlayer { player: id })
    }

    /// Tile a player stands on.
    pub fn position(&self, id: PlayerId) -> Result<TileId, GameError> {
        self.player(id)?.current_tile()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver { .. } | TurnPhase::Aborted)
    }

    /// Number of the next turn to be played (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every event emitted since the game began.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    // === Setup / restore ===

    /// Put a player on a tile directly, without triggering its action.
    pub fn place_player(&mut self, id: PlayerId, tile: TileId) -> Result<(), GameError> {
        self.board.tile(tile)?;
        self.players
            .get_mut(id)
            .ok_or(GameError::UnknownPlayer { player: id })?
            .place_on_tile(tile);
        Ok(())
    }

    /// Set or clear a player's waiting flag.
    pub fn set_waiting(&mut self, id: PlayerId, waiting: bool) -> Result<(), GameError> {
        self.players
            .get_mut(id)
            .ok_or(GameError::UnknownPlayer { player: id })?
            .set_wait_turn(waiting);
        Ok(())
    }

    /// Record the variant `board` was built from.
    pub(crate) fn set_variant(&mut self, variant: VariantConfig) {
        self.variant = Some(variant);
    }

    /// Resume turn order and outcome from a snapshot.
    pub(crate) fn restore_progress(
        &mut self,
        current: PlayerId,
        turn_number: u32,
        winner: Option<PlayerId>,
    ) -> Result<(), GameError> {
        self.player(current)?;
        self.current = current;
        self.turn_number = turn_number.max(1);
        self.winner = None;
        self.phase = TurnPhase::AwaitingRoll { player: current };
        if let Some(winner) = winner {
            self.player(winner)?;
            self.winner = Some(winner);
            self.phase = TurnPhase::GameOver { winner };
        }
        Ok(())
    }

    // === Turn driver ===

    /// Play one full turn for the current player.
    ///
    /// Fails with `GameOver` once someone has won and with `Aborted` after
    /// a fatal error. A reroute to a missing tile aborts the game and is
    /// returned as `MissingDestination`.
    pub fn take_turn(&mut self) -> Result<TurnReport, GameError> {
        match self.phase {
            TurnPhase::GameOver { winner } => return Err(GameError::GameOver { winner }),
            TurnPhase::Aborted => return Err(GameError::Aborted),
            _ => {}
        }

        let player = self.current;
        let turn = self.turn_number;
        let mut events = SmallVec::new();

        match self.run_turn(player, turn, &mut events) {
            Ok((dice, final_tile, outcome)) => Ok(TurnReport {
                player,
                turn,
                dice,
                final_tile,
                outcome,
                events,
            }),
            Err(err) => {
                tracing::error!(%player, turn, error = %err, "turn aborted");
                self.phase = TurnPhase::Aborted;
                Err(err)
            }
        }
    }

    /// Keep taking turns until someone wins or `max_turns` turns pass.
    ///
    /// Returns the winner, if any.
    pub fn play_to_completion(&mut self, max_turns: u32) -> Result<Option<PlayerId>, GameError> {
        for _ in 0..max_turns {
            if self.winner.is_some() {
                break;
            }
            self.take_turn()?;
        }
        Ok(self.winner)
    }

    fn run_turn(
        &mut self,
        player: PlayerId,
        turn: u32,
        events: &mut SmallVec<[GameEvent; 6]>,
    ) -> Result<(Option<(u8, u8)>, TileId, TurnOutcome), GameError> {
        let origin = self.position(player)?;

        if self.players[player].will_wait_turn() {
            self.players[player].set_wait_turn(false);
            tracing::debug!(%player, turn, "turn skipped");
            self.emit(events, GameEvent::PlayerSkippedTurn { player });
            self.finish_turn(player, turn, events);
            return Ok((None, origin, TurnOutcome::Skipped));
        }

        let (first, second) = self.dice.roll_pair();
        let distance = first + second;
        let destination = self.board.advance(origin, u32::from(distance))?;
        self.players[player].place_on_tile(destination);
        tracing::debug!(%player, turn, first, second, from = %origin, to = %destination, "moved");
        self.emit(
            events,
            GameEvent::PlayerMoved {
                player,
                from: origin,
                to: destination,
                dice_value: distance,
            },
        );

        if let Some(action) = self.board.tile(destination)?.action().cloned() {
            self.phase = TurnPhase::ActionResolution { player };
            self.emit(
                events,
                GameEvent::ActionTriggered {
                    player,
                    kind: action.kind(),
                },
            );
            if let ActionEffect::Moved { from, to } =
                action.perform(&mut self.players[player], &self.board)?
            {
                if from != to {
                    self.emit(
                        events,
                        GameEvent::PlayerMoved {
                            player,
                            from,
                            to,
                            dice_value: 0,
                        },
                    );
                }
            }
        }

        let final_tile = self.position(player)?;
        if self.board.is_winning_tile(final_tile) {
            self.winner = Some(player);
            self.phase = TurnPhase::GameOver { winner: player };
            tracing::info!(%player, turn, tile = %final_tile, "game won");
            self.emit(events, GameEvent::GameWon { player });
            return Ok((Some((first, second)), final_tile, TurnOutcome::Won));
        }

        self.finish_turn(player, turn, events);
        Ok((Some((first, second)), final_tile, TurnOutcome::Continued))
    }

    fn finish_turn(&mut self, player: PlayerId, turn: u32, events: &mut SmallVec<[GameEvent; 6]>) {
        self.phase = TurnPhase::TurnComplete { player };
        let next = player.next(self.players.player_count());
        self.current = next;
        self.turn_number = self.turn_number.saturating_add(1);
        self.emit(events, GameEvent::CurrentPlayerChanged { player: next });
        self.emit(events, GameEvent::TurnCompleted { player, turn });
        self.phase = TurnPhase::AwaitingRoll { player: next };
    }

    fn emit(&mut self, events: &mut SmallVec<[GameEvent; 6]>, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        self.history.push_back(event.clone());
        events.push(event);
    }
}

impl<D: DieRoller> std::fmt::Debug for GameEngine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("players", &self.players.player_count())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("turn_number", &self.turn_number)
            .field("winner", &self.winner)
            .finish()
    }
}
