//! Dice: the random source behind every rolled turn.
//!
//! The engine rolls one die twice per turn and sums the pips, so a move
//! covers 2 to 12 tiles. `DieRoller` is the seam: `Dice` is the seeded
//! production source, `ScriptedDice` replays a fixed sequence.

use std::collections::VecDeque;

use super::rng::{GameRng, GameRngState};

/// Faces on one die.
pub const DIE_FACES: u8 = 6;

/// A source of single-die rolls.
pub trait DieRoller {
    /// Roll one die, returning a value in `1..=6`.
    fn roll(&mut self) -> u8;

    /// Roll two dice, returning both faces.
    fn roll_pair(&mut self) -> (u8, u8) {
        let first = self.roll();
        let second = self.roll();
        (first, second)
    }

    /// RNG state to checkpoint, if this roller can be resumed.
    fn rng_state(&self) -> Option<GameRngState> {
        None
    }
}

/// Seeded uniform dice.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Resume a dice stream from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl DieRoller for Dice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..u32::from(DIE_FACES) + 1) as u8
    }

    fn rng_state(&self) -> Option<GameRngState> {
        Some(self.rng.state())
    }
}

/// Dice that return a fixed sequence of faces.
///
/// Once the script runs out every roll repeats the last face (or 1 for an
/// empty script). Faces outside `1..=6` are clamped into range.
///
/// ```
/// use ladder_race::core::{DieRoller, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 2]);
/// assert_eq!(dice.roll_pair(), (3, 2));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    last: u8,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces
                .into_iter()
                .map(|f| f.clamp(1, DIE_FACES))
                .collect(),
            last: 1,
        }
    }

    /// Faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Default for ScriptedDice {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl DieRoller for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if let Some(face) = self.faces.pop_front() {
            self.last = face;
        }
        self.last
    }
}
