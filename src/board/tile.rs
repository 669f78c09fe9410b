//! Tiles: the nodes of the race path.

use serde::{Deserialize, Serialize};

use crate::actions::TileAction;

/// Tile identifier. Ids start at 1; tile 1 is where every player begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl TileId {
    /// The starting tile.
    pub const START: TileId = TileId(1);

    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Parse a tile id from saved text. Rejects 0 and anything non-numeric.
    ///
    /// ```
    /// use ladder_race::board::TileId;
    ///
    /// assert_eq!(TileId::parse(" 42 "), Some(TileId::new(42)));
    /// assert_eq!(TileId::parse("0"), None);
    /// assert_eq!(TileId::parse("forty"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(raw) => Some(Self(raw)),
        }
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A position on the path.
///
/// The `next` link and the action are fixed when the tile is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    /// `None` on the last tile of the path.
    next: Option<TileId>,
    action: Option<TileAction>,
}

impl Tile {
    #[must_use]
    pub fn new(id: TileId) -> Self {
        Self {
            id,
            next: None,
            action: None,
        }
    }

    /// Link this tile to the one after it (builder pattern).
    #[must_use]
    pub fn with_next(mut self, next: TileId) -> Self {
        self.next = Some(next);
        self
    }

    /// Attach an action (builder pattern). A tile carries at most one.
    #[must_use]
    pub fn with_action(mut self, action: TileAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn next(&self) -> Option<TileId> {
        self.next
    }

    #[must_use]
    pub fn action(&self) -> Option<&TileAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
