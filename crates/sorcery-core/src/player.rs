//! Player identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, globally unique player identifier (the host's player UUID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Who issued a command. Only players take part in rewards; consoles,
/// command blocks and other entities are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitter {
    /// A connected player.
    Player(PlayerId),
    /// Any non-player source.
    Other,
}

impl Submitter {
    /// Returns the player id if this submitter is a player.
    #[must_use]
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Self::Player(id) => Some(*id),
            Self::Other => None,
        }
    }
}

impl From<Option<PlayerId>> for Submitter {
    fn from(id: Option<PlayerId>) -> Self {
        id.map_or(Self::Other, Self::Player)
    }
}
