//! Host collaborator abstractions.
//!
//! The game server owns player state and messaging. The reward engine only
//! asks it to grant experience and to flash a short overlay message.

use std::fmt;

use crate::error::SorceryError;
use crate::player::PlayerId;

/// Grants experience points to a player.
pub trait XpGrantor: Send + Sync {
    /// Adds `amount` experience to the player.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Collaborator` if the host could not apply the grant.
    fn grant_experience(&self, player_id: PlayerId, amount: u32) -> Result<(), SorceryError>;
}

/// Shows short-lived overlay text to a player.
pub trait PlayerNotifier: Send + Sync {
    /// Displays `notice` above the player's hotbar.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Collaborator` if the message could not be delivered.
    fn send_overlay(&self, player_id: PlayerId, notice: &Notice) -> Result<(), SorceryError>;
}

/// The two overlay messages the engine ever sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The command was too close to the player's previous one.
    StaleSyntax,
    /// The command earned `amount` XP.
    SyntaxPower {
        /// XP granted.
        amount: u32,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleSyntax => f.write_str("§c⚠️ Stale Syntax: Try something new!"),
            Self::SyntaxPower { amount } => write!(f, "§b✨ Syntax Power: +{amount} XP"),
        }
    }
}
