//! Stand-in host collaborators for offline replay.

use std::collections::HashMap;
use std::sync::Mutex;

use sorcery_core::error::SorceryError;
use sorcery_core::host::{Notice, PlayerNotifier, XpGrantor};
use sorcery_core::player::PlayerId;
use tracing::info;

/// Keeps a running XP total per player instead of touching real player state.
#[derive(Debug, Default)]
pub struct LedgerXpGrantor {
    totals: Mutex<HashMap<PlayerId, u64>>,
}

impl LedgerXpGrantor {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total XP granted to each player so far.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the ledger mutex is poisoned.
    pub fn totals(&self) -> Result<HashMap<PlayerId, u64>, SorceryError> {
        let totals = self
            .totals
            .lock()
            .map_err(|e| SorceryError::Infrastructure(format!("ledger mutex poisoned: {e}")))?;
        Ok(totals.clone())
    }
}

impl XpGrantor for LedgerXpGrantor {
    fn grant_experience(&self, player_id: PlayerId, amount: u32) -> Result<(), SorceryError> {
        let mut totals = self
            .totals
            .lock()
            .map_err(|e| SorceryError::Infrastructure(format!("ledger mutex poisoned: {e}")))?;
        *totals.entry(player_id).or_default() += u64::from(amount);
        Ok(())
    }
}

/// Writes overlay notices to the log instead of a player's screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl PlayerNotifier for TracingNotifier {
    fn send_overlay(&self, player_id: PlayerId, notice: &Notice) -> Result<(), SorceryError> {
        info!(player_id = %player_id, text = %notice, "overlay notice");
        Ok(())
    }
}
