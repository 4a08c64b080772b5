//! Test host collaborators — mock `XpGrantor` and `PlayerNotifier`
//! implementations for tests.

use std::sync::Mutex;

use sorcery_core::error::SorceryError;
use sorcery_core::host::{Notice, PlayerNotifier, XpGrantor};
use sorcery_core::player::PlayerId;

/// An XP grantor that records every grant and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingXpGrantor {
    grants: Mutex<Vec<(PlayerId, u32)>>,
}

impl RecordingXpGrantor {
    /// Create an empty recording grantor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all grants in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn grants(&self) -> Vec<(PlayerId, u32)> {
        self.grants.lock().unwrap().clone()
    }

    /// Sum of all XP granted to `player_id`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn total_for(&self, player_id: PlayerId) -> u64 {
        self.grants
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == player_id)
            .map(|(_, amount)| u64::from(*amount))
            .sum()
    }
}

impl XpGrantor for RecordingXpGrantor {
    fn grant_experience(&self, player_id: PlayerId, amount: u32) -> Result<(), SorceryError> {
        self.grants.lock().unwrap().push((player_id, amount));
        Ok(())
    }
}

/// An XP grantor whose host is always unavailable. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingXpGrantor;

impl XpGrantor for FailingXpGrantor {
    fn grant_experience(&self, _player_id: PlayerId, _amount: u32) -> Result<(), SorceryError> {
        Err(SorceryError::Collaborator("player entity unavailable".into()))
    }
}

/// A notifier that records every overlay message it is asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(PlayerId, Notice)>>,
}

impl RecordingNotifier {
    /// Create an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all notices in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn sent(&self) -> Vec<(PlayerId, Notice)> {
        self.sent.lock().unwrap().clone()
    }
}

impl PlayerNotifier for RecordingNotifier {
    fn send_overlay(&self, player_id: PlayerId, notice: &Notice) -> Result<(), SorceryError> {
        self.sent.lock().unwrap().push((player_id, *notice));
        Ok(())
    }
}

/// A notifier that always fails to deliver.
#[derive(Debug)]
pub struct FailingNotifier;

impl PlayerNotifier for FailingNotifier {
    fn send_overlay(&self, _player_id: PlayerId, _notice: &Notice) -> Result<(), SorceryError> {
        Err(SorceryError::Collaborator("connection reset".into()))
    }
}
