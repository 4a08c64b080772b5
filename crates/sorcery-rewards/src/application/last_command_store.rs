//! Per-player record of the last rewarded command.
//!
//! Bounded by an LRU cache so a server with many short-lived players does
//! not grow without limit. Entries can also be dropped explicitly when a
//! player disconnects, or pruned by age.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, TimeDelta, Utc};
use lru::LruCache;
use sorcery_core::clock::Clock;
use sorcery_core::error::SorceryError;
use sorcery_core::player::PlayerId;

/// The last command that earned a player XP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommandRecord {
    /// Trimmed command text.
    pub command: String,
    /// When the command was rewarded.
    pub recorded_at: DateTime<Utc>,
}

/// Thread-safe, capacity-bounded map from player to last rewarded command.
pub struct LastCommandStore {
    records: Mutex<LruCache<PlayerId, LastCommandRecord>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for LastCommandStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastCommandStore").finish_non_exhaustive()
    }
}

impl LastCommandStore {
    /// Creates a store remembering at most `capacity` players.
    #[must_use]
    pub fn new(capacity: NonZeroUsize, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(LruCache::new(capacity)),
            clock,
        }
    }

    /// Locks the store for a read-modify-write on one or more players.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the mutex is poisoned.
    pub fn lock(&self) -> Result<StoreGuard<'_>, SorceryError> {
        let records = self
            .records
            .lock()
            .map_err(|e| SorceryError::Infrastructure(format!("store mutex poisoned: {e}")))?;
        Ok(StoreGuard {
            records,
            clock: self.clock.as_ref(),
        })
    }

    /// Returns the player's last rewarded command without refreshing recency.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the mutex is poisoned.
    pub fn peek(&self, player_id: PlayerId) -> Result<Option<LastCommandRecord>, SorceryError> {
        Ok(self.lock()?.records.peek(&player_id).cloned())
    }

    /// Forgets a player, typically on disconnect.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the mutex is poisoned.
    pub fn remove(&self, player_id: PlayerId) -> Result<Option<LastCommandRecord>, SorceryError> {
        Ok(self.lock()?.records.pop(&player_id))
    }

    /// Drops every record older than `max_idle`. Returns how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the mutex is poisoned.
    pub fn prune_idle(&self, max_idle: TimeDelta) -> Result<usize, SorceryError> {
        let mut guard = self.lock()?;
        let clock = guard.clock;

        let expired: Vec<PlayerId> = guard
            .records
            .iter()
            .filter(|(_, record)| clock.elapsed_since(record.recorded_at) > max_idle)
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            guard.records.pop(id);
        }
        Ok(expired.len())
    }

    /// Number of players currently tracked.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the mutex is poisoned.
    pub fn len(&self) -> Result<usize, SorceryError> {
        Ok(self.lock()?.records.len())
    }

    /// Returns `true` if no player is tracked.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the mutex is poisoned.
    pub fn is_empty(&self) -> Result<bool, SorceryError> {
        Ok(self.len()? == 0)
    }
}

/// Exclusive access to the store. Holding it serializes all submissions,
/// so a player's lookup and update can never interleave with another.
pub struct StoreGuard<'a> {
    records: MutexGuard<'a, LruCache<PlayerId, LastCommandRecord>>,
    clock: &'a dyn Clock,
}

impl StoreGuard<'_> {
    /// The player's last rewarded command, marking the player recently used.
    pub fn previous(&mut self, player_id: PlayerId) -> Option<&str> {
        self.records
            .get(&player_id)
            .map(|record| record.command.as_str())
    }

    /// Records `command` as the player's last rewarded command, evicting the
    /// least recently used player if the store is full.
    pub fn record(&mut self, player_id: PlayerId, command: String) {
        let record = LastCommandRecord {
            command,
            recorded_at: self.clock.now(),
        };
        let evicted = self.records.push(player_id, record).map(|(id, _)| id);
        if let Some(evicted) = evicted.filter(|id| *id != player_id) {
            tracing::debug!(player_id = %evicted, "evicted least recently used player record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sorcery_test_support::{FixedClock, ManualClock};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    fn store(capacity: usize) -> LastCommandStore {
        LastCommandStore::new(
            NonZeroUsize::new(capacity).unwrap(),
            Arc::new(FixedClock(start())),
        )
    }

    #[test]
    fn test_unknown_player_has_no_previous() {
        let store = store(4);
        let mut guard = store.lock().unwrap();
        assert!(guard.previous(PlayerId::new_random()).is_none());
    }

    #[test]
    fn test_record_replaces_previous_entry() {
        let store = store(4);
        let player = PlayerId::new_random();

        {
            let mut guard = store.lock().unwrap();
            guard.record(player, "say hi".to_owned());
            guard.record(player, "say hello world".to_owned());
            assert_eq!(guard.previous(player), Some("say hello world"));
        }

        assert_eq!(store.len().unwrap(), 1);
        let record = store.peek(player).unwrap().unwrap();
        assert_eq!(record.recorded_at, start());
    }

    #[test]
    fn test_least_recently_used_player_is_evicted_at_capacity() {
        let store = store(2);
        let (a, b, c) = (
            PlayerId::new_random(),
            PlayerId::new_random(),
            PlayerId::new_random(),
        );

        {
            let mut guard = store.lock().unwrap();
            guard.record(a, "say a".to_owned());
            guard.record(b, "say b".to_owned());
            // Touch `a` so `b` becomes the eviction candidate.
            assert!(guard.previous(a).is_some());
            guard.record(c, "say c".to_owned());
        }

        assert!(store.peek(a).unwrap().is_some());
        assert!(store.peek(b).unwrap().is_none());
        assert!(store.peek(c).unwrap().is_some());
    }

    #[test]
    fn test_remove_forgets_player() {
        let store = store(4);
        let player = PlayerId::new_random();
        store.lock().unwrap().record(player, "say hi".to_owned());

        let removed = store.remove(player).unwrap();
        assert_eq!(removed.map(|r| r.command).as_deref(), Some("say hi"));
        assert!(store.is_empty().unwrap());
        assert!(store.remove(player).unwrap().is_none());
    }

    #[test]
    fn test_prune_idle_drops_only_old_records() {
        let clock = Arc::new(ManualClock::new(start()));
        let store = LastCommandStore::new(NonZeroUsize::new(8).unwrap(), clock.clone());
        let (old, fresh) = (PlayerId::new_random(), PlayerId::new_random());

        store.lock().unwrap().record(old, "say old".to_owned());
        clock.advance(TimeDelta::minutes(20));
        store.lock().unwrap().record(fresh, "say fresh".to_owned());
        clock.advance(TimeDelta::minutes(20));

        let pruned = store.prune_idle(TimeDelta::minutes(30)).unwrap();

        assert_eq!(pruned, 1);
        assert!(store.peek(old).unwrap().is_none());
        assert!(store.peek(fresh).unwrap().is_some());
    }
}
