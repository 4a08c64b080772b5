//! Submission handler for the command reward context.
//!
//! Orchestrates one intercepted command: filter for novelty against the
//! player's last rewarded command, score it, grant the XP through the host,
//! remember it, and tell the player.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::TimeDelta;
use sorcery_core::clock::Clock;
use sorcery_core::error::SorceryError;
use sorcery_core::host::{Notice, PlayerNotifier, XpGrantor};
use sorcery_core::player::PlayerId;
use sorcery_core::submission::CommandSubmission;
use tracing::{debug, info, instrument, warn};

use crate::application::last_command_store::LastCommandStore;
use crate::config::RewardConfig;
use crate::domain::novelty::{NoveltyFilter, Verdict};
use crate::domain::outcome::{Outcome, RejectReason};
use crate::domain::scoring;

/// Handles command submissions for every player on a server.
///
/// Shareable across threads. All submissions pass through one lock on the
/// last-command store, so a player's commands are judged strictly in the
/// order they acquire it.
pub struct SubmissionHandler {
    filter: NoveltyFilter,
    store: LastCommandStore,
    grantor: Arc<dyn XpGrantor>,
    notifier: Arc<dyn PlayerNotifier>,
}

impl std::fmt::Debug for SubmissionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionHandler")
            .field("filter", &self.filter)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SubmissionHandler {
    /// Builds a handler from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Validation` if `config` is invalid.
    pub fn new(
        config: &RewardConfig,
        clock: Arc<dyn Clock>,
        grantor: Arc<dyn XpGrantor>,
        notifier: Arc<dyn PlayerNotifier>,
    ) -> Result<Self, SorceryError> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.store_capacity).ok_or_else(|| {
            SorceryError::Validation("store_capacity must be greater than zero".to_owned())
        })?;

        Ok(Self {
            filter: NoveltyFilter::from(config),
            store: LastCommandStore::new(capacity, clock),
            grantor,
            notifier,
        })
    }

    /// Read access to the per-player store.
    #[must_use]
    pub fn store(&self) -> &LastCommandStore {
        &self.store
    }

    /// Handles one submission.
    ///
    /// Non-player submitters are ignored. Short commands and exact repeats
    /// are rejected silently; near-repeats are rejected with a stale-syntax
    /// notice. Anything else is scored, granted and recorded.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Collaborator` if the XP grant fails (the
    /// command is then not recorded), or `SorceryError::Infrastructure` if the
    /// store lock is poisoned. Notice delivery failures are logged only.
    #[instrument(skip(self, submission), fields(correlation_id = %submission.correlation_id))]
    pub fn handle(&self, submission: &CommandSubmission) -> Result<Outcome, SorceryError> {
        let Some(player_id) = submission.submitter.player_id() else {
            debug!("ignoring command from non-player source");
            return Ok(Outcome::Ignored);
        };

        let command = submission.trimmed();

        let outcome = {
            let mut store = self.store.lock()?;
            let previous = store.previous(player_id).map(str::to_owned);

            match self.filter.evaluate(command, previous.as_deref()) {
                Verdict::Reject(reason) => Outcome::Rejected { reason },
                Verdict::Novel => {
                    let amount = scoring::score(command);
                    if let Err(e) = self.grantor.grant_experience(player_id, amount) {
                        warn!(player_id = %player_id, error = %e, "experience grant failed");
                        return Err(e);
                    }
                    store.record(player_id, command.to_owned());
                    Outcome::Rewarded { amount }
                }
            }
        };

        match outcome {
            Outcome::Rewarded { amount } => {
                info!(player_id = %player_id, amount, "command rewarded");
                self.notify(player_id, Notice::SyntaxPower { amount });
            }
            Outcome::Rejected {
                reason: RejectReason::StaleSyntax,
            } => {
                debug!(player_id = %player_id, "command rejected as stale syntax");
                self.notify(player_id, Notice::StaleSyntax);
            }
            Outcome::Rejected { reason } => {
                debug!(player_id = %player_id, ?reason, "command rejected");
            }
            Outcome::Ignored => {}
        }

        Ok(outcome)
    }

    /// Forgets a player's last command when they leave the server. Returns
    /// whether a record existed.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the store lock is poisoned.
    pub fn handle_disconnect(&self, player_id: PlayerId) -> Result<bool, SorceryError> {
        let removed = self.store.remove(player_id)?.is_some();
        debug!(player_id = %player_id, removed, "player disconnected");
        Ok(removed)
    }

    /// Drops records of players idle for longer than `max_idle`.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Infrastructure` if the store lock is poisoned.
    pub fn prune_idle(&self, max_idle: TimeDelta) -> Result<usize, SorceryError> {
        let pruned = self.store.prune_idle(max_idle)?;
        if pruned > 0 {
            info!(pruned, "pruned idle player records");
        }
        Ok(pruned)
    }

    fn notify(&self, player_id: PlayerId, notice: Notice) {
        if let Err(e) = self.notifier.send_overlay(player_id, &notice) {
            warn!(player_id = %player_id, error = %e, "overlay notice not delivered");
        }
    }
}
