//! Line-oriented replay of recorded host events.
//!
//! Input is JSON lines, one event per line:
//!
//! ```text
//! {"event":"command","player_id":"<uuid>","command":"say hi"}
//! {"event":"command","player_id":null,"command":"say from console"}
//! {"event":"disconnect","player_id":"<uuid>"}
//! ```
//!
//! Each command produces one JSON outcome line on the output.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use sorcery_core::player::{PlayerId, Submitter};
use sorcery_core::submission::CommandSubmission;
use sorcery_rewards::application::submission_handler::SubmissionHandler;
use sorcery_rewards::domain::outcome::Outcome;
use tracing::{debug, info};

use crate::error::AppError;

/// One recorded host event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// A command was executed. `player_id` is null for non-player sources.
    Command {
        /// Submitting player, if any.
        #[serde(default)]
        player_id: Option<PlayerId>,
        /// Raw command text.
        command: String,
    },
    /// A player left the server.
    Disconnect {
        /// The departing player.
        player_id: PlayerId,
    },
}

/// Outcome line written for each replayed command.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeLine {
    /// 1-based input line number.
    pub line: usize,
    /// Submitting player, if any.
    pub player_id: Option<PlayerId>,
    /// What the engine decided.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Counts gathered over a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Command events processed.
    pub commands: usize,
    /// Commands that earned XP.
    pub rewarded: usize,
    /// Commands rejected by the novelty filter.
    pub rejected: usize,
    /// Commands from non-player sources.
    pub ignored: usize,
    /// Disconnect events processed.
    pub disconnects: usize,
    /// Total XP granted.
    pub total_xp: u64,
}

impl ReplaySummary {
    fn count(&mut self, outcome: Outcome) {
        self.commands += 1;
        self.total_xp += u64::from(outcome.amount());
        match outcome {
            Outcome::Rewarded { .. } => self.rewarded += 1,
            Outcome::Rejected { .. } => self.rejected += 1,
            Outcome::Ignored => self.ignored += 1,
        }
    }
}

/// Replays every event in `input` through `handler`, writing one outcome
/// line per command to `output`. Blank lines are skipped.
///
/// # Errors
///
/// Stops at the first unreadable line, malformed event, engine failure or
/// write failure.
pub fn run<R, W>(handler: &SubmissionHandler, input: R, mut output: W) -> Result<ReplaySummary, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ReplaySummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: ReplayEvent = serde_json::from_str(&line).map_err(|source| AppError::Input {
            line: line_no,
            source,
        })?;

        match event {
            ReplayEvent::Command { player_id, command } => {
                let submission = CommandSubmission::new(Submitter::from(player_id), command);
                let outcome = handler.handle(&submission)?;
                summary.count(outcome);

                serde_json::to_writer(
                    &mut output,
                    &OutcomeLine {
                        line: line_no,
                        player_id,
                        outcome,
                    },
                )?;
                output.write_all(b"\n")?;
            }
            ReplayEvent::Disconnect { player_id } => {
                handler.handle_disconnect(player_id)?;
                summary.disconnects += 1;
                debug!(line = line_no, player_id = %player_id, "replayed disconnect");
            }
        }
    }

    output.flush()?;
    info!(
        commands = summary.commands,
        rewarded = summary.rewarded,
        rejected = summary.rejected,
        total_xp = summary.total_xp,
        "replay finished"
    );
    Ok(summary)
}
