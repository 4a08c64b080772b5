//! Submission outcomes.

use serde::Serialize;

/// Why a submission earned nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Fewer characters than the configured minimum.
    TooShort,
    /// Identical to the player's last rewarded command.
    ExactRepeat,
    /// Within the minimum edit distance of the last rewarded command.
    StaleSyntax,
}

/// Result of handling one command submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The submitter was not a player; nothing was evaluated.
    Ignored,
    /// No reward was granted.
    Rejected {
        /// Which rule rejected the command.
        reason: RejectReason,
    },
    /// The player was granted `amount` XP.
    Rewarded {
        /// XP granted.
        amount: u32,
    },
}

impl Outcome {
    /// XP granted by this outcome, zero unless rewarded.
    #[must_use]
    pub fn amount(&self) -> u32 {
        match self {
            Self::Rewarded { amount } => *amount,
            Self::Ignored | Self::Rejected { .. } => 0,
        }
    }
}
