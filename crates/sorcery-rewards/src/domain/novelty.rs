//! Novelty filter: rejects commands that are too short or too close to the
//! player's previous rewarded command.

use crate::config::{DEFAULT_MIN_COMMAND_LEN, DEFAULT_MIN_EDIT_DISTANCE, RewardConfig};
use crate::domain::outcome::RejectReason;

/// Levenshtein distance between `a` and `b`, counted in Unicode scalar values.
///
/// Insertions, deletions and substitutions each cost 1. Only one row of the
/// DP table is kept.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Verdict of the novelty filter for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The command may be rewarded.
    Novel,
    /// The command earns nothing.
    Reject(RejectReason),
}

/// Gate that decides whether a command is different enough to reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoveltyFilter {
    min_command_len: usize,
    min_edit_distance: usize,
}

impl Default for NoveltyFilter {
    fn default() -> Self {
        Self {
            min_command_len: DEFAULT_MIN_COMMAND_LEN,
            min_edit_distance: DEFAULT_MIN_EDIT_DISTANCE,
        }
    }
}

impl From<&RewardConfig> for NoveltyFilter {
    fn from(config: &RewardConfig) -> Self {
        Self {
            min_command_len: config.min_command_len,
            min_edit_distance: config.min_edit_distance,
        }
    }
}

impl NoveltyFilter {
    /// Classifies `current` (already trimmed) against the player's previous
    /// rewarded command. `None` means the player has no record yet, which
    /// always passes once the length check is met.
    #[must_use]
    pub fn evaluate(&self, current: &str, previous: Option<&str>) -> Verdict {
        if current.chars().count() < self.min_command_len {
            return Verdict::Reject(RejectReason::TooShort);
        }

        let Some(previous) = previous else {
            return Verdict::Novel;
        };

        if current == previous {
            return Verdict::Reject(RejectReason::ExactRepeat);
        }

        if edit_distance(current, previous) < self.min_edit_distance {
            Verdict::Reject(RejectReason::StaleSyntax)
        } else {
            Verdict::Novel
        }
    }

    /// Returns `true` if `current` should earn a reward.
    #[must_use]
    pub fn should_reward(&self, current: &str, previous: Option<&str>) -> bool {
        self.evaluate(current, previous) == Verdict::Novel
    }
}
