//! XP scoring heuristic.
//!
//! A command's reward grows sub-linearly with length and steeply with
//! structure: NBT/JSON brackets, parameterised selectors and `execute`
//! sub-command chains.

/// XP every qualifying command starts from.
const BASE_SCORE: f64 = 5.0;
/// Multiplier on the square root of the command length.
const LENGTH_FACTOR: f64 = 2.0;
/// Flat reward per opening `{` or `[`.
const BRACKET_BONUS: f64 = 25.0;
/// Flat reward when a selector carries bracketed arguments.
const SELECTOR_BONUS: f64 = 40.0;
/// Applied once to the whole score for `execute`-style chains.
const LOGIC_MULTIPLIER: f64 = 1.5;
/// Substrings that mark sub-command composition.
const LOGIC_KEYWORDS: [&str; 3] = ["run ", "as ", "at "];

/// Per-feature breakdown of a command's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Command length in characters.
    pub length: usize,
    /// `sqrt(length) * 2`.
    pub length_bonus: f64,
    /// Number of `{` and `[` characters.
    pub bracket_count: usize,
    /// `bracket_count * 25`.
    pub structure_bonus: f64,
    /// 40 if the command has both `@` and `[`, else 0.
    pub selector_bonus: f64,
    /// Whether the 1.5x multiplier applies.
    pub logic_multiplier: bool,
}

impl ScoreBreakdown {
    /// Breaks `command` down into its scoring features.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(command: &str) -> Self {
        let length = command.chars().count();
        let bracket_count = command.chars().filter(|c| matches!(c, '{' | '[')).count();
        let has_selector = command.contains('@') && command.contains('[');

        Self {
            length,
            length_bonus: (length as f64).sqrt() * LENGTH_FACTOR,
            bracket_count,
            structure_bonus: bracket_count as f64 * BRACKET_BONUS,
            selector_bonus: if has_selector { SELECTOR_BONUS } else { 0.0 },
            logic_multiplier: LOGIC_KEYWORDS.iter().any(|kw| command.contains(kw)),
        }
    }

    /// Untruncated score.
    #[must_use]
    pub fn raw(&self) -> f64 {
        let score = BASE_SCORE + self.length_bonus + self.structure_bonus + self.selector_bonus;
        if self.logic_multiplier {
            score * LOGIC_MULTIPLIER
        } else {
            score
        }
    }

    /// Final score, truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn total(&self) -> u32 {
        self.raw() as u32
    }
}

/// XP earned by `command`.
#[must_use]
pub fn score(command: &str) -> u32 {
    ScoreBreakdown::of(command).total()
}
