//! Command submissions delivered by the host.

use uuid::Uuid;

use crate::player::Submitter;

/// A single intercepted command execution.
#[derive(Debug, Clone)]
pub struct CommandSubmission {
    /// Correlation ID used to trace this submission through the logs.
    pub correlation_id: Uuid,
    /// The entity that issued the command.
    pub submitter: Submitter,
    /// Command text exactly as the host received it.
    pub raw_command: String,
}

impl CommandSubmission {
    /// Creates a submission with a fresh correlation ID.
    #[must_use]
    pub fn new(submitter: Submitter, raw_command: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            submitter,
            raw_command: raw_command.into(),
        }
    }

    /// Command text with leading and trailing control characters and spaces
    /// (anything up to U+0020) removed. Unicode spaces such as NBSP are kept.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.raw_command.trim_matches(|c: char| c <= ' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimmed(raw: &str) -> String {
        CommandSubmission::new(Submitter::Other, raw)
            .trimmed()
            .to_owned()
    }

    #[test]
    fn test_trim_strips_spaces_and_control_characters() {
        assert_eq!(trimmed("  say hi \t\r\n"), "say hi");
        assert_eq!(trimmed("\0say hi\u{1f}"), "say hi");
        assert_eq!(trimmed(" \0 "), "");
    }

    #[test]
    fn test_trim_keeps_unicode_spaces() {
        assert_eq!(trimmed("\u{a0}say hi\u{a0}"), "\u{a0}say hi\u{a0}");
        assert_eq!(trimmed("\u{3000}tp"), "\u{3000}tp");
    }

    #[test]
    fn test_trim_leaves_inner_whitespace() {
        assert_eq!(trimmed(" say  \t hi "), "say  \t hi");
    }
}
