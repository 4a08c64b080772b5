//! Syntax Sorcery Core — shared abstractions.
//!
//! Identity, submission and error types used by every crate in the
//! workspace, plus the collaborator traits through which the reward engine
//! talks to its host game server. Contains no scoring logic.

pub mod clock;
pub mod error;
pub mod host;
pub mod player;
pub mod submission;
