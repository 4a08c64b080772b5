//! Syntax Sorcery — command reward bounded context.
//!
//! Responsible for deciding whether a player's command is novel enough to
//! earn experience, scoring it by structure, and remembering each player's
//! last rewarded command.

pub mod application;
pub mod config;
pub mod domain;
