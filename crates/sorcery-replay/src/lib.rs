//! Syntax Sorcery replay tool.
//!
//! Feeds recorded command submissions through the reward engine and reports
//! each outcome, so thresholds can be tuned without a running game server.

pub mod config;
pub mod error;
pub mod host;
pub mod replay;
