//! Stateful orchestration around the pure reward rules.

pub mod last_command_store;
pub mod submission_handler;
