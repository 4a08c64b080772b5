//! Shared test helpers for replay integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::TimeZone;
use sorcery_replay::replay::{self, ReplaySummary};
use sorcery_rewards::application::submission_handler::SubmissionHandler;
use sorcery_rewards::config::RewardConfig;
use sorcery_test_support::{FixedClock, RecordingNotifier, RecordingXpGrantor};

/// A handler wired to recording collaborators and a fixed clock.
pub struct TestHarness {
    pub handler: SubmissionHandler,
    pub grantor: Arc<RecordingXpGrantor>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Build a harness with the default reward configuration.
pub fn harness() -> TestHarness {
    harness_with(&RewardConfig::default())
}

/// Build a harness with a custom reward configuration.
pub fn harness_with(config: &RewardConfig) -> TestHarness {
    let clock = Arc::new(FixedClock(
        chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ));
    let grantor = Arc::new(RecordingXpGrantor::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let handler = SubmissionHandler::new(config, clock, grantor.clone(), notifier.clone())
        .unwrap();

    TestHarness {
        handler,
        grantor,
        notifier,
    }
}

/// Replay `input` and return the summary plus the parsed outcome lines.
pub fn run_replay(
    harness: &TestHarness,
    input: &str,
) -> (ReplaySummary, Vec<serde_json::Value>) {
    let mut output = Vec::new();
    let summary = replay::run(&harness.handler, input.as_bytes(), &mut output).unwrap();
    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (summary, lines)
}

/// Encode a command event line.
pub fn command_line(player_id: Option<uuid::Uuid>, command: &str) -> String {
    serde_json::json!({
        "event": "command",
        "player_id": player_id,
        "command": command,
    })
    .to_string()
}

/// Encode a disconnect event line.
pub fn disconnect_line(player_id: uuid::Uuid) -> String {
    serde_json::json!({ "event": "disconnect", "player_id": player_id }).to_string()
}
