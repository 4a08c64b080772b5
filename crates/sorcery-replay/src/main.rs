//! Syntax Sorcery replay entry point.
//!
//! Reads JSON-lines events from stdin and writes outcomes to stdout. Logs go
//! to stderr.

use std::error::Error;
use std::io;
use std::sync::Arc;

use sorcery_core::clock::SystemClock;
use sorcery_replay::host::{LedgerXpGrantor, TracingNotifier};
use sorcery_replay::{config, replay};
use sorcery_rewards::application::submission_handler::SubmissionHandler;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    let reward_config = config::from_env()?;
    tracing::info!(
        min_command_len = reward_config.min_command_len,
        min_edit_distance = reward_config.min_edit_distance,
        store_capacity = reward_config.store_capacity,
        "starting Syntax Sorcery replay"
    );

    let ledger = Arc::new(LedgerXpGrantor::new());
    let handler = SubmissionHandler::new(
        &reward_config,
        Arc::new(SystemClock),
        ledger.clone(),
        Arc::new(TracingNotifier),
    )?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    replay::run(&handler, stdin.lock(), stdout.lock())?;

    for (player_id, total) in ledger.totals()? {
        tracing::info!(player_id = %player_id, total_xp = total, "player total");
    }

    Ok(())
}
