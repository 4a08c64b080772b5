//! Shared test mocks and utilities for the Syntax Sorcery reward engine.

mod clock;
mod host;

pub use clock::{FixedClock, ManualClock};
pub use host::{FailingNotifier, FailingXpGrantor, RecordingNotifier, RecordingXpGrantor};
