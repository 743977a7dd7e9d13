use std::time::Duration;

/// Event-loop poll interval in milliseconds. Short enough that a due
/// countdown second is never observed late by more than one frame.
pub const DEFAULT_POLL_MS: u64 = 250;

/// One countdown step
pub const SECOND: Duration = Duration::from_secs(1);

/// Get the event-loop poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}
