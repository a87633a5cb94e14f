use serde::{Deserialize, Serialize};

/// Plain snapshot of the session counters.
///
/// The live state is owned by [`SessionStore`](super::SessionStore); this
/// struct is what read-side callers get back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Seconds accumulated while the timer was running.
    pub elapsed_seconds: u64,
    /// Session-wide click count; only a reset winds it back.
    pub total_clicks: u64,
    /// Which page last announced itself active. Advisory only.
    pub current_page: u8,
    /// Set once on the final page, then immutable until reset.
    pub awarded_title: Option<String>,
    /// Failed download clicks on the final report. Unbounded.
    pub download_attempts: u32,
    /// Whether the clock is actively ticking.
    pub timer_running: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            elapsed_seconds: 0,
            total_clicks: 0,
            current_page: 1,
            awarded_title: None,
            download_attempts: 0,
            timer_running: false,
        }
    }
}
