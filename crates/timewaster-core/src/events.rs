use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::EfficiencyTier;

/// Every state change in the session produces an Event.
/// The presentation layer renders them; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        at: DateTime<Utc>,
    },
    TimerStopped {
        elapsed_seconds: u64,
        at: DateTime<Utc>,
    },
    ClickRecorded {
        total_clicks: u64,
        at: DateTime<Utc>,
    },
    /// A page announced itself as current. Advisory only; gating happens
    /// in the journey, not here.
    PageEntered {
        page: u8,
        at: DateTime<Utc>,
    },
    DownloadAttempted {
        attempts: u32,
        at: DateTime<Utc>,
    },
    /// The one-time title award on entering the final report.
    TitleAwarded {
        tier: EfficiencyTier,
        title: String,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        elapsed_seconds: u64,
        total_clicks: u64,
        current_page: u8,
        awarded_title: Option<String>,
        download_attempts: u32,
        timer_running: bool,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_a_type_tag() {
        let event = Event::ClickRecorded {
            total_clicks: 3,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ClickRecorded");
        assert_eq!(json["total_clicks"], 3);
    }
}

