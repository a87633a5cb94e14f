//! The session clock.
//!
//! One ticker task per running clock, woken by a fixed 1-second interval.
//! `timer_running` under the store lock is the source of truth: the task
//! only increments while the flag is set, so once `stop_timer()` has
//! flipped it off and returned, no tick can land. The task holds a `Weak`
//! reference to the store and exits on its own when the last handle drops.

use std::sync::{Mutex, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::store::{lock, SessionInner};

pub(super) const TICK_PERIOD: Duration = Duration::from_secs(1);

pub(super) fn spawn_ticker(inner: Weak<Mutex<SessionInner>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        // The first interval tick completes immediately; skip it so the
        // first increment lands a full period after start.
        interval.tick().await;
        loop {
            interval.tick().await;
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let mut guard = lock(&inner);
            if !guard.state.timer_running {
                return;
            }
            guard.state.elapsed_seconds += 1;
        }
    })
}
