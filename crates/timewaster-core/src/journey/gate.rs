//! Per-page progression gates.
//!
//! Each page counts its own local actions, separate from the session-wide
//! click total. The continue affordance unlocks once the local count
//! reaches the page's threshold. Gates are created fresh on page entry, so
//! re-entering a page starts the count over.

use serde::{Deserialize, Serialize};

/// Local action counter with an unlock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGate {
    threshold: u32,
    count: u32,
}

impl PageGate {
    /// A fresh gate requiring `threshold` local actions.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            count: 0,
        }
    }

    /// Record one qualifying local action; returns the new count.
    ///
    /// Side-effect free beyond the local count -- callers record the
    /// session-wide click separately on the store.
    pub fn record_action(&mut self) -> u32 {
        self.count += 1;
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// The gate predicate: `count >= threshold`.
    pub fn can_advance(&self) -> bool {
        self.count >= self.threshold
    }

    /// Wind the local count back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}
