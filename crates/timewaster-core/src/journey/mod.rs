//! The five-page journey state machine.
//!
//! ```text
//! WhyAreYouHere --accept--> TimeWasting --gate >=3--> PointlessActions
//!     --gate >=4--> PickACard --any flip--> FinalReport --restart--> WhyAreYouHere
//! ```
//!
//! Progression is forward-only; there is no back navigation. Entering
//! `TimeWasting` starts the session clock, entering `FinalReport` stops it
//! and performs the one-time title award, and `restart` is the only edge
//! that resets the session counters.

mod gate;

pub use gate::PageGate;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::session::SessionStore;

/// The five pages, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    WhyAreYouHere,
    TimeWasting,
    PointlessActions,
    PickACard,
    FinalReport,
}

impl Page {
    /// 1-based page number, as recorded on the store.
    pub fn number(self) -> u8 {
        match self {
            Page::WhyAreYouHere => 1,
            Page::TimeWasting => 2,
            Page::PointlessActions => 3,
            Page::PickACard => 4,
            Page::FinalReport => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Page::WhyAreYouHere),
            2 => Some(Page::TimeWasting),
            3 => Some(Page::PointlessActions),
            4 => Some(Page::PickACard),
            5 => Some(Page::FinalReport),
            _ => None,
        }
    }

    /// The next page forward, `None` from the final report.
    pub fn next(self) -> Option<Self> {
        match self {
            Page::WhyAreYouHere => Some(Page::TimeWasting),
            Page::TimeWasting => Some(Page::PointlessActions),
            Page::PointlessActions => Some(Page::PickACard),
            Page::PickACard => Some(Page::FinalReport),
            Page::FinalReport => None,
        }
    }

    /// Local actions required before the continue affordance unlocks.
    ///
    /// The warning page needs its single accept click, the card page any
    /// one flip; the final report has nothing left to unlock.
    pub fn gate_threshold(self) -> u32 {
        match self {
            Page::WhyAreYouHere => 1,
            Page::TimeWasting => 3,
            Page::PointlessActions => 4,
            Page::PickACard => 1,
            Page::FinalReport => 0,
        }
    }

    /// Page title as displayed.
    pub fn title(self) -> &'static str {
        match self {
            Page::WhyAreYouHere => "Why Are You Here?",
            Page::TimeWasting => "Time Wasting",
            Page::PointlessActions => "Pointless Actions",
            Page::PickACard => "Pick a Card",
            Page::FinalReport => "Cognitive Resources Misuse Report",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Drives one session through the five pages.
///
/// Owns the current page and its gate; everything session-wide goes
/// through the [`SessionStore`] handle it was given.
#[derive(Debug)]
pub struct Journey {
    store: SessionStore,
    page: Page,
    gate: PageGate,
}

impl Journey {
    /// A fresh traversal on the warning page.
    ///
    /// The store is taken as-is; a brand-new store already reads
    /// `current_page = 1` and needs no announcement.
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            page: Page::WhyAreYouHere,
            gate: PageGate::new(Page::WhyAreYouHere.gate_threshold()),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn gate(&self) -> &PageGate {
        &self.gate
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Record one qualifying action on the current page: bumps the local
    /// gate and the session-wide click counter.
    pub fn record_action(&mut self) -> Event {
        self.gate.record_action();
        self.store.record_click()
    }

    /// Whether the continue affordance is unlocked.
    pub fn can_advance(&self) -> bool {
        self.page.next().is_some() && self.gate.can_advance()
    }

    /// Move to the next page and run its entry effects.
    ///
    /// Fails if the gate is still locked or the journey is already on the
    /// final report. On success returns the events the transition produced.
    pub fn advance(&mut self) -> Result<Vec<Event>> {
        let next = self.page.next().ok_or(CoreError::JourneyComplete)?;
        if !self.gate.can_advance() {
            return Err(CoreError::GateNotSatisfied {
                page: self.page,
                count: self.gate.count(),
                required: self.gate.threshold(),
            });
        }
        Ok(self.enter(next))
    }

    fn enter(&mut self, page: Page) -> Vec<Event> {
        self.page = page;
        self.gate = PageGate::new(page.gate_threshold());

        let mut events = vec![self.store.set_current_page(page.number())];
        match page {
            Page::TimeWasting => {
                events.extend(self.store.start_timer());
            }
            Page::FinalReport => {
                events.extend(self.store.stop_timer());
                let tier = self.store.efficiency_tier();
                let title = self.store.award_title();
                events.push(Event::TitleAwarded {
                    tier,
                    title,
                    at: Utc::now(),
                });
            }
            _ => {}
        }
        events
    }

    /// End the session: stop the clock, reset every counter, return to the
    /// warning page with a fresh gate. The only way back to page one.
    pub fn restart(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        events.extend(self.store.stop_timer());
        events.push(self.store.reset());
        self.page = Page::WhyAreYouHere;
        self.gate = PageGate::new(Page::WhyAreYouHere.gate_threshold());
        events
    }
}
