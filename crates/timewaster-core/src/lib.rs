//! # TimeWaster Core Library
//!
//! This library provides the session logic for TimeWaster, a five-page
//! interactive joke sequence. The presentation layer (CLI, GUI) is a thin
//! shell over this crate: it translates user gestures into store calls and
//! renders the events and derived numbers the core hands back.
//!
//! ## Architecture
//!
//! - **Session Store**: the single source of truth for session counters
//!   (elapsed time, clicks, current page, awarded title, download attempts),
//!   a cloneable handle with serialized mutations
//! - **Clock**: a 1-second ticker task that advances elapsed time while the
//!   session timer runs; stopping it cancels the tick deterministically
//! - **Scoring**: pure click/time scoring into four efficiency tiers, plus
//!   the one-time random title award
//! - **Journey**: the forward-only five-page state machine with per-page
//!   progression gates
//!
//! ## Key Components
//!
//! - [`SessionStore`]: counter state and atomic mutations
//! - [`Journey`]: page progression and lifecycle effects
//! - [`EfficiencyTier`]: ordered scoring classification
//! - [`Event`]: serialized record of every state change

pub mod error;
pub mod events;
pub mod journey;
pub mod scoring;
pub mod session;

pub use error::{CoreError, Result};
pub use events::Event;
pub use journey::{Journey, Page, PageGate};
pub use scoring::{efficiency_tier, pick_title, title_pool, EfficiencyTier, ReportStats};
pub use session::{format_elapsed, SessionState, SessionStore};
