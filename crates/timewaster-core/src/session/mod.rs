//! Session state: the counter store and its clock.
//!
//! One [`SessionStore`] instance backs one session. Every page holds a
//! clone of the handle and goes through it for reads and mutations; the
//! store serializes them so a clock tick and a click record can never
//! produce a lost update.

mod clock;
mod state;
mod store;

pub use state::SessionState;
pub use store::SessionStore;

/// Format elapsed seconds as `MM:SS`, both fields zero-padded to width 2.
///
/// Minutes are not wrapped at 60: 3661 seconds formats as `"61:01"`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
