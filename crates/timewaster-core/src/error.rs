//! Core error types for timewaster-core.
//!
//! Counter mutations are infallible by design; the only fallible
//! operations are journey transitions.

use thiserror::Error;

use crate::journey::Page;

/// Core error type for timewaster-core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Forward navigation requested before the page gate was satisfied.
    #[error("gate not satisfied on {page}: {count} of {required} actions")]
    GateNotSatisfied {
        page: Page,
        count: u32,
        required: u32,
    },

    /// Forward navigation requested from the final page. The only edge out
    /// of the final report is a restart.
    #[error("already on the final page; restart to go around again")]
    JourneyComplete,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
