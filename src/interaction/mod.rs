//! Discrete UI event vocabulary shared by the adapters.

use serde::{Deserialize, Serialize};

/// Keyboard input as far as the binding layer cares: the search box reacts
/// to Enter only and lets everything else pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Other,
}

/// What an event handler did with the originating browser event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventOutcome {
    /// The originating event's default action (navigation, native submit)
    /// was suppressed.
    pub default_prevented: bool,
    /// Exactly one filter-form or action-form submission was triggered.
    pub submitted: bool,
}

impl EventOutcome {
    /// Event observed, nothing done.
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            default_prevented: false,
            submitted: false,
        }
    }

    /// Default suppressed, no submission (e.g. popup interception).
    #[must_use]
    pub const fn prevented() -> Self {
        Self {
            default_prevented: true,
            submitted: false,
        }
    }

    /// Submission triggered, native default left alone.
    #[must_use]
    pub const fn submitted() -> Self {
        Self {
            default_prevented: false,
            submitted: true,
        }
    }

    /// Default suppressed and a canonical submission triggered instead.
    #[must_use]
    pub const fn prevented_and_submitted() -> Self {
        Self {
            default_prevented: true,
            submitted: true,
        }
    }
}
