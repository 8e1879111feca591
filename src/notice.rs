//! Notices
//!
//! Transient messages shown in the shared message area after a mutation.

use std::time::Duration;

/// Shown when a signup request never produced a response
pub const SIGNUP_TRANSPORT_FAILURE: &str = "Failed to sign up. Please try again.";
/// Shown when a signup is rejected without a server detail
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
/// Shown when an unregister succeeds without a server message
pub const REMOVAL_SUCCESS_FALLBACK: &str = "Participant removed";
/// Shown when an unregister is rejected without a server detail
pub const REMOVAL_REJECTED_FALLBACK: &str = "Failed to remove participant";
/// Shown when an unregister request never produced a response
pub const REMOVAL_TRANSPORT_FAILURE: &str = "Failed to remove participant. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Styling class for the message area
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

/// A message for the shared message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// How long the surface keeps the message visible
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn success(text: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            dismiss_after,
        }
    }

    pub fn error(text: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            dismiss_after,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Auto-hide delays per flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTimings {
    pub signup: Duration,
    pub removal: Duration,
}

impl Default for NoticeTimings {
    fn default() -> Self {
        Self {
            signup: Duration::from_secs(5),
            removal: Duration::from_secs(4),
        }
    }
}
