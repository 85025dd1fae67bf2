//! Notification seam for user-facing error surfacing
//!
//! The HTTP layer raises at most one notification per failed request; how
//! notifications are presented (toasts, status bars) is the consumer's
//! concern.

use std::fmt;

/// Classification of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    BadRequest,
    Unauthorised,
    Forbidden,
    NotFound,
    ServerError,
}

/// A toast-style notification raised by the HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Map an HTTP status code to its notification.
    ///
    /// Statuses outside the classified set produce no notification.
    pub fn for_status(status: u16) -> Option<Self> {
        let (kind, message) = match status {
            400 => (NotificationKind::BadRequest, "bad request"),
            401 => (NotificationKind::Unauthorised, "unauthorised"),
            403 => (NotificationKind::Forbidden, "forbidden"),
            404 => (NotificationKind::NotFound, "not found"),
            500 => (NotificationKind::ServerError, "server error"),
            _ => return None,
        };
        Some(Self {
            kind,
            message: message.to_string(),
        })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Sink for notifications raised by the HTTP layer.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default notifier that logs through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::warn!("{}", notification);
    }
}
