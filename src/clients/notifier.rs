//! The notification collaborator.
//!
//! The tile emits [`Notification`] values; whatever implements [`Notifier`] decides how they
//! are shown. The channel implementation hands them to a separate presentation task.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn failure(&self, message: &str) {
        self.notify(Notification::failure(message));
    }
}

impl Notifier for mpsc::UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.send(notification) {
            warn!(message = %e.0.message, "Notification dropped, no presenter listening");
        }
    }
}

/// Creates a channel-backed notifier and the receiver a presentation layer reads from.
pub fn notification_channel() -> (
    mpsc::UnboundedSender<Notification>,
    mpsc::UnboundedReceiver<Notification>,
) {
    mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = notification_channel();
        notifier.success("saved");
        notifier.failure("nope");

        assert_eq!(rx.recv().await, Some(Notification::success("saved")));
        assert_eq!(rx.recv().await, Some(Notification::failure("nope")));
    }

    #[test]
    fn test_closed_channel_does_not_panic() {
        let (notifier, rx) = notification_channel();
        drop(rx);
        notifier.failure("nobody listening");
    }
}
