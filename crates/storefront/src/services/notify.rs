//! Toast notifications.
//!
//! Displaying a toast is the UI's job. The core only hands over a message
//! and how long it should stay visible.

use std::cell::RefCell;
use std::time::Duration;

use serde::Serialize;

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(1800);

/// Sink for fire-and-forget user notifications.
pub trait Notifier {
    /// Show `message` for `timeout`.
    fn notify(&self, message: &str, timeout: Duration);
}

/// A notification waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub timeout_ms: u64,
}

/// Collects toasts until the UI drains them.
#[derive(Debug, Default)]
pub struct ToastOutbox {
    pending: RefCell<Vec<Toast>>,
}

impl ToastOutbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every toast queued since the last drain.
    pub fn drain(&self) -> Vec<Toast> {
        self.pending.take()
    }
}

impl Notifier for ToastOutbox {
    fn notify(&self, message: &str, timeout: Duration) {
        tracing::debug!(message, "Toast queued");
        self.pending.borrow_mut().push(Toast {
            message: message.to_owned(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_outbox() {
        let outbox = ToastOutbox::new();
        outbox.notify("Cosmic Latte added", DEFAULT_TOAST_TIMEOUT);
        outbox.notify("Touched", Duration::from_millis(500));

        let toasts = outbox.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(
            toasts.first(),
            Some(&Toast {
                message: "Cosmic Latte added".to_string(),
                timeout_ms: 1800,
            })
        );
        assert!(outbox.drain().is_empty());
    }
}
