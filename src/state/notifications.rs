//! Single-slot toast notifications with timed expiry
//!
//! The center holds at most one toast. Every `show` replaces the current toast
//! and arms a fresh expiry timer; the previous timer is aborted when its handle
//! is dropped. Expiry is reported back to the event loop as a [`ToastExpired`]
//! message so that the center stays the only writer of its toast.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// How long a toast stays on screen
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification about the last submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Sent by a toast's timer once its lifetime has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastExpired {
    pub id: Uuid,
}

/// Cancellation handle for a pending expiry. Aborts the timer task on drop.
#[derive(Debug)]
struct ExpiryTimer {
    toast_id: Uuid,
    deadline: Instant,
    handle: JoinHandle<()>,
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Owner of the live toast
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Toast>,
    timer: Option<ExpiryTimer>,
    lifetime: Duration,
    expired_tx: mpsc::UnboundedSender<ToastExpired>,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration, expired_tx: mpsc::UnboundedSender<ToastExpired>) -> Self {
        Self {
            current: None,
            timer: None,
            lifetime,
            expired_tx,
        }
    }

    /// Create a center together with the receiver its timers report to
    pub fn channel(lifetime: Duration) -> (Self, mpsc::UnboundedReceiver<ToastExpired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(lifetime, tx), rx)
    }

    /// Show a toast, replacing any current one and restarting the expiry timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        // Cancel first so a stale timer can never race the new toast.
        self.timer = None;

        let toast = Toast::new(kind, message);
        let id = toast.id;
        let deadline = Instant::now() + self.lifetime;
        let tx = self.expired_tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the surface was torn down
            let _ = tx.send(ToastExpired { id });
        });

        tracing::debug!(
            toast_id = %id,
            ?kind,
            created_at = %toast.created_at,
            "showing toast"
        );
        self.timer = Some(ExpiryTimer {
            toast_id: id,
            deadline,
            handle,
        });
        self.current = Some(toast);
        id
    }

    /// Handle a timer firing. Returns true if the live toast was cleared.
    pub fn expire(&mut self, event: ToastExpired) -> bool {
        let is_live = self
            .current
            .as_ref()
            .is_some_and(|toast| toast.id == event.id);

        if !is_live {
            tracing::debug!(toast_id = %event.id, "ignoring expiry for replaced toast");
            return false;
        }

        if let Some(timer) = self.timer.take() {
            tracing::debug!(
                toast_id = %timer.toast_id,
                late_by = ?Instant::now().saturating_duration_since(timer.deadline),
                "toast expired"
            );
        }
        self.current = None;
        true
    }

    /// Cancel any pending timer and clear the toast
    pub fn teardown(&mut self) {
        self.timer = None;
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Deadline of the live toast, if one is showing
    #[cfg(test)]
    pub fn expires_at(&self) -> Option<Instant> {
        self.timer
            .as_ref()
            .filter(|timer| {
                self.current
                    .as_ref()
                    .is_some_and(|toast| toast.id == timer.toast_id)
            })
            .map(|timer| timer.deadline)
    }

    #[cfg(test)]
    pub fn has_pending_timer(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|timer| !timer.handle.is_finished())
    }
}
