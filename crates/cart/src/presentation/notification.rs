//! Transient toast notifications.
//!
//! A toast slides in, stays for the configured duration, slides out, and is
//! then gone. There is no queue: every notification gets its own toast and
//! simultaneous ones stack. Expiry is computed from timestamps when the
//! toasts are read, so no timer is involved.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

use crate::event::{CartEvent, CartObserver};

/// Length of the slide-in and slide-out animations, in milliseconds.
pub const ANIMATION_MS: i64 = 300;

/// Length of the slide-in and slide-out animations.
#[must_use]
pub fn animation() -> TimeDelta {
    TimeDelta::milliseconds(ANIMATION_MS)
}

/// Where a toast is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding in.
    Entering,
    /// Fully shown.
    Visible,
    /// Sliding out after the display duration.
    Leaving,
    /// Removed.
    Expired,
}

/// One notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Time on screen before the exit animation starts.
    ///
    /// A duration shorter than the entry animation is treated as the
    /// animation length, so every toast fully enters before it leaves.
    pub duration: TimeDelta,
}

impl Toast {
    /// The toast's phase at `now`.
    #[must_use]
    pub fn phase(&self, now: DateTime<Utc>) -> ToastPhase {
        let elapsed = now - self.created_at;
        let shown = self.shown_for();
        if elapsed < animation() {
            ToastPhase::Entering
        } else if elapsed < shown {
            ToastPhase::Visible
        } else if elapsed < shown + animation() {
            ToastPhase::Leaving
        } else {
            ToastPhase::Expired
        }
    }

    /// When the toast is removed.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.shown_for() + animation()
    }

    fn shown_for(&self) -> TimeDelta {
        self.duration.max(animation())
    }
}

/// Holds the toasts currently on screen.
#[derive(Debug)]
pub struct NotificationCenter {
    duration: TimeDelta,
    toasts: Mutex<Vec<Toast>>,
}

impl NotificationCenter {
    /// Create a center whose toasts stay visible for `duration`.
    #[must_use]
    pub const fn new(duration: TimeDelta) -> Self {
        Self {
            duration,
            toasts: Mutex::new(Vec::new()),
        }
    }

    /// Show `message` as if it arrived at `now`.
    pub fn push_at(&self, message: impl Into<String>, now: DateTime<Utc>) {
        let toast = Toast {
            message: message.into(),
            created_at: now,
            duration: self.duration,
        };
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }

    /// Drop expired toasts and return the remaining ones, oldest first.
    #[must_use]
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.retain(|toast| toast.phase(now) != ToastPhase::Expired);
        toasts.clone()
    }
}

impl CartObserver for NotificationCenter {
    fn on_event(&self, event: &CartEvent) {
        if let CartEvent::Notification { message } = event {
            self.push_at(message.clone(), Utc::now());
        }
    }
}
