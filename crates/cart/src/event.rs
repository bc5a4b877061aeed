//! Cart events and the observers that react to them.
//!
//! The store never touches a UI directly. After each mutation it emits a
//! [`CartEvent`] to every subscribed [`CartObserver`]; badges, toasts and
//! terminal renderers live on the observer side.

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The persisted cart changed (or a refresh was requested).
    Changed {
        /// Total quantity across all rows.
        item_count: u64,
    },
    /// A transient confirmation message.
    Notification {
        /// Text to display.
        message: String,
    },
}

/// A subscriber to cart events.
///
/// Observers are shared behind `Arc` and receive events by reference; they use
/// interior mutability for any state they keep.
pub trait CartObserver: Send + Sync {
    /// Handle one event. Must not fail.
    fn on_event(&self, event: &CartEvent);
}

impl<F> CartObserver for F
where
    F: Fn(&CartEvent) + Send + Sync,
{
    fn on_event(&self, event: &CartEvent) {
        self(event);
    }
}
