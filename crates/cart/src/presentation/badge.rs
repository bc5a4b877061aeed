//! Cart icon badge.

use std::sync::{Mutex, PoisonError};

use crate::event::{CartEvent, CartObserver};

/// The numeric indicator on a cart icon.
///
/// Shows `"0"` until the first [`CartEvent::Changed`] arrives.
#[derive(Debug)]
pub struct CartBadge {
    text: Mutex<String>,
}

impl Default for CartBadge {
    fn default() -> Self {
        Self {
            text: Mutex::new("0".to_string()),
        }
    }
}

impl CartBadge {
    /// Create a badge showing zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently displayed.
    #[must_use]
    pub fn text(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartObserver for CartBadge {
    fn on_event(&self, event: &CartEvent) {
        if let CartEvent::Changed { item_count } = event {
            *self.text.lock().unwrap_or_else(PoisonError::into_inner) = item_count.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_starts_at_zero() {
        assert_eq!(CartBadge::new().text(), "0");
    }

    #[test]
    fn test_badge_tracks_latest_count() {
        let badge = CartBadge::new();
        badge.on_event(&CartEvent::Changed { item_count: 3 });
        badge.on_event(&CartEvent::Changed { item_count: 12 });
        assert_eq!(badge.text(), "12");
    }

    #[test]
    fn test_badge_ignores_notifications() {
        let badge = CartBadge::new();
        badge.on_event(&CartEvent::Changed { item_count: 1 });
        badge.on_event(&CartEvent::Notification {
            message: "Shirt added to cart!".to_string(),
        });
        assert_eq!(badge.text(), "1");
    }
}
