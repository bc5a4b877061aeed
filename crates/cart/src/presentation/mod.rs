//! Presentation models driven by cart events.
//!
//! - [`CartBadge`] - the item count shown on the cart icon
//! - [`NotificationCenter`] - transient "added to cart" toasts
//!
//! Both are plain observers; a UI binding reads their state and renders it.

mod badge;
mod notification;

pub use badge::CartBadge;
pub use notification::{ANIMATION_MS, NotificationCenter, Toast, ToastPhase, animation};
