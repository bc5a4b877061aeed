//! Integration tests for EShopper.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p eshopper-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `file_storage` - Carts persisted to disk, including data written by the
//!   storefront scripts
//! - `presentation` - Badge and toast observers driven by a real store
//!
//! This library holds the shared fixtures.

use std::path::Path;
use std::sync::Arc;

use eshopper_cart::{CartBadge, CartStore, FileStorage, NotificationCenter, Product};
use eshopper_core::Price;

/// A file-backed store plus the observers a storefront page would attach.
pub struct TestCart {
    pub store: CartStore<FileStorage>,
    pub badge: Arc<CartBadge>,
    pub notifications: Arc<NotificationCenter>,
}

impl TestCart {
    /// Open the cart stored under `dir` with default configuration.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        let mut store = CartStore::new(FileStorage::new(dir));
        let badge = Arc::new(CartBadge::new());
        let notifications = Arc::new(NotificationCenter::new(
            store.config().notification_duration,
        ));
        store.subscribe(badge.clone());
        store.subscribe(notifications.clone());
        Self {
            store,
            badge,
            notifications,
        }
    }
}

/// The shirt used throughout the examples: id 1, $20.00.
#[must_use]
pub fn shirt() -> Product {
    Product::new(1_i64, "Shirt", Price::from_cents(2000))
}

/// A discounted jacket with its own image.
#[must_use]
pub fn jacket() -> Product {
    Product::new("jacket-01", "Jacket", Price::from_cents(7999))
        .with_original_price(Price::from_cents(9999))
        .with_image("img/jacket.jpg")
}
