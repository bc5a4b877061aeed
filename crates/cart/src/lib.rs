//! EShopper Cart - persistent shopping cart state.
//!
//! The cart is an ordered list of line items stored as one JSON document
//! under a single key (`eshopper_cart` by default). [`CartStore`] reads it
//! fresh on every call, applies a change, writes it back and emits a
//! [`CartEvent`]; presentation concerns (badge count, toasts) are observers.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use eshopper_cart::{CartBadge, CartStore, MemoryStorage, Product};
//! use eshopper_core::Price;
//!
//! let mut store = CartStore::new(MemoryStorage::new());
//! let badge = Arc::new(CartBadge::new());
//! store.subscribe(badge.clone());
//!
//! let shirt = Product::new(1_i64, "Shirt", Price::from_cents(2000));
//! store.add_item(&shirt, 2, Some("M"), None)?;
//! store.add_item(&shirt, 3, Some("M"), None)?;
//!
//! assert_eq!(store.get_cart().len(), 1);
//! assert_eq!(store.total(), Price::from_cents(10_000));
//! assert_eq!(badge.text(), "5");
//! # Ok::<(), eshopper_cart::CartError>(())
//! ```
//!
//! # Modules
//!
//! - [`store`] - The cart store and its operations
//! - [`storage`] - Storage backends (memory, files)
//! - [`item`] - Line items and products
//! - [`event`] - Cart events and the observer trait
//! - [`presentation`] - Badge and toast observers
//! - [`summary`] - Plain-text order summaries
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod event;
pub mod item;
pub mod presentation;
pub mod storage;
pub mod store;
pub mod summary;

pub use config::{CartConfig, ConfigError};
pub use error::{CartError, Result};
pub use eshopper_core::format_price;
pub use event::{CartEvent, CartObserver};
pub use item::{Cart, LineItem, Product};
pub use presentation::{CartBadge, NotificationCenter, Toast, ToastPhase};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{AddOutcome, CartStore, QuantityUpdate};
pub use summary::{CustomerInfo, OrderSummary};
