//! The cart store.
//!
//! Every operation is a complete read-modify-write against storage: the cart
//! is loaded fresh, changed, written back, and observers are told. Nothing is
//! cached between calls, so two stores sharing a backend see each other's
//! writes.

use std::fmt;
use std::sync::Arc;

use eshopper_core::Price;
use tracing::{debug, info, instrument, warn};

use crate::config::CartConfig;
use crate::error::Result;
use crate::event::{CartEvent, CartObserver};
use crate::item::{Cart, LineItem, Product};
use crate::storage::CartStorage;
use crate::summary::{CustomerInfo, OrderSummary};

/// What [`CartStore::add_item`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// An existing row had the same identity key; its quantity grew.
    Merged {
        /// Position of the row.
        index: usize,
        /// The row's new quantity.
        quantity: u32,
    },
    /// A new row was appended.
    Appended {
        /// Position of the new row.
        index: usize,
    },
}

/// What [`CartStore::update_quantity`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The row now has the requested quantity.
    Updated(LineItem),
    /// A zero quantity removed the row.
    Removed(LineItem),
    /// No row at that index; nothing changed.
    NotFound,
}

/// A shopping cart persisted in a [`CartStorage`].
pub struct CartStore<S> {
    storage: S,
    config: CartConfig,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store with default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, CartConfig::default())
    }

    /// Create a store with the given configuration.
    pub const fn with_config(storage: S, config: CartConfig) -> Self {
        Self {
            storage,
            config,
            observers: Vec::new(),
        }
    }

    /// Register an observer for cart events.
    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the cart.
    ///
    /// A missing, unreadable or corrupt stored value yields an empty cart.
    /// Rows that do not parse as line items (a negative quantity, say) are
    /// skipped and the rest are kept.
    #[must_use]
    pub fn get_cart(&self) -> Cart {
        let key = &self.config.storage_key;
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read cart, using empty cart");
                return Cart::new();
            }
        };

        let rows = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(key = %key, error = %e, "Stored cart is corrupt, using empty cart");
                return Cart::new();
            }
        };

        let cart: Cart = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value::<LineItem>(row) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key = %key, index, error = %e, "Skipping unreadable cart row");
                    None
                }
            })
            .collect();
        debug!(key = %key, rows = cart.len(), "Cart loaded");
        cart
    }

    /// Persist `cart`, replacing any previous value, then refresh badges.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be encoded or written.
    pub fn save_cart(&self, cart: &[LineItem]) -> Result<()> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set(&self.config.storage_key, &raw)?;
        debug!(key = %self.config.storage_key, rows = cart.len(), "Cart saved");

        self.emit(&CartEvent::Changed {
            item_count: count_items(cart),
        });
        Ok(())
    }

    /// Add one unit of `product` with no size or color.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be written.
    pub fn add_product(&self, product: &Product) -> Result<AddOutcome> {
        self.add_item(product, 1, None, None)
    }

    /// Add `quantity` units of a product variant.
    ///
    /// A row with the same (`id`, `size`, `color`) has its quantity increased;
    /// otherwise a new row is appended. A confirmation notification naming the
    /// product is emitted either way. The quantity is not validated.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be written.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(
        &self,
        product: &Product,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<AddOutcome> {
        let mut cart = self.get_cart();

        let existing = cart
            .iter_mut()
            .enumerate()
            .find(|(_, item)| item.matches(&product.id, size, color));

        let outcome = if let Some((index, item)) = existing {
            item.quantity = item.quantity.saturating_add(quantity);
            AddOutcome::Merged {
                index,
                quantity: item.quantity,
            }
        } else {
            cart.push(LineItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                original_price: product.original_price.filter(|p| !p.amount().is_zero()),
                image: product
                    .image
                    .clone()
                    .filter(|image| !image.is_empty())
                    .unwrap_or_else(|| self.config.placeholder_image.clone()),
                quantity,
                size: size.map(str::to_string),
                color: color.map(str::to_string),
            });
            AddOutcome::Appended {
                index: cart.len() - 1,
            }
        };

        self.save_cart(&cart)?;
        info!(?outcome, quantity, "Item added to cart");

        self.notify(format!("{} added to cart!", product.name));
        Ok(outcome)
    }

    /// Remove the row at `index`.
    ///
    /// Returns the removed row, or `None` (and changes nothing) if the index
    /// is out of range.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be written.
    #[instrument(skip(self))]
    pub fn remove_item(&self, index: usize) -> Result<Option<LineItem>> {
        let mut cart = self.get_cart();
        if index >= cart.len() {
            warn!(len = cart.len(), "No cart row at index, nothing removed");
            return Ok(None);
        }

        let removed = cart.remove(index);
        self.save_cart(&cart)?;
        info!(product_id = %removed.id, "Item removed from cart");
        Ok(Some(removed))
    }

    /// Set the quantity of the row at `index`; zero removes the row.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be written.
    #[instrument(skip(self))]
    pub fn update_quantity(&self, index: usize, quantity: u32) -> Result<QuantityUpdate> {
        if quantity == 0 {
            return Ok(self
                .remove_item(index)?
                .map_or(QuantityUpdate::NotFound, QuantityUpdate::Removed));
        }

        let mut cart = self.get_cart();
        let Some(item) = cart.get_mut(index) else {
            warn!(len = cart.len(), "No cart row at index, quantity unchanged");
            return Ok(QuantityUpdate::NotFound);
        };
        item.quantity = quantity;
        let updated = item.clone();

        self.save_cart(&cart)?;
        info!(product_id = %updated.id, "Cart quantity updated");
        Ok(QuantityUpdate::Updated(updated))
    }

    /// Sum of `price * quantity` over all rows.
    #[must_use]
    pub fn total(&self) -> Price {
        self.get_cart().iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all rows.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        count_items(&self.get_cart())
    }

    /// Delete the stored cart entirely and refresh badges.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the stored cart cannot be removed.
    pub fn clear_cart(&self) -> Result<()> {
        self.storage.remove(&self.config.storage_key)?;
        info!(key = %self.config.storage_key, "Cart cleared");
        self.refresh_badge();
        Ok(())
    }

    /// Tell badge observers the current item count.
    pub fn refresh_badge(&self) {
        self.emit(&CartEvent::Changed {
            item_count: self.item_count(),
        });
    }

    /// Show a transient message.
    pub fn notify(&self, message: impl Into<String>) {
        self.emit(&CartEvent::Notification {
            message: message.into(),
        });
    }

    /// Render a plain-text receipt of the current cart.
    ///
    /// Prices use the configured currency symbol, `$` if none is set.
    #[must_use]
    pub fn generate_order_summary(&self, customer: &CustomerInfo) -> String {
        let cart = self.get_cart();
        OrderSummary::new(&cart, customer, self.config.currency_symbol()).to_string()
    }

    fn emit(&self, event: &CartEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

fn count_items(cart: &[LineItem]) -> u64 {
    cart.iter().map(|item| u64::from(item.quantity)).sum()
}
