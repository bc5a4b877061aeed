//! Cart line items and the products they are created from.

use eshopper_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A cart: line items in insertion order.
pub type Cart = Vec<LineItem>;

/// A product as described by the page adding it to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Current unit price, possibly discounted.
    pub price: Price,
    /// Pre-discount price, if the product is on sale.
    #[serde(default)]
    pub original_price: Option<Price>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with no sale price and no image.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: None,
        }
    }

    /// Set the pre-discount price.
    #[must_use]
    pub fn with_original_price(mut self, original_price: Price) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the display image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// One row of the cart: a product variant and how many of it.
///
/// Serialized with camelCase keys; absent options are written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub original_price: Option<Price>,
    pub image: String,
    pub quantity: u32,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl LineItem {
    /// Whether this row has the identity key (`id`, `size`, `color`).
    ///
    /// Absent variants only match absent variants.
    #[must_use]
    pub fn matches(&self, id: &ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        self.id == *id && self.size.as_deref() == size && self.color.as_deref() == color
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// Whether the row is discounted below its original price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .is_some_and(|original| original > self.price)
    }
}
