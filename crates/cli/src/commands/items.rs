//! Commands that change the cart.
//!
//! # Usage
//!
//! ```bash
//! # Add two medium shirts
//! eshopper add 1 "Shirt" 20.00 -q 2 --size M
//!
//! # Set the first row's quantity to 3 (0 removes it)
//! eshopper update 1 3
//!
//! # Remove the second row
//! eshopper remove 2
//!
//! # Delete the stored cart
//! eshopper clear
//! ```

use std::io::Write;

use eshopper_cart::{AddOutcome, CartStorage, CartStore, Product, QuantityUpdate};

use super::{CommandError, to_index};

/// Options for the `add` command.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub product: Product,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Add a product variant to the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output fails.
pub fn add<S: CartStorage>(
    store: &CartStore<S>,
    request: &AddRequest,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let outcome = store.add_item(
        &request.product,
        request.quantity,
        request.size.as_deref(),
        request.color.as_deref(),
    )?;

    match outcome {
        AddOutcome::Merged { index, quantity } => writeln!(
            out,
            "Updated item {}: {} now x{quantity}",
            index + 1,
            request.product.name
        )?,
        AddOutcome::Appended { index } => {
            writeln!(out, "Added item {}: {}", index + 1, request.product.name)?;
        }
    }
    Ok(())
}

/// Remove the row at a 1-based position.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if there is no such row.
pub fn remove<S: CartStorage>(
    store: &CartStore<S>,
    position: usize,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let removed = store
        .remove_item(to_index(position)?)?
        .ok_or(CommandError::NotFound(position))?;
    writeln!(out, "Removed {}", removed.name)?;
    Ok(())
}

/// Set the quantity of the row at a 1-based position.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if there is no such row.
pub fn update<S: CartStorage>(
    store: &CartStore<S>,
    position: usize,
    quantity: u32,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match store.update_quantity(to_index(position)?, quantity)? {
        QuantityUpdate::Updated(item) => writeln!(out, "{} now x{}", item.name, item.quantity)?,
        QuantityUpdate::Removed(item) => writeln!(out, "Removed {}", item.name)?,
        QuantityUpdate::NotFound => return Err(CommandError::NotFound(position)),
    }
    Ok(())
}

/// Delete the stored cart.
///
/// # Errors
///
/// Returns an error if the stored cart cannot be removed.
pub fn clear<S: CartStorage>(
    store: &CartStore<S>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    store.clear_cart()?;
    writeln!(out, "Cart cleared")?;
    Ok(())
}
