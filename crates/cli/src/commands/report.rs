//! Read-only commands: listing, totals and order summaries.
//!
//! # Usage
//!
//! ```bash
//! eshopper list
//! eshopper total
//! eshopper count
//! eshopper summary --first-name Ada --last-name Lovelace --email ada@example.com
//! eshopper format-price 9.999 --currency €
//! ```

use std::io::Write;

use eshopper_cart::{CartStorage, CartStore, CustomerInfo, format_price};
use eshopper_core::Price;

use super::CommandError;

/// Print one line per cart row.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn list<S: CartStorage>(store: &CartStore<S>, out: &mut impl Write) -> Result<(), CommandError> {
    let cart = store.get_cart();
    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    let symbol = store.config().currency_symbol();
    for (position, item) in cart.iter().enumerate() {
        write!(out, "{}. {} [{}]", position + 1, item.name, item.id)?;
        if let Some(size) = &item.size {
            write!(out, " (Size: {size})")?;
        }
        if let Some(color) = &item.color {
            write!(out, " (Color: {color})")?;
        }
        write!(
            out,
            " x{} @ {} = {}",
            item.quantity,
            item.price.display_with(symbol),
            item.line_total().display_with(symbol)
        )?;
        if let Some(original) = item.original_price.filter(|_| item.is_on_sale()) {
            write!(out, " (was {})", original.display_with(symbol))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the cart total.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn total<S: CartStorage>(store: &CartStore<S>, out: &mut impl Write) -> Result<(), CommandError> {
    let symbol = store.config().currency_symbol();
    writeln!(out, "{}", store.total().display_with(symbol))?;
    Ok(())
}

/// Print the number of items (the badge value).
///
/// # Errors
///
/// Returns an error if output fails.
pub fn count<S: CartStorage>(store: &CartStore<S>, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "{}", store.item_count())?;
    Ok(())
}

/// Print a plain-text order summary for `customer`.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn summary<S: CartStorage>(
    store: &CartStore<S>,
    customer: &CustomerInfo,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    write!(out, "{}", store.generate_order_summary(customer))?;
    Ok(())
}

/// Print `price` formatted with `currency`.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn format(price: Price, currency: &str, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "{}", format_price(price.amount(), currency))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use eshopper_cart::{CartConfig, MemoryStorage, Product};

    use super::*;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CommandError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn stocked() -> CartStore<MemoryStorage> {
        let store = CartStore::new(MemoryStorage::new());
        let shirt = Product::new(1_i64, "Shirt", Price::from_cents(2000))
            .with_original_price(Price::from_cents(2500));
        let hat = Product::new("hat", "Hat", Price::from_cents(1250));
        store.add_item(&shirt, 2, Some("M"), Some("Blue")).unwrap();
        store.add_item(&hat, 1, None, None).unwrap();
        store
    }

    #[test]
    fn test_list_empty() {
        let store = CartStore::new(MemoryStorage::new());
        assert_eq!(run(|out| list(&store, out)), "Cart is empty\n");
    }

    #[test]
    fn test_list_rows() {
        let store = stocked();
        assert_eq!(
            run(|out| list(&store, out)),
            "1. Shirt [1] (Size: M) (Color: Blue) x2 @ $20.00 = $40.00 (was $25.00)\n\
             2. Hat [hat] x1 @ $12.50 = $12.50\n"
        );
    }

    #[test]
    fn test_total_and_count() {
        let store = stocked();
        assert_eq!(run(|out| total(&store, out)), "$52.50\n");
        assert_eq!(run(|out| count(&store, out)), "3\n");
    }

    #[test]
    fn test_total_uses_configured_currency() {
        let config = CartConfig {
            currency_symbol: Some("€".to_string()),
            ..CartConfig::default()
        };
        let store = CartStore::with_config(MemoryStorage::new(), config);
        assert_eq!(run(|out| total(&store, out)), "€0.00\n");
    }

    #[test]
    fn test_summary_is_written_verbatim() {
        let store = stocked();
        let customer = CustomerInfo {
            first_name: Some("Ada".to_string()),
            ..CustomerInfo::default()
        };
        let text = run(|out| summary(&store, &customer, out));
        assert_eq!(text, store.generate_order_summary(&customer));
        assert!(text.contains("Customer: Ada \n"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(
            run(|out| format("9.5".parse().unwrap(), "$", out)),
            "$9.50\n"
        );
        assert_eq!(
            run(|out| format("9.999".parse().unwrap(), "$", out)),
            "$10.00\n"
        );
    }
}
