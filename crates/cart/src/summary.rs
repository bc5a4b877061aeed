//! Plain-text order summaries for checkout emails.

use core::fmt;

use eshopper_core::{Price, format_price};
use serde::{Deserialize, Serialize};

use crate::item::LineItem;

const RULE: &str = "=============";

/// Customer details collected at checkout.
///
/// Nothing is validated; missing fields render as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// A rendered receipt: customer block, one entry per item, then totals.
///
/// Render it with `to_string()`. Shipping is always free.
#[derive(Debug, Clone, Copy)]
pub struct OrderSummary<'a> {
    pub items: &'a [LineItem],
    pub customer: &'a CustomerInfo,
    pub currency: &'a str,
}

impl<'a> OrderSummary<'a> {
    #[must_use]
    pub const fn new(items: &'a [LineItem], customer: &'a CustomerInfo, currency: &'a str) -> Self {
        Self {
            items,
            customer,
            currency,
        }
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn price(&self, price: Price) -> String {
        format_price(price.amount(), self.currency)
    }
}

fn field(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.customer;

        writeln!(f)?;
        writeln!(f, "ORDER DETAILS")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Customer: {} {}",
            field(c.first_name.as_ref()),
            field(c.last_name.as_ref())
        )?;
        writeln!(f, "Email: {}", field(c.email.as_ref()))?;
        writeln!(f, "Phone: {}", field(c.phone.as_ref()))?;
        writeln!(
            f,
            "Address: {}, {}, {} {}",
            field(c.address.as_ref()),
            field(c.city.as_ref()),
            field(c.country.as_ref()),
            field(c.zip.as_ref())
        )?;
        writeln!(f)?;
        writeln!(f, "ITEMS ORDERED")?;
        writeln!(f, "{RULE}")?;

        for (position, item) in self.items.iter().enumerate() {
            write!(f, "{}. {}", position + 1, item.name)?;
            if let Some(size) = item.size.as_deref().filter(|s| !s.is_empty()) {
                write!(f, " (Size: {size})")?;
            }
            if let Some(color) = item.color.as_deref().filter(|s| !s.is_empty()) {
                write!(f, " (Color: {color})")?;
            }
            writeln!(f)?;
            writeln!(
                f,
                "   Qty: {} x {} = {}",
                item.quantity,
                self.price(item.price),
                self.price(item.line_total())
            )?;
        }

        let subtotal = self.price(self.subtotal());
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "SUBTOTAL: {subtotal}")?;
        writeln!(f, "SHIPPING: Free")?;
        writeln!(f, "TOTAL: {subtotal}")
    }
}

#[cfg(test)]
mod tests {
    use eshopper_core::ProductId;

    use super::*;

    fn item(name: &str, cents: i64, quantity: u32, size: Option<&str>, color: Option<&str>) -> LineItem {
        LineItem {
            id: ProductId::Text(name.to_lowercase()),
            name: name.to_string(),
            price: Price::from_cents(cents),
            original_price: None,
            image: "img/product-1.jpg".to_string(),
            quantity,
            size: size.map(String::from),
            color: color.map(String::from),
        }
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            address: Some("12 Analytical St".to_string()),
            city: Some("London".to_string()),
            country: Some("UK".to_string()),
            zip: Some("N1".to_string()),
        }
    }

    #[test]
    fn test_full_summary_layout() {
        let items = vec![
            item("Shirt", 2000, 2, Some("M"), Some("Blue")),
            item("Hat", 1250, 1, None, None),
        ];
        let customer = customer();

        let text = OrderSummary::new(&items, &customer, "$").to_string();

        let expected = "
ORDER DETAILS
=============
Customer: Ada Lovelace
Email: ada@example.com
Phone: 555-0100
Address: 12 Analytical St, London, UK N1

ITEMS ORDERED
=============
1. Shirt (Size: M) (Color: Blue)
   Qty: 2 x $20.00 = $40.00
2. Hat
   Qty: 1 x $12.50 = $12.50

=============
SUBTOTAL: $52.50
SHIPPING: Free
TOTAL: $52.50
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_missing_customer_fields_render_empty() {
        let text = OrderSummary::new(&[], &CustomerInfo::default(), "$").to_string();
        assert!(text.contains("Customer:  \n"));
        assert!(text.contains("Address: , ,  \n"));
        assert!(text.contains("TOTAL: $0.00\n"));
    }

    #[test]
    fn test_currency_symbol_is_applied() {
        let items = vec![item("Scarf", 999, 3, None, Some("Red"))];
        let text = OrderSummary::new(&items, &CustomerInfo::default(), "€").to_string();
        assert!(text.contains("1. Scarf (Color: Red)\n"));
        assert!(text.contains("   Qty: 3 x €9.99 = €29.97\n"));
        assert!(text.contains("SUBTOTAL: €29.97\n"));
    }

    #[test]
    fn test_empty_variant_is_not_annotated() {
        let items = vec![item("Belt", 1500, 1, Some(""), None)];
        let text = OrderSummary::new(&items, &CustomerInfo::default(), "$").to_string();
        assert!(text.contains("1. Belt\n"));
    }

    #[test]
    fn test_customer_info_reads_camel_case() {
        let info: CustomerInfo =
            serde_json::from_str(r#"{"firstName":"Ada","zip":"N1"}"#).unwrap_or_default();
        assert_eq!(info.first_name.as_deref(), Some("Ada"));
        assert_eq!(info.zip.as_deref(), Some("N1"));
        assert_eq!(info.email, None);
    }
}
