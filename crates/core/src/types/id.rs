//! Product identifiers.
//!
//! Storefront pages hand the cart whatever identifier their catalog uses,
//! which is sometimes a number and sometimes a slug. [`ProductId`] keeps both
//! shapes and serializes them back exactly as they came in.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque product identifier.
///
/// Numeric and textual identifiers never compare equal, so `1` and `"1"` are
/// different products.
///
/// # Example
///
/// ```rust
/// # use eshopper_core::ProductId;
/// let numeric: ProductId = "42".parse().unwrap();
/// let slug: ProductId = "blue-shirt".parse().unwrap();
///
/// assert_eq!(numeric, ProductId::Numeric(42));
/// assert_eq!(slug, ProductId::from("blue-shirt"));
/// assert_ne!(ProductId::Numeric(1), ProductId::from("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// A numeric catalog identifier.
    Numeric(i64),
    /// A textual identifier such as a SKU or handle.
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for ProductId {
    type Err = core::convert::Infallible;

    /// Parses integers as [`ProductId::Numeric`], anything else as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Numeric))
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId::Numeric(7));
        assert_eq!("-3".parse::<ProductId>().unwrap(), ProductId::Numeric(-3));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            "sku-7".parse::<ProductId>().unwrap(),
            ProductId::Text("sku-7".to_string())
        );
        assert_eq!(
            "7.5".parse::<ProductId>().unwrap(),
            ProductId::Text("7.5".to_string())
        );
    }

    #[test]
    fn test_numeric_and_text_are_distinct() {
        assert_ne!(ProductId::Numeric(1), ProductId::from("1"));
    }

    #[test]
    fn test_json_shape_is_preserved() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "1", "shirt"]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                ProductId::Numeric(1),
                ProductId::Text("1".to_string()),
                ProductId::Text("shirt".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1,"1","shirt"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::Numeric(12).to_string(), "12");
        assert_eq!(ProductId::from("hat").to_string(), "hat");
    }
}
