//! Core types for EShopper.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::ProductId;
pub use price::{CurrencyCode, CurrencyError, DEFAULT_CURRENCY_SYMBOL, Price, format_price};
