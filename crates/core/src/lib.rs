//! EShopper Core - Shared types library.
//!
//! This crate provides common types used across all EShopper components:
//! - `cart` - Cart store, storage backends and presentation observers
//! - `cli` - Command-line front end over a file-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, decimal prices and currency formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
