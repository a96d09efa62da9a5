//! Core types for AppBay.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
pub mod price;

pub use catalog::CatalogItem;
pub use id::*;
pub use price::{CurrencyCode, Price};
