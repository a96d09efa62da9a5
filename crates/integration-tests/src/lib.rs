//! Integration tests for AppBay.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p appbay-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full shopping-session scenarios against the cart
//! - `installation_registry` - File-backed registry lifecycles
//! - `catalog_search` - Catalog loading, search, and filtering
//!
//! The fixtures below build a small catalog in the shape of the bundled
//! demo data so scenario tests do not each invent their own items.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use appbay_core::{CatalogItem, CurrencyCode, ItemId, Price};
use appbay_storefront::Catalog;

/// Build a catalog item with the given id, price, and download count.
#[must_use]
pub fn sample_item(id: i32, title: &str, category: &str, price: i64, downloads: u64) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id),
        title: title.to_string(),
        vendor: "Hero Labs".to_string(),
        category: category.to_string(),
        price: Price::new(Decimal::from(price), CurrencyCode::USD),
        rating: 4.5,
        downloads,
        image: format!("https://example.com/{id}.png"),
        description: format!("{title} description"),
    }
}

/// A five-item catalog covering several categories and price points.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        sample_item(1, "Quantum Shield", "Defense", 1250, 125_000),
        sample_item(2, "Sonic Gauntlets", "Utility", 980, 98_000),
        sample_item(3, "Invisibility Cloak V2", "Stealth", 3500, 210_000),
        sample_item(4, "Grappling Hook 3000", "Mobility", 450, 64_000),
        sample_item(5, "FocusFlow", "Productivity", 0, 1_520_000),
    ])
}
