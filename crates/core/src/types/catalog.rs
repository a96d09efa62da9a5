//! Catalog item record.

use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::price::Price;

/// An immutable product/app record from the static catalog.
///
/// Catalog items are supplied at startup and never mutated by the engine.
/// The cart and the installation registry copy the fields they need at the
/// time of the operation, so later catalog edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique, stable identifier.
    pub id: ItemId,
    /// Display name.
    pub title: String,
    /// Vendor or publisher name.
    pub vendor: String,
    /// Free-form category label (e.g., "Defense", "Productivity").
    pub category: String,
    /// Unit price.
    pub price: Price,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Lifetime download count.
    pub downloads: u64,
    /// Image URL.
    pub image: String,
    /// Short description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::CurrencyCode;
    use rust_decimal::Decimal;

    fn sample() -> CatalogItem {
        CatalogItem {
            id: ItemId::new(1),
            title: "Quantum Shield".to_string(),
            vendor: "Hero Labs".to_string(),
            category: "Defense".to_string(),
            price: Price::new(Decimal::from(1250), CurrencyCode::USD),
            rating: 4.8,
            downloads: 125_000,
            image: "https://example.com/quantum-shield.png".to_string(),
            description: "Generates a temporary energy field.".to_string(),
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let item = sample();
        let json = serde_json::to_string(&item).expect("serialize");
        let back: CatalogItem = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, item);
    }

    #[test]
    fn test_price_serializes_as_string() {
        // serde-with-str keeps decimal amounts exact in JSON payloads
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert!(json.contains("\"amount\":\"1250\""));
    }
}
