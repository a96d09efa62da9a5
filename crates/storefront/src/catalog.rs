//! Static catalog with lookup, search, filtering, and sorting.
//!
//! The catalog is read-only, ordered input supplied at startup - from a
//! JSON file or directly as a vector. The engine never mutates or
//! persists it.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use appbay_core::{CatalogItem, ItemId};

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(String),
    /// The catalog file is not valid JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// Sort direction for download-count orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Low to high.
    Ascending,
    /// High to low.
    Descending,
}

/// The static item collection, with an id index for O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered item list.
    ///
    /// Duplicate identifiers are dropped with a warning; the first
    /// occurrence wins.
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut deduped: Vec<CatalogItem> = Vec::with_capacity(items.len());
        let mut by_id = HashMap::with_capacity(items.len());
        for item in items {
            match by_id.entry(item.id) {
                std::collections::hash_map::Entry::Vacant(slot) => {
                    slot.insert(deduped.len());
                    deduped.push(item);
                }
                std::collections::hash_map::Entry::Occupied(_) => {
                    tracing::warn!(id = %item.id, title = %item.title, "Duplicate catalog id; dropping");
                }
            }
        }
        Self {
            items: deduped,
            by_id,
        }
    }

    /// Load a catalog from a JSON file containing an array of items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    /// Unlike the installation registry's payload, the catalog is
    /// required input, so a broken file is an error rather than an empty
    /// collection.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the payload is not a valid item
    /// array.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        tracing::debug!(count = items.len(), "Loaded catalog");
        Ok(Self::new(items))
    }

    /// Look up an item by id. O(1).
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.by_id.get(&id).and_then(|&i| self.items.get(i))
    }

    /// All items, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }

    /// Items whose title contains `query`, case-insensitively.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Items in the given category (exact match).
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// All items sorted by download count.
    #[must_use]
    pub fn sorted_by_downloads(&self, order: SortOrder) -> Vec<&CatalogItem> {
        let mut sorted: Vec<&CatalogItem> = self.items.iter().collect();
        match order {
            SortOrder::Ascending => sorted.sort_by_key(|i| i.downloads),
            SortOrder::Descending => sorted.sort_by_key(|i| std::cmp::Reverse(i.downloads)),
        }
        sorted
    }

    /// The leading `n` items in catalog order (showcase rail).
    #[must_use]
    pub fn top(&self, n: usize) -> &[CatalogItem] {
        self.items.get(..n.min(self.items.len())).unwrap_or(&[])
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use appbay_core::{CurrencyCode, Price};
    use rust_decimal::Decimal;

    fn item(id: i32, title: &str, category: &str, downloads: u64) -> CatalogItem {
        CatalogItem {
            id: ItemId::new(id),
            title: title.to_string(),
            vendor: "Hero Labs".to_string(),
            category: category.to_string(),
            price: Price::new(Decimal::from(10), CurrencyCode::USD),
            rating: 4.2,
            downloads,
            image: String::new(),
            description: String::new(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            item(1, "Quantum Shield", "Defense", 5_000),
            item(2, "Sonic Gauntlets", "Utility", 9_000),
            item(3, "Invisibility Cloak V2", "Stealth", 2_000),
            item(4, "Grappling Hook 3000", "Mobility", 7_000),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get(ItemId::new(2)).unwrap().title, "Sonic Gauntlets");
        assert!(catalog.get(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let catalog = Catalog::new(vec![
            item(1, "First", "A", 1),
            item(1, "Second", "B", 2),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ItemId::new(1)).unwrap().title, "First");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample();
        let hits = catalog.search("cloak");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ItemId::new(3));
        assert!(catalog.search("zzz").is_empty());
        assert_eq!(catalog.search("").len(), 4);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = sample();
        let hits = catalog.filter_by_category("Utility");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ItemId::new(2));
        assert!(catalog.filter_by_category("Nope").is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = sample();
        assert_eq!(
            catalog.categories(),
            vec!["Defense", "Utility", "Stealth", "Mobility"]
        );
    }

    #[test]
    fn test_sorted_by_downloads() {
        let catalog = sample();
        let desc: Vec<i32> = catalog
            .sorted_by_downloads(SortOrder::Descending)
            .iter()
            .map(|i| i.id.as_i32())
            .collect();
        assert_eq!(desc, vec![2, 4, 1, 3]);
        let asc: Vec<i32> = catalog
            .sorted_by_downloads(SortOrder::Ascending)
            .iter()
            .map(|i| i.id.as_i32())
            .collect();
        assert_eq!(asc, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_top() {
        let catalog = sample();
        assert_eq!(catalog.top(2).len(), 2);
        assert_eq!(catalog.top(2)[0].id, ItemId::new(1));
        assert_eq!(catalog.top(100).len(), 4);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
