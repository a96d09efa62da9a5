//! Session-scoped wishlist.
//!
//! A toggle set over catalog identifiers. Unlike the installation
//! registry this is deliberately not persisted; it lives and dies with
//! the shopping session.

use std::collections::HashSet;

use appbay_core::ItemId;

/// In-memory set of wishlisted items.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    items: HashSet<ItemId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `id` in or out of the wishlist.
    ///
    /// Returns whether the item is wishlisted after the toggle.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.items.remove(&id) {
            false
        } else {
            self.items.insert(id);
            true
        }
    }

    /// Whether `id` is wishlisted.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    /// Number of wishlisted items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wishlisted ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.toggle(ItemId::new(2)));
        assert!(wishlist.contains(ItemId::new(2)));
        assert!(!wishlist.toggle(ItemId::new(2)));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle_is_per_item() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ItemId::new(1));
        wishlist.toggle(ItemId::new(2));
        wishlist.toggle(ItemId::new(1));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(ItemId::new(2)));
    }
}
