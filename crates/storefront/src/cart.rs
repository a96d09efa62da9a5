//! Cart line items and deterministic totals.
//!
//! The cart owns an insertion-ordered list of lines, at most one per
//! catalog item. Totals are never stored: [`CartStore::totals`] recomputes
//! them from the lines on every call, so every surface that renders a
//! price renders the same one. Tax and shipping come from the injected
//! [`CheckoutPolicy`], not from constants baked into the arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use appbay_core::{CatalogItem, ItemId, Price};

/// One catalog item's quantity within the active cart.
///
/// Title, image, and unit price are copied from the catalog item at the
/// time of the first `add`, so the line renders consistently even if the
/// catalog is swapped out mid-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog item identifier; unique within the cart.
    pub id: ItemId,
    /// Display name at time of add.
    pub title: String,
    /// Image URL at time of add.
    pub image: String,
    /// Unit price at time of add.
    pub unit_price: Price,
    /// Units of this item in the cart; always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.amount * Decimal::from(self.quantity)
    }
}

/// Tax and shipping configuration.
///
/// A `free_shipping_threshold` of `None` means the flat fee always
/// applies; stores that ship free unconditionally use a zero fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPolicy {
    /// Tax rate applied to the subtotal (e.g., `0.08` for 8%).
    pub tax_rate: Decimal,
    /// Flat shipping fee for non-empty carts.
    pub shipping_fee: Decimal,
    /// Subtotal at or above which shipping is waived.
    pub free_shipping_threshold: Option<Decimal>,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(8, 2),
            shipping_fee: Decimal::from(15),
            free_shipping_threshold: None,
        }
    }
}

/// Derived cart totals. Never stored; always recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub item_count: u32,
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Subtotal times the tax rate, rounded to cents.
    pub tax: Decimal,
    /// Flat fee, waived above the policy threshold; zero for empty carts.
    pub shipping: Decimal,
    /// Subtotal + tax + shipping.
    pub total: Decimal,
}

/// The cart: owns its lines for the lifetime of a shopping session.
///
/// Not persisted; cleared on [`checkout`](Self::checkout) or
/// [`clear`](Self::clear).
#[derive(Debug, Clone)]
pub struct CartStore {
    lines: Vec<CartLine>,
    policy: CheckoutPolicy,
}

impl CartStore {
    /// Create an empty cart with the given policy.
    #[must_use]
    pub const fn new(policy: CheckoutPolicy) -> Self {
        Self {
            lines: Vec::new(),
            policy,
        }
    }

    /// Add one unit of `item` to the cart.
    ///
    /// If a line for the item already exists its quantity is incremented;
    /// otherwise a new line is appended, preserving insertion order.
    pub fn add(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                id: item.id,
                title: item.title.clone(),
                image: item.image.clone(),
                unit_price: item.price,
                quantity: 1,
            });
        }
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// A quantity of zero removes the line. An unknown `id` is ignored:
    /// the UI cannot produce one through normal interaction, so it is
    /// logged rather than treated as fatal.
    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        } else {
            tracing::debug!(%id, quantity, "set_quantity for item not in cart; ignoring");
        }
    }

    /// Remove the line for `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: ItemId) {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() == before {
            tracing::debug!(%id, "remove for item not in cart; ignoring");
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute the current totals.
    ///
    /// Pure over the cart state: no side effects, and two calls with no
    /// mutation in between return identical results. All rounding happens
    /// here so displays can never drift apart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let item_count = self
            .lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity));
        let subtotal: Decimal = self.lines.iter().map(CartLine::line_total).sum();
        let tax = (subtotal * self.policy.tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let shipping = if self.lines.is_empty() {
            Decimal::ZERO
        } else {
            match self.policy.free_shipping_threshold {
                Some(threshold) if subtotal >= threshold => Decimal::ZERO,
                _ => self.policy.shipping_fee,
            }
        };
        CartTotals {
            item_count,
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }

    /// Snapshot the totals as a receipt and empty the cart.
    #[must_use]
    pub fn checkout(&mut self) -> CartTotals {
        let receipt = self.totals();
        self.clear();
        receipt
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not units) in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The policy this cart prices against.
    #[must_use]
    pub const fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }
}
