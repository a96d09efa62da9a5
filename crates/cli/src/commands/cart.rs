//! Cart quote command.

use appbay_core::ItemId;
use appbay_storefront::{Catalog, CartStore, CheckoutPolicy};

/// Build a cart from `ID` / `IDxQTY` arguments and print its totals.
///
/// # Errors
///
/// Returns an error if an argument cannot be parsed or names an item not
/// in the catalog.
pub fn quote(
    catalog: &Catalog,
    policy: CheckoutPolicy,
    args: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = CartStore::new(policy);

    for arg in args {
        let (id, quantity) = parse_item_arg(arg)?;
        let item = catalog
            .get(id)
            .ok_or_else(|| format!("Item {id} not found in catalog"))?;
        cart.add(item);
        if quantity > 1 {
            cart.set_quantity(id, quantity);
        }
    }

    for line in cart.lines() {
        println!(
            "{:>3} x {:<24} {:>10} each",
            line.quantity,
            line.title,
            line.unit_price.display()
        );
    }
    let totals = cart.totals();
    println!();
    println!("  Items:    {}", totals.item_count);
    println!("  Subtotal: ${:.2}", totals.subtotal);
    println!("  Tax:      ${:.2}", totals.tax);
    println!("  Shipping: ${:.2}", totals.shipping);
    println!("  Total:    ${:.2}", totals.total);
    Ok(())
}

/// Parse `ID` or `IDxQTY` (e.g. `3`, `3x2`).
fn parse_item_arg(arg: &str) -> Result<(ItemId, u32), String> {
    let (id_part, qty_part) = match arg.split_once('x') {
        Some((id, qty)) => (id, Some(qty)),
        None => (arg, None),
    };
    let id = id_part
        .parse::<i32>()
        .map_err(|_| format!("Invalid item '{arg}': expected ID or IDxQTY"))?;
    let quantity = match qty_part {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| format!("Invalid quantity in '{arg}'"))?,
        None => 1,
    };
    Ok((ItemId::new(id), quantity))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_id() {
        assert_eq!(parse_item_arg("3").unwrap(), (ItemId::new(3), 1));
    }

    #[test]
    fn test_parse_with_quantity() {
        assert_eq!(parse_item_arg("3x2").unwrap(), (ItemId::new(3), 2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_item_arg("abc").is_err());
        assert!(parse_item_arg("3xfour").is_err());
        assert!(parse_item_arg("x2").is_err());
    }
}
