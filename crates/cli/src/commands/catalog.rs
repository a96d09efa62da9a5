//! Catalog browsing commands.

use appbay_core::{CatalogItem, ItemId};
use appbay_storefront::{Catalog, SortOrder};

/// List catalog items, optionally filtered and sorted.
pub fn list(
    catalog: &Catalog,
    category: Option<&str>,
    search: Option<&str>,
    sort: Option<SortOrder>,
) {
    let mut items: Vec<&CatalogItem> = match (category, search) {
        (Some(cat), _) => catalog.filter_by_category(cat),
        (None, Some(query)) => catalog.search(query),
        (None, None) => catalog.iter().collect(),
    };
    if let Some(query) = search
        && category.is_some()
    {
        let needle = query.to_lowercase();
        items.retain(|item| item.title.to_lowercase().contains(&needle));
    }
    if let Some(order) = sort {
        match order {
            SortOrder::Ascending => items.sort_by_key(|i| i.downloads),
            SortOrder::Descending => items.sort_by_key(|i| std::cmp::Reverse(i.downloads)),
        }
    }

    if items.is_empty() {
        println!("No items found.");
        return;
    }

    println!(
        "{:>4}  {:<24} {:<12} {:>10} {:>7} {:>10}",
        "ID", "TITLE", "CATEGORY", "PRICE", "RATING", "DOWNLOADS"
    );
    for item in items {
        println!(
            "{:>4}  {:<24} {:<12} {:>10} {:>7.1} {:>10}",
            item.id.as_i32(),
            item.title,
            item.category,
            item.price.display(),
            item.rating,
            item.downloads
        );
    }
}

/// Show a single item in detail.
///
/// # Errors
///
/// Returns an error if `id` is not in the catalog.
pub fn show(catalog: &Catalog, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let item = catalog
        .get(ItemId::new(id))
        .ok_or_else(|| format!("Item {id} not found in catalog"))?;

    println!("{} ({})", item.title, item.vendor);
    println!("  Category:  {}", item.category);
    println!("  Price:     {}", item.price.display());
    println!("  Rating:    {:.1}/5", item.rating);
    println!("  Downloads: {}", item.downloads);
    println!("  Image:     {}", item.image);
    println!();
    println!("{}", item.description);
    Ok(())
}
