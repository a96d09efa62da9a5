//! Install registry commands.

use appbay_core::ItemId;
use appbay_storefront::{
    Catalog, FileStore, InstallationRegistry, SortOrder, StorefrontConfig,
};

fn open_registry(config: &StorefrontConfig) -> InstallationRegistry<FileStore> {
    InstallationRegistry::open(FileStore::new(&config.data_dir))
}

/// Install a catalog item into the durable registry.
///
/// # Errors
///
/// Returns an error if `id` is not in the catalog or the registry cannot
/// be persisted.
pub fn install(
    catalog: &Catalog,
    config: &StorefrontConfig,
    id: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let item = catalog
        .get(ItemId::new(id))
        .ok_or_else(|| format!("Item {id} not found in catalog"))?;

    let mut registry = open_registry(config);
    if registry.install(item)? {
        println!("\"{}\" successfully installed.", item.title);
    } else {
        println!("\"{}\" is already installed.", item.title);
    }
    Ok(())
}

/// Remove an entry from the durable registry.
///
/// # Errors
///
/// Returns an error if the registry cannot be persisted.
pub fn uninstall(config: &StorefrontConfig, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = open_registry(config);
    if registry.uninstall(ItemId::new(id))? {
        println!("Successfully uninstalled item {id}.");
    } else {
        println!("Item {id} is not installed.");
    }
    Ok(())
}

/// Print the installed entries, optionally sorted by downloads.
pub fn list(config: &StorefrontConfig, sort: Option<SortOrder>) {
    let registry = open_registry(config);
    if registry.is_empty() {
        println!("No apps installed yet.");
        return;
    }

    let entries = sort.map_or_else(
        || registry.list().to_vec(),
        |order| registry.list_sorted_by_downloads(order),
    );
    println!(
        "{:>4}  {:<24} {:>7} {:>10}  {}",
        "ID", "TITLE", "RATING", "DOWNLOADS", "INSTALLED"
    );
    for entry in entries {
        println!(
            "{:>4}  {:<24} {:>7.1} {:>10}  {}",
            entry.id.as_i32(),
            entry.title,
            entry.rating,
            entry.downloads,
            entry.installed_at.format("%Y-%m-%d %H:%M")
        );
    }
}
