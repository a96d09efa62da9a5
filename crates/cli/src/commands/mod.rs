//! CLI command implementations.

use appbay_storefront::{Catalog, StorefrontConfig};

pub mod cart;
pub mod catalog;
pub mod installs;

/// Demo catalog bundled with the binary; used when `APPBAY_CATALOG_PATH`
/// is unset.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Load the configured catalog file, or fall back to the bundled one.
///
/// # Errors
///
/// Returns an error if a configured catalog file cannot be read or
/// parsed.
pub fn load_catalog(config: &StorefrontConfig) -> Result<Catalog, Box<dyn std::error::Error>> {
    match &config.catalog_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading catalog file");
            Ok(Catalog::load(path)?)
        }
        None => Ok(Catalog::from_json(BUNDLED_CATALOG)?),
    }
}
