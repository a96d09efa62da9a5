//! Install/uninstall registry backed by durable storage.
//!
//! The registry is the sole writer of its storage key. Every mutation
//! rewrites the full entry list as a single JSON value, so the durable
//! copy is either the previous state or the new one, never a partial
//! splice. Reads at startup degrade to an empty registry on any missing
//! or malformed payload.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use appbay_core::{CatalogItem, ItemId};

use crate::catalog::SortOrder;
use crate::storage::{StorageBackend, StorageError};

/// Storage key the registry persists under.
pub const STORAGE_KEY: &str = "installed_apps";

/// Errors surfaced by registry mutations.
///
/// When a mutation returns an error, the in-memory registry has already
/// applied the change - the current session stays consistent - but the
/// durable copy is stale and will not survive a restart.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The entry list could not be serialized.
    #[error("failed to serialize installed entries: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage backend rejected the write.
    #[error("failed to persist installed entries: {0}")]
    Storage(#[from] StorageError),
}

/// A durable record marking a catalog item as installed.
///
/// A trimmed projection of the catalog item, captured at install time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledEntry {
    /// Catalog item identifier; unique within the registry.
    pub id: ItemId,
    /// Display name at install time.
    pub title: String,
    /// Image URL at install time.
    pub image: String,
    /// Download count at install time.
    pub downloads: u64,
    /// Average rating at install time.
    pub rating: f64,
    /// When the item was installed.
    pub installed_at: DateTime<Utc>,
}

impl InstalledEntry {
    fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            image: item.image.clone(),
            downloads: item.downloads,
            rating: item.rating,
            installed_at: Utc::now(),
        }
    }
}

/// Tracks which catalog items are installed, one entry per identifier,
/// persisted through a [`StorageBackend`].
#[derive(Debug)]
pub struct InstallationRegistry<S: StorageBackend> {
    backend: S,
    entries: Vec<InstalledEntry>,
    index: HashSet<ItemId>,
}

impl<S: StorageBackend> InstallationRegistry<S> {
    /// Open the registry, loading any previously persisted entries.
    ///
    /// An absent, unreadable, or malformed payload initializes the
    /// registry empty; it never fails. Duplicate identifiers in the
    /// payload are dropped (first occurrence wins).
    pub fn open(backend: S) -> Self {
        let entries = match backend.get(STORAGE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<InstalledEntry>>(&payload) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed installed-apps payload; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read installed-apps payload; starting empty");
                Vec::new()
            }
        };

        let mut index = HashSet::with_capacity(entries.len());
        let mut deduped = Vec::with_capacity(entries.len());
        for entry in entries {
            if index.insert(entry.id) {
                deduped.push(entry);
            } else {
                tracing::warn!(id = %entry.id, "Duplicate installed entry in payload; dropping");
            }
        }

        Self {
            backend,
            entries: deduped,
            index,
        }
    }

    /// Install `item`, returning whether a new entry was created.
    ///
    /// Idempotent: installing an already-installed item is an `Ok(false)`
    /// no-op with no write issued.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if persisting fails. The entry is still
    /// installed for the current session; see [`RegistryError`].
    pub fn install(&mut self, item: &CatalogItem) -> Result<bool, RegistryError> {
        if self.index.contains(&item.id) {
            tracing::debug!(id = %item.id, "Item already installed");
            return Ok(false);
        }
        self.entries.push(InstalledEntry::from_item(item));
        self.index.insert(item.id);
        self.persist()?;
        tracing::info!(id = %item.id, title = %item.title, "Installed");
        Ok(true)
    }

    /// Uninstall the entry for `id`, returning whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if persisting fails. The entry is still
    /// removed for the current session; see [`RegistryError`].
    pub fn uninstall(&mut self, id: ItemId) -> Result<bool, RegistryError> {
        if !self.index.remove(&id) {
            tracing::debug!(%id, "Uninstall for item not installed; ignoring");
            return Ok(false);
        }
        self.entries.retain(|e| e.id != id);
        self.persist()?;
        tracing::info!(%id, "Uninstalled");
        Ok(true)
    }

    /// Installed entries in install order.
    #[must_use]
    pub fn list(&self) -> &[InstalledEntry] {
        &self.entries
    }

    /// Installed entries sorted by download count.
    #[must_use]
    pub fn list_sorted_by_downloads(&self, order: SortOrder) -> Vec<InstalledEntry> {
        let mut sorted = self.entries.clone();
        match order {
            SortOrder::Ascending => sorted.sort_by_key(|e| e.downloads),
            SortOrder::Descending => sorted.sort_by_key(|e| std::cmp::Reverse(e.downloads)),
        }
        sorted
    }

    /// Whether `id` is installed. O(1).
    #[must_use]
    pub fn is_installed(&self, id: ItemId) -> bool {
        self.index.contains(&id)
    }

    /// Number of installed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole entry list and write it as one value.
    fn persist(&mut self) -> Result<(), RegistryError> {
        let payload = serde_json::to_string(&self.entries)?;
        self.backend.set(STORAGE_KEY, &payload)?;
        Ok(())
    }
}
