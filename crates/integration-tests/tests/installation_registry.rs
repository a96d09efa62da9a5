//! File-backed installation registry lifecycles.

use appbay_core::ItemId;
use appbay_integration_tests::sample_catalog;
use appbay_storefront::{
    FileStore, InstallationRegistry, SortOrder, StorageBackend, installs::STORAGE_KEY,
};

// =============================================================================
// Persistence Across Sessions
// =============================================================================

#[test]
fn test_installs_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = sample_catalog();

    {
        let mut registry = InstallationRegistry::open(FileStore::new(dir.path()));
        let item = catalog.get(ItemId::new(3)).expect("catalog item");
        assert!(registry.install(item).expect("install"));
    }

    // A fresh registry over the same directory sees the previous session
    let registry = InstallationRegistry::open(FileStore::new(dir.path()));
    assert_eq!(registry.len(), 1);
    assert!(registry.is_installed(ItemId::new(3)));
    assert_eq!(registry.list()[0].title, "Invisibility Cloak V2");
}

#[test]
fn test_uninstall_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = sample_catalog();

    {
        let mut registry = InstallationRegistry::open(FileStore::new(dir.path()));
        for id in [1, 2, 3] {
            registry
                .install(catalog.get(ItemId::new(id)).expect("catalog item"))
                .expect("install");
        }
        assert!(registry.uninstall(ItemId::new(2)).expect("uninstall"));
    }

    let registry = InstallationRegistry::open(FileStore::new(dir.path()));
    let ids: Vec<i32> = registry.list().iter().map(|e| e.id.as_i32()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_install_idempotent_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = sample_catalog();
    let item = catalog.get(ItemId::new(2)).expect("catalog item");

    let mut first = InstallationRegistry::open(FileStore::new(dir.path()));
    assert!(first.install(item).expect("install"));

    let mut second = InstallationRegistry::open(FileStore::new(dir.path()));
    assert!(!second.install(item).expect("install"));
    assert_eq!(second.len(), 1);
}

// =============================================================================
// Corruption Recovery
// =============================================================================

#[test]
fn test_externally_corrupted_payload_reloads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = sample_catalog();

    {
        let mut registry = InstallationRegistry::open(FileStore::new(dir.path()));
        registry
            .install(catalog.get(ItemId::new(5)).expect("catalog item"))
            .expect("install");
    }

    // Something else scribbles over the persisted payload
    let mut store = FileStore::new(dir.path());
    store.set(STORAGE_KEY, "{definitely-not-json").expect("set");

    let registry = InstallationRegistry::open(FileStore::new(dir.path()));
    assert!(registry.is_empty());
    assert!(registry.list().is_empty());
}

#[test]
fn test_cleared_payload_reloads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::new(dir.path());
    store.set(STORAGE_KEY, "[]").expect("set");

    let registry = InstallationRegistry::open(FileStore::new(dir.path()));
    assert!(registry.is_empty());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_install_order_and_sorting_across_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = sample_catalog();

    {
        let mut registry = InstallationRegistry::open(FileStore::new(dir.path()));
        for id in [4, 5, 1] {
            registry
                .install(catalog.get(ItemId::new(id)).expect("catalog item"))
                .expect("install");
        }
    }

    let registry = InstallationRegistry::open(FileStore::new(dir.path()));
    let installed: Vec<i32> = registry.list().iter().map(|e| e.id.as_i32()).collect();
    assert_eq!(installed, vec![4, 5, 1], "install order survives reload");

    let by_downloads: Vec<i32> = registry
        .list_sorted_by_downloads(SortOrder::Descending)
        .iter()
        .map(|e| e.id.as_i32())
        .collect();
    assert_eq!(by_downloads, vec![5, 1, 4]);
}
