//! Fire-and-once catalog store.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Lifecycle of the one catalog load.
///
/// The store starts `Loading` and resolves exactly once, to `Ready` or
/// `Failed`. There is no retry: a failed load stays failed so the caller can
/// surface a persistent message distinguishable from "no results".
#[derive(Debug, Default)]
pub enum LoadState {
    /// The fetch has not resolved yet; render a loading placeholder.
    #[default]
    Loading,
    /// The catalog decoded successfully and is immutable from here on.
    Ready(Catalog),
    /// The fetch or decode failed.
    Failed(Error),
}

/// Owns the catalog once loading completes.
///
/// The "fetch" is a single read of a fixed resource; `resolve` is the one
/// controlled mutation point, so the engine can treat the catalog as
/// write-once shared data without any locking discipline.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: LoadState,
}

impl CatalogStore {
    /// Create a store in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already resolved with a catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            state: LoadState::Ready(catalog),
        }
    }

    /// Perform the one fetch from a file path and resolve the store with the
    /// outcome.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut store = Self::new();
        store.resolve(fetch(path));
        store
    }

    /// Resolve the load with its outcome.
    ///
    /// Only the first resolution counts; later calls are ignored.
    pub fn resolve(&mut self, outcome: Result<Catalog>) {
        if !matches!(self.state, LoadState::Loading) {
            tracing::warn!("catalog load already resolved; ignoring late resolution");
            return;
        }
        match outcome {
            Ok(catalog) => {
                tracing::info!(portals = catalog.len(), "catalog loaded");
                self.state = LoadState::Ready(catalog);
            }
            Err(error) => {
                tracing::error!(error = %error, "catalog load failed");
                self.state = LoadState::Failed(error);
            }
        }
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The catalog, if loading completed successfully.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// The load error, if loading failed.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Check if the load is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }
}

fn fetch(path: &Path) -> Result<Catalog> {
    let file = File::open(path)?;
    Catalog::from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_json_str(r#"{"SEN":[{"title":"Aide","items":[]}]}"#).unwrap()
    }

    #[test]
    fn test_store_starts_loading() {
        let store = CatalogStore::new();
        assert!(store.is_loading());
        assert!(store.catalog().is_none());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_store_resolves_ready() {
        let mut store = CatalogStore::new();
        store.resolve(Ok(sample_catalog()));
        assert!(!store.is_loading());
        assert_eq!(store.catalog().unwrap().len(), 1);
    }

    #[test]
    fn test_store_resolves_failed() {
        let mut store = CatalogStore::new();
        store.resolve(Catalog::from_json_str("{"));
        assert!(!store.is_loading());
        assert!(store.catalog().is_none());
        assert!(matches!(store.error(), Some(Error::Parse(_))));
    }

    #[test]
    fn test_store_resolution_is_fire_and_once() {
        let mut store = CatalogStore::new();
        store.resolve(Ok(sample_catalog()));
        store.resolve(Catalog::from_json_str("{"));
        // The late failure must not displace the loaded catalog.
        assert!(store.catalog().is_some());

        let mut store = CatalogStore::new();
        store.resolve(Catalog::from_json_str("{"));
        store.resolve(Ok(sample_catalog()));
        // And a late success must not displace a failure: no retry.
        assert!(matches!(store.state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_with_catalog_is_ready() {
        let store = CatalogStore::with_catalog(sample_catalog());
        assert!(store.catalog().is_some());
    }
}
