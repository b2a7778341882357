//! Lock-guarded catalog handle for multi-threaded hosts.
//!
//! No catalog operation is safe under concurrent mutation, so the whole
//! catalog sits behind a single exclusive lock.

use crate::{Error, RecipeCatalog, Result};
use std::sync::{Arc, Mutex};

/// Cloneable handle to one catalog behind one lock
#[derive(Clone, Debug, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<RecipeCatalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run `f` with exclusive access to the catalog
    ///
    /// Returns `Error::LockPoisoned` if a previous holder panicked.
    pub fn with<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut RecipeCatalog) -> T,
    {
        let mut guard = self.inner.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// Like `with`, for closures that can themselves fail
    pub fn try_with<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut RecipeCatalog) -> Result<T>,
    {
        self.with(f)?
    }
}

impl From<RecipeCatalog> for SharedCatalog {
    fn from(catalog: RecipeCatalog) -> Self {
        Self::new(catalog)
    }
}
