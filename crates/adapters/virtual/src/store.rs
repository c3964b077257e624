//! In-memory key-value store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_app::ports::KeyValueStore;
use folio_domain::error::FolioError;

#[derive(Debug, Default)]
struct StoreState {
    values: HashMap<String, String>,
    writes: usize,
    failing: bool,
}

/// Shared handle to an in-memory store. Clones observe the same values.
#[derive(Debug, Clone, Default)]
pub struct VirtualStore {
    inner: Rc<RefCell<StoreState>>,
}

impl VirtualStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key` without counting a write.
    #[must_use]
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every read and write fail, like disabled browser storage.
    #[must_use]
    pub fn failing(self) -> Self {
        self.inner.borrow_mut().failing = true;
        self
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl KeyValueStore for VirtualStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        let state = self.inner.borrow();
        if state.failing {
            return Err(FolioError::Storage("storage unavailable".into()));
        }
        Ok(state.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let mut state = self.inner.borrow_mut();
        if state.failing {
            return Err(FolioError::Storage("storage unavailable".into()));
        }
        state.values.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_writes_but_not_seeded_values() {
        let store = VirtualStore::new().with_value("theme", "light");
        store.set("theme", "dark").unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn should_fail_reads_and_writes_when_failing() {
        let store = VirtualStore::new().failing();
        assert!(matches!(store.get("theme"), Err(FolioError::Storage(_))));
        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.writes(), 0);
    }
}
