//! Storage port — the key-value store holding the theme preference.

use folio_domain::error::FolioError;

/// A string key-value store that survives page reloads.
///
/// In the browser this is `localStorage`; the store may be unavailable
/// (private browsing, disabled storage), so every call is fallible.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}
