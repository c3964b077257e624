//! `localStorage` implementation of [`KeyValueStore`].

use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

use folio_app::ports::KeyValueStore;
use folio_domain::error::FolioError;

/// Errors specific to browser storage.
#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    /// Storage is disabled (private browsing, blocked cookies).
    #[error("local storage is unavailable")]
    Unavailable,

    /// The browser rejected the operation (quota, security).
    #[error("local storage operation failed: {0}")]
    Rejected(String),
}

impl WebStorageError {
    fn rejected(err: &JsValue) -> Self {
        Self::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl From<WebStorageError> for FolioError {
    fn from(err: WebStorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[derive(Clone)]
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<Storage, WebStorageError> {
        self.window
            .local_storage()
            .map_err(|err| WebStorageError::rejected(&err))?
            .ok_or(WebStorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        Ok(self
            .storage()?
            .get_item(key)
            .map_err(|err| WebStorageError::rejected(&err))?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        Ok(self
            .storage()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::rejected(&err))?)
    }
}
