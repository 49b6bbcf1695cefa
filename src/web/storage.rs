//! `localStorage`-backed [`PreferenceStore`].

use web_sys::{Storage, Window};

use super::describe;
use crate::error::StoreError;
use crate::store::PreferenceStore;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, blocked third-party storage).
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("store: localStorage blocked: {}", describe(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|err| StoreError::Rejected { key: key.to_owned(), reason: describe(&err) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected { key: key.to_owned(), reason: describe(&err) })
    }
}
