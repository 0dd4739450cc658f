//! Dark-mode preference persisted in localStorage.

use crate::config::theme::STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::Theme;
use crate::utils::dom;

/// String key/value persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = dom::local_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::SaveFailed)
    }
}

/// Stored theme; dark when nothing (or anything but `"false"`) is stored.
pub fn load(store: &impl PreferenceStore) -> Theme {
    Theme::from_stored(store.get(STORAGE_KEY).as_deref())
}

/// Flip `current` and persist the result. A failed write keeps the new theme
/// for this session only.
pub fn toggle(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(err) = store.set(STORAGE_KEY, next.stored_value()) {
        log::warn!("Failed to persist theme: {}", err);
    }
    next
}
