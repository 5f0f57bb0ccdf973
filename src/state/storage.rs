// Key-value persistence behind a trait so session logic runs without a browser
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CapabilityError;

/// Opaque string store, read-after-write consistent within a session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), CapabilityError>;
}

/// `window.localStorage`, looked up on each call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, CapabilityError> {
        web_sys::window()
            .ok_or(CapabilityError::Unavailable("window"))?
            .local_storage()?
            .ok_or(CapabilityError::Unavailable("localStorage"))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CapabilityError> {
        Self::storage()?.set_item(key, value)?;
        Ok(())
    }
}

/// In-memory store, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.items.borrow_mut().extend(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CapabilityError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_read_after_write() {
        let store = MemoryStore::default();
        assert_eq!(store.get("logo"), None);
        store.set("logo", "/x.png").unwrap();
        assert_eq!(store.get("logo").as_deref(), Some("/x.png"));
        store.set("logo", "/y.png").unwrap();
        assert_eq!(store.get("logo").as_deref(), Some("/y.png"));
    }

    #[test]
    fn memory_store_seeded() {
        let store = MemoryStore::with([("a", "1"), ("b", "2")]);
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_round_trip() {
        let store = LocalStore;
        store.set("ack_test_key", "v").unwrap();
        assert_eq!(store.get("ack_test_key").as_deref(), Some("v"));
        assert_eq!(store.get("ack_missing_key"), None);
    }
}
