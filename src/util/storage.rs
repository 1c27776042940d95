//! Durable client-side key-value storage behind a swappable seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only durable client state is the persisted token pair. Everything that
//! touches it goes through `KeyValueStore` so the browser `localStorage`
//! backend can be replaced by an in-memory map in tests and on the server.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the persisted access token.
pub const ACCESS_TOKEN_KEY: &str = "scribepoint_access_token";
/// Storage key for the persisted refresh token.
pub const REFRESH_TOKEN_KEY: &str = "scribepoint_refresh_token";

/// Minimal durable string-to-string storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// `localStorage`-backed store. Reads return `None` and writes no-op outside
/// a browser environment so SSR stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Shared in-memory store for unit tests and server rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Token-pair view over a `KeyValueStore` using the fixed storage keys.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    store: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Persist a new access token, and the new refresh token when the server
    /// rotated it. Absent rotation the existing refresh token is retained.
    pub fn store_pair(&self, access: &str, refresh: Option<&str>) {
        self.store.set(ACCESS_TOKEN_KEY, access);
        if let Some(refresh) = refresh {
            self.store.set(REFRESH_TOKEN_KEY, refresh);
        }
    }

    /// Remove both persisted tokens.
    pub fn clear(&self) {
        self.store.delete(ACCESS_TOKEN_KEY);
        self.store.delete(REFRESH_TOKEN_KEY);
    }
}
