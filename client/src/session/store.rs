//! Persisted session values: the server origin and the bearer token.
//!
//! Production storage is `window.localStorage`; reads and writes are
//! synchronous. There is no expiry and no schema versioning, just two
//! string keys.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const SERVER_KEY: &str = "server";
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// String key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Off the browser every read is empty and every
/// write is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Warn when localStorage refuses a write or removal (quota, privacy mode).
/// A refused removal leaves a stale session value behind.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn storage_write_succeeded<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    if result.is_err() {
        log::warn!("localStorage rejected {action} of {key}");
        return false;
    }
    true
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
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
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            storage_write_succeeded(storage.set_item(key, value), "write", key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not removed");
                return;
            };
            storage_write_succeeded(storage.remove_item(key), "removal", key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage, used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed access to the two session keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn server(&self) -> Option<String> {
        self.storage.get(SERVER_KEY)
    }

    /// Stored token; an empty string counts as absent.
    pub fn auth_token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn save(&self, server: &str, token: &str) {
        self.storage.set(SERVER_KEY, server);
        self.storage.set(AUTH_TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.storage.remove(SERVER_KEY);
        self.storage.remove(AUTH_TOKEN_KEY);
    }
}
