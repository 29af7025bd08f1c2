//! Client-side key/value storage.
//!
//! Session state (tokens, cart, order history, client id) lives in a string-keyed store on the
//! client. [`ClientStore`] abstracts over the backing medium; [`MemoryStore`] is the in-process
//! implementation used by tests and server-side rendering.

use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt::Debug;

pub trait ClientStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
    /// Read-modify-write of one key, atomic with respect to every other call on the store.
    /// `apply` sees the current value; returning `None` leaves the entry untouched.
    fn update(&self, key: &str, apply: &mut dyn FnMut(Option<&str>) -> Option<String>);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store, mostly for tests.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RwLock::new(map) }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl ClientStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_owned(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn update(&self, key: &str, apply: &mut dyn FnMut(Option<&str>) -> Option<String>) {
        let mut entries = self.entries.write();
        if let Some(next) = apply(entries.get(key).map(String::as_str)) {
            entries.insert(key.to_owned(), next);
        }
    }
}
