//! Insertion-ordered map that refuses duplicate keys.
//!
//! Uses `IndexMap` so enumeration follows registration order and removal
//! keeps the order of the remaining entries.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Result, ShortcutError};

type ErrorIdExists = Box<dyn Fn(&str) -> String>;

pub struct UniqueMap<V> {
    items: IndexMap<String, V>,
    error_id_exists: ErrorIdExists,
}

impl<V> Default for UniqueMap<V> {
    fn default() -> Self {
        Self::new(|key| format!("The id '{}' is already declared in a map.", key))
    }
}

impl<V: fmt::Debug> fmt::Debug for UniqueMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items.iter()).finish()
    }
}

impl<V> UniqueMap<V> {
    /// Create an empty map. `error_id_exists` builds the message reported
    /// when `add_item` meets a key that is already present.
    pub fn new(error_id_exists: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            items: IndexMap::new(),
            error_id_exists: Box::new(error_id_exists),
        }
    }

    pub fn add_item(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        if self.items.contains_key(&key) {
            let message = (self.error_id_exists)(&key);
            return Err(ShortcutError::DuplicateKey { key, message });
        }
        self.items.insert(key, value);
        Ok(())
    }

    /// Remove an item. Returns the removed value, `None` if it was absent.
    pub fn remove_item(&mut self, key: &str) -> Option<V> {
        self.items.shift_remove(key)
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn get_item(&self, key: &str) -> Option<&V> {
        self.items.get(key)
    }

    pub fn get_item_mut(&mut self, key: &str) -> Option<&mut V> {
        self.items.get_mut(key)
    }

    /// All entries in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &V)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
