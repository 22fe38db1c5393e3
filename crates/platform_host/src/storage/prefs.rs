//! Lightweight preference storage contracts and adapters.
//!
//! Preference values are plain strings keyed by string, mirroring the browser's origin-scoped
//! `localStorage`. Access is synchronous.

use std::{cell::RefCell, collections::HashMap, fmt::Display, rc::Rc, str::FromStr};

/// Host service for lightweight preference values (one string per key).
pub trait PrefsStore {
    /// Loads the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the read fails.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw string under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails.
    fn save_pref(&self, key: &str, value: &str) -> Result<(), String>;

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the delete fails.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets tests simulate a page reload by handing the
/// same store to a fresh runtime.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Builds a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        {
            let mut map = store.inner.borrow_mut();
            for (key, value) in entries {
                map.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads a preference and parses it with [`FromStr`].
///
/// Missing keys and values that fail to parse both yield `Ok(None)`; only store failures are
/// reported as errors.
///
/// # Errors
///
/// Returns an error when the store read fails.
pub fn load_pref_parsed_with<S: PrefsStore + ?Sized, T: FromStr>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    Ok(raw.trim().parse().ok())
}

/// Saves a preference using its [`Display`] rendering.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub fn save_pref_display_with<S: PrefsStore + ?Sized, T: Display + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    store.save_pref(key, &value.to_string())
}
