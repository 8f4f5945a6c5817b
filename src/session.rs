//! Session Persistence
//!
//! Admin flag and bearer token, kept in browser local storage for the
//! lifetime of the tab.

use crate::config::{ADMIN_KEY, TOKEN_KEY};

/// String key-value storage backing the session
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or("localStorage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("failed to write {}: {:?}", key, e))
    }
}

/// Typed view over the persisted session keys
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored bearer token; an empty string counts as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.store.get(ADMIN_KEY).as_deref() == Some("true")
    }

    /// Persist the result of a successful login. A login without a token
    /// keeps whatever token was stored before.
    pub fn record_login(&self, is_admin: bool, token: Option<&str>) -> Result<(), String> {
        self.store.set(ADMIN_KEY, if is_admin { "true" } else { "false" })?;
        match token.filter(|t| !t.is_empty()) {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => Ok(()),
        }
    }
}

/// In-memory storage for host tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for &MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.get_raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_anonymous() {
        let store = MemoryStore::default();
        let session = Session::new(&store);
        assert_eq!(session.token(), None);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_record_login_persists_flag_and_token() {
        let store = MemoryStore::default();
        let session = Session::new(&store);
        session.record_login(true, Some("abc123")).unwrap();

        // A fresh view over the same storage sees the values (page reload)
        let reloaded = Session::new(&store);
        assert!(reloaded.is_admin());
        assert_eq!(reloaded.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_login_without_token_keeps_previous_token() {
        let store = MemoryStore::default();
        let session = Session::new(&store);
        session.record_login(true, Some("first")).unwrap();
        session.record_login(false, None).unwrap();

        assert!(!session.is_admin());
        assert_eq!(session.token().as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStore::default();
        (&store).set(TOKEN_KEY, "").unwrap();
        assert_eq!(Session::new(&store).token(), None);
    }
}
