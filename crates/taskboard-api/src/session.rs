//! Session persistence boundary.
//!
//! Models a tab-scoped storage area: an opaque token and the serialized user
//! record under fixed keys, gone when the session ends. Implementations only
//! need string get/put/remove; the keys are owned here.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-lifetime storage. Nothing survives a restart, which is the point:
/// the session is scoped to one run of the client.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing token, e.g. one issued by a previous
    /// login and carried over through the environment.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.put(TOKEN_KEY, token);
        store
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
