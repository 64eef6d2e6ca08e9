//! In-memory user store

use async_trait::async_trait;
use authd_domain::error::{Error, Result};
use authd_domain::{User, UserStore};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Concurrent in-memory credential store keyed by username
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, User>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    async fn save(&self, user: User) -> Result<()> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(Error::already_exists(format!("user '{}'", user.username))),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }
}
