use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument};

use super::{Page, Repository};
use crate::models::{Item, User};
use crate::store::DataStore;

/// Repository backed by an immutable [`DataStore`]
///
/// Cloning is cheap; all clones share the same store.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    store: Arc<DataStore>,
}

impl InMemoryRepository {
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Repository over the built-in seed data
    pub fn seeded() -> Self {
        Self::new(DataStore::seeded())
    }
}

impl Repository for InMemoryRepository {
    #[instrument(skip(self))]
    fn list_users(&self, page: Page) -> Result<Vec<User>> {
        let users = page.apply(self.store.users()).to_vec();
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    #[instrument(skip(self))]
    fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = self.store.user(user_id).cloned();
        if user.is_some() {
            debug!("User found");
        } else {
            debug!("User not found");
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        let items = page.apply(self.store.items()).to_vec();
        debug!("Listed {} items", items.len());
        Ok(items)
    }

    #[instrument(skip(self))]
    fn get_items_for_user(&self, user_id: i64) -> Result<Vec<Item>> {
        let items = self
            .store
            .user(user_id)
            .map(|user| user.get_items().to_vec())
            .unwrap_or_default();
        debug!("Found {} items for user", items.len());
        Ok(items)
    }
}
