use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::models::{Item, User};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read fixture file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse fixture file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate user id: {0}")]
    DuplicateUser(i64),
    #[error("Duplicate item id: {0}")]
    DuplicateItem(i64),
    #[error("Item {item_id} references unknown owner {owner_id}")]
    UnknownOwner { item_id: i64, owner_id: i64 },
}

fn default_is_active() -> bool {
    true
}

/// A user as it appears in a fixture, without its items
///
/// Items are listed separately in the fixture and attached to their
/// owner when the store is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// The initial record set of a data store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub users: Vec<UserRecord>,
    pub items: Vec<Item>,
}

impl Fixture {
    /// The built-in record set served when no fixture file is configured
    pub fn seed() -> Self {
        let user = |id: i64, username: &str| UserRecord {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            is_active: true,
        };
        let item = |id: i64, name: &str, description: &str, owner_id: i64| {
            Item::new(id, name.to_string(), Some(description.to_string()), owner_id)
        };

        Self {
            users: vec![user(1, "jules"), user(2, "alex")],
            items: vec![
                item(1, "Super-Widget", "A widget that is super.", 1),
                item(2, "Mega-Gadget", "A gadget of mega proportions.", 1),
                item(3, "Thingamajig", "What is this thing?", 2),
            ],
        }
    }

    /// Checks the invariants a store relies on
    ///
    /// User ids and item ids must be unique, and every item must be owned
    /// by a user present in the fixture.
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(StoreError::DuplicateUser(user.id));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.get_id()) {
                return Err(StoreError::DuplicateItem(item.get_id()));
            }
            if !user_ids.contains(&item.get_owner_id()) {
                return Err(StoreError::UnknownOwner {
                    item_id: item.get_id(),
                    owner_id: item.get_owner_id(),
                });
            }
        }

        Ok(())
    }
}

/// Immutable in-memory record set
///
/// Users and items are kept in insertion order. Each user already carries
/// its items, so user lookups never touch the item list.
#[derive(Debug, Clone)]
pub struct DataStore {
    users: Vec<User>,
    items: Vec<Item>,
    user_index: HashMap<i64, usize>,
}

impl DataStore {
    /// Builds the store from the built-in seed
    pub fn seeded() -> Self {
        Self::assemble(Fixture::seed())
    }

    /// Builds the store from a fixture, rejecting fixtures that break the
    /// uniqueness or ownership invariants
    pub fn from_fixture(fixture: Fixture) -> Result<Self, StoreError> {
        fixture.validate()?;
        Ok(Self::assemble(fixture))
    }

    /// Reads a JSON fixture file and builds the store from it
    ///
    /// ### Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid fixture
    /// document, or violates the store invariants.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture: Fixture = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_fixture(fixture)?;
        info!("Loaded {} users and {} items from {:?}", store.users.len(), store.items.len(), path);
        Ok(store)
    }

    fn assemble(fixture: Fixture) -> Self {
        let mut owned: HashMap<i64, Vec<Item>> = HashMap::new();
        for item in &fixture.items {
            owned.entry(item.get_owner_id()).or_default().push(item.clone());
        }

        let users: Vec<User> = fixture
            .users
            .into_iter()
            .map(|record| {
                let items = owned.remove(&record.id).unwrap_or_default();
                User::new(record.id, record.username, record.email, record.is_active, items)
            })
            .collect();

        let user_index = users
            .iter()
            .enumerate()
            .map(|(position, user)| (user.get_id(), position))
            .collect();

        debug!("Assembled store with {} users and {} items", users.len(), fixture.items.len());

        Self {
            users,
            items: fixture.items,
            user_index,
        }
    }

    /// All users in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up a user by ID
    pub fn user(&self, id: i64) -> Option<&User> {
        self.user_index.get(&id).map(|&position| &self.users[position])
    }
}
