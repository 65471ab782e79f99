/// Repository module
///
/// This module provides the data access layer for the application.
/// Handlers talk to a [`Repository`] trait object, so the in-memory
/// implementation can be swapped for a real storage backend without
/// touching the web layer.

mod in_memory;

pub use in_memory::InMemoryRepository;

use std::sync::Arc;

use anyhow::Result;

use crate::dto::PaginationQuery;
use crate::models::{Item, User};

/// Offset/count window over an ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip from the start
    pub skip: usize,
    /// Maximum number of records to return
    pub limit: usize,
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Returns the records inside this window, in their original order
    ///
    /// A window starting past the end, or with a zero limit, is empty.
    pub fn apply<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = self.skip.min(records.len());
        let end = start.saturating_add(self.limit).min(records.len());
        &records[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        PaginationQuery::default().into()
    }
}

/// Negative values clamp to zero; values beyond `usize` saturate
fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

impl From<PaginationQuery> for Page {
    fn from(query: PaginationQuery) -> Self {
        Self::new(clamp_to_usize(query.skip), clamp_to_usize(query.limit))
    }
}

/// Read-only access to users and their items
pub trait Repository: Send + Sync {
    /// Lists users in insertion order, restricted to `page`
    fn list_users(&self, page: Page) -> Result<Vec<User>>;

    /// Looks up a single user, returning `None` when it does not exist
    fn get_user(&self, user_id: i64) -> Result<Option<User>>;

    /// Lists items in insertion order, restricted to `page`
    fn list_items(&self, page: Page) -> Result<Vec<Item>>;

    /// Lists the items owned by a user; empty when the user does not exist
    fn get_items_for_user(&self, user_id: i64) -> Result<Vec<Item>>;
}

/// Shared repository handle used as the router state
pub type RepoHandle = Arc<dyn Repository>;
