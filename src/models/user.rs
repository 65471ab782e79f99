use serde::{Deserialize, Serialize};

use super::Item;

fn default_is_active() -> bool {
    true
}

/// Represents a user account together with the items it owns
///
/// The JSON shape is `{id, email, username, is_active, items}`; `items`
/// holds the user's items in the order they were inserted into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: i64,

    /// The user's email address
    email: String,

    /// The user's login name
    username: String,

    /// Whether the account is active
    #[serde(default = "default_is_active")]
    is_active: bool,

    /// Items owned by this user
    #[serde(default)]
    items: Vec<Item>,
}

impl User {
    /// Creates a new user with all fields specified
    ///
    /// ### Arguments
    ///
    /// * `id` - The unique identifier for the user
    /// * `username` - The user's login name
    /// * `email` - The user's email address
    /// * `is_active` - Whether the account is active
    /// * `items` - The items owned by the user, in insertion order
    ///
    /// ### Returns
    ///
    /// A new `User` instance with the specified fields
    pub fn new(id: i64, username: String, email: String, is_active: bool, items: Vec<Item>) -> Self {
        Self {
            id,
            email,
            username,
            is_active,
            items,
        }
    }

    /// Gets the user's ID
    pub fn get_id(&self) -> i64 {
        self.id
    }

    /// Gets the user's login name
    pub fn get_username(&self) -> String {
        self.username.clone()
    }

    /// Gets the user's email address
    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    /// Whether the account is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Gets the items owned by this user
    pub fn get_items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests;
