use serde::{Deserialize, Serialize};

/// Represents an item owned by a user
///
/// Items are read-only records loaded into the data store at startup.
/// The `owner_id` always refers to a user that exists in the same store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    id: i64,

    /// The display name of the item
    name: String,

    /// Optional free-form description, serialized as `null` when absent
    #[serde(default)]
    description: Option<String>,

    /// The ID of the user owning this item
    owner_id: i64,
}

impl Item {
    /// Creates a new item with all fields specified
    ///
    /// ### Arguments
    ///
    /// * `id` - The unique identifier for the item
    /// * `name` - The name of the item
    /// * `description` - An optional description
    /// * `owner_id` - The ID of the owning user
    ///
    /// ### Returns
    ///
    /// A new `Item` instance with the specified fields
    pub fn new(id: i64, name: String, description: Option<String>, owner_id: i64) -> Self {
        Self {
            id,
            name,
            description,
            owner_id,
        }
    }

    /// Gets the item's ID
    pub fn get_id(&self) -> i64 {
        self.id
    }

    /// Gets the item's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the item's description, if any
    pub fn get_description(&self) -> Option<String> {
        self.description.clone()
    }

    /// Gets the ID of the user owning this item
    pub fn get_owner_id(&self) -> i64 {
        self.owner_id
    }
}
