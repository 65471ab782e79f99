/// Data models module
///
/// This module defines the records served by the API. Both are plain
/// serde structs; the data store owns them and hands out clones.

mod item;
pub use item::Item;

mod user;
pub use user::User;
