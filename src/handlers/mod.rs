/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler extracts its inputs, calls the repository and returns a
/// JSON response or an `ApiError`.

mod user_handlers;
mod item_handlers;
mod system_handlers;

// Re-export all handlers
pub use user_handlers::*;
pub use item_handlers::*;
pub use system_handlers::*;
