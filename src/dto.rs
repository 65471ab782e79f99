use std::fmt;

use serde::{Deserialize, Serialize};

/// Default page size for collection endpoints
pub const DEFAULT_LIMIT: i64 = 100;

/// Query parameters for paginated collection endpoints
///
/// `skip` is the number of records to pass over and `limit` the maximum
/// number of records to return. Any integer is accepted; negative values
/// are clamped to zero when the query becomes a [`crate::repo::Page`], so
/// only non-numeric input is rejected.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationQuery {
    /// Number of records to skip
    pub skip: i64,

    /// Maximum number of records to return
    pub limit: i64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl fmt::Display for PaginationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaginationQuery {{ skip: {}, limit: {} }}", self.skip, self.limit)
    }
}

/// Body of the root endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WelcomeDto {
    pub message: String,
}

/// Body of the liveness endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthDto {
    pub status: String,
}

/// Body of every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDto {
    pub detail: String,
}
