use monopereo::dto::{ErrorDto, HealthDto, PaginationQuery};
use monopereo::models::{Item, User};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for CLI client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server returned an error status with a message body
    #[error("Server error ({}): {message}", status.as_u16())]
    Server { status: reqwest::StatusCode, message: String },
    /// Network/connection/request error
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Extension trait for checking HTTP responses and extracting server error messages
trait ResponseExt {
    /// Checks for error status and extracts the server's `detail` message
    async fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    async fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        let status = self.status();
        let message = match self.json::<ErrorDto>().await {
            Ok(body) => body.detail,
            Err(_) => format!("HTTP {}", status),
        };
        Err(ClientError::Server { status, message })
    }
}

/// HTTP client wrapper for communicating with the Monopereo server
pub struct MonopereoClient {
    /// The base URL of the server (e.g. "http://127.0.0.1:8000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl MonopereoClient {
    /// Creates a new MonopereoClient
    ///
    /// ### Arguments
    ///
    /// * `base_url` - The base URL of the Monopereo server
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: Option<&PaginationQuery>) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await?.check().await?;
        Ok(response.json().await?)
    }

    /// Checks the server's liveness endpoint
    pub async fn health(&self) -> Result<HealthDto, ClientError> {
        self.get("/health", None).await
    }

    /// Lists a page of users
    pub async fn list_users(&self, query: &PaginationQuery) -> Result<Vec<User>, ClientError> {
        self.get("/users", Some(query)).await
    }

    /// Gets a specific user by ID
    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        self.get(&format!("/users/{}", id), None).await
    }

    /// Lists the items owned by a user
    pub async fn list_user_items(&self, id: i64) -> Result<Vec<Item>, ClientError> {
        self.get(&format!("/users/{}/items", id), None).await
    }

    /// Lists a page of items
    pub async fn list_items(&self, query: &PaginationQuery) -> Result<Vec<Item>, ClientError> {
        self.get("/items", Some(query)).await
    }
}
