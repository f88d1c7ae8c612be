//! # API crate — REST client for the users backend
//!
//! [`UsersApi`] maps one method to one endpoint of the backend's
//! `/api/users` resource. It holds a cloneable [`reqwest::Client`] and the
//! resolved base URL, so the UI can put a single instance in context and
//! clone it into every spawned task.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list_users`](UsersApi::list_users) | `GET /api/users` |
//! | [`list_users_page`](UsersApi::list_users_page) | `GET /api/users?page=&size=` |
//! | [`get_user`](UsersApi::get_user) | `GET /api/users/{id}` |
//! | [`create_user`](UsersApi::create_user) | `POST /api/users` |
//! | [`update_user`](UsersApi::update_user) | `PUT /api/users/{id}` |
//! | [`delete_user`](UsersApi::delete_user) | `DELETE /api/users/{id}` |
//! | [`generate_users`](UsersApi::generate_users) | `POST /api/users/generate?count=N` |
//!
//! No call is retried. Failures come back as [`ApiError`] and it is up to
//! the caller to report them.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

mod error;
pub use error::ApiError;

pub use store::{AppConfig, User};

/// Path of the users resource relative to the API base URL.
pub const USERS_PATH: &str = "/api/users";

#[derive(Clone, Debug)]
pub struct UsersApi {
    client: Client,
    base_url: String,
}

impl UsersApi {
    /// Client for the backend at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/users`
    pub fn users_url(&self) -> String {
        format!("{}{USERS_PATH}", self.base_url)
    }

    /// `{base}/api/users/{id}`
    pub fn user_url(&self, id: u64) -> String {
        format!("{}/{id}", self.users_url())
    }

    /// `{base}/api/users/generate?count={count}`
    pub fn generate_url(&self, count: u32) -> String {
        format!("{}/generate?count={count}", self.users_url())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        let users: Vec<User> = self.fetch_json(self.client.get(&url), &url).await?;
        tracing::debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// Server-side paginated listing. `page` is 0-based as the backend expects.
    pub async fn list_users_page(&self, page: usize, size: usize) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        let request = self
            .client
            .get(&url)
            .query(&[("page", page.to_string()), ("size", size.to_string())]);
        self.fetch_json(request, &url).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let url = self.user_url(id);
        self.fetch_json(self.client.get(&url), &url).await
    }

    pub async fn create_user(&self, user: &User) -> Result<User, ApiError> {
        let url = self.users_url();
        let request = self.client.post(&url).json(&user.without_id());
        let created: User = self.fetch_json(request, &url).await?;
        tracing::info!("Created user {:?}", created.id);
        Ok(created)
    }

    pub async fn update_user(&self, id: u64, user: &User) -> Result<User, ApiError> {
        let url = self.user_url(id);
        let request = self.client.put(&url).json(&user.without_id());
        let updated = self.fetch_json(request, &url).await?;
        tracing::info!("Updated user {id}");
        Ok(updated)
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let url = self.user_url(id);
        self.send(self.client.delete(&url), &url).await?;
        tracing::info!("Deleted user {id}");
        Ok(())
    }

    pub async fn generate_users(&self, count: u32) -> Result<Vec<User>, ApiError> {
        let url = self.generate_url(count);
        let request = self.client.post(&url).json(&serde_json::json!({}));
        let generated: Vec<User> = self.fetch_json(request, &url).await?;
        tracing::info!("Generated {} users", generated.len());
        Ok(generated)
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        self.send(request, url)
            .await?
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }
}
