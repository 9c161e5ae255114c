//! The shop admin API client.
//!
//! One method per REST operation. The bearer token is injected in a
//! single place so every authenticated call carries the same session
//! context rather than reading storage ad hoc.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionToken;
use crate::types::{Category, ErrorBody, LoginRequest, LoginResponse, NewCategory, NewProduct, Product};

/// Shop admin API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// in-memory session token cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:8000/api`.
    base_url: String,
    /// In-memory token cache (persisted externally via `TokenStore`).
    token: RwLock<Option<SessionToken>>,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::new();

        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                token: RwLock::new(None),
            }),
        }
    }

    /// Get the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // Session token cache
    // =========================================================================

    /// Set the session token directly (for loading from storage).
    pub async fn set_token(&self, token: SessionToken) {
        *self.inner.token.write().await = Some(token);
    }

    /// Get the current token (if set).
    pub async fn token(&self) -> Option<SessionToken> {
        self.inner.token.read().await.clone()
    }

    /// Check if a session token is set.
    pub async fn has_token(&self) -> bool {
        self.inner.token.read().await.is_some()
    }

    /// Clear the cached token.
    pub async fn clear_token(&self) {
        *self.inner.token.write().await = None;
    }

    /// Get the current bearer token string.
    async fn bearer_token(&self) -> Result<String, ApiError> {
        let token = self.inner.token.read().await;
        token
            .as_ref()
            .map(|t| t.token.clone())
            .ok_or(ApiError::NoSessionToken)
    }

    // =========================================================================
    // Request execution
    // =========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Best-effort extraction of the `message` field from a failure body.
    async fn error_message(response: reqwest::Response) -> Option<String> {
        response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .map(|body| body.message)
    }

    /// Map a non-success response on an authenticated endpoint to an
    /// error, extracting the body's `message` field when one is present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized(
                "Invalid or expired session token".to_string(),
            ));
        }

        Err(ApiError::Server {
            status: status.as_u16(),
            message: Self::error_message(response).await,
        })
    }

    /// Authenticated GET returning a JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let token = self.bearer_token().await?;

        let response = self
            .inner
            .http
            .get(self.endpoint(path))
            .bearer_auth(&token)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Authenticated POST with a JSON body; the response body is only
    /// checked for success, never parsed.
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let token = self.bearer_token().await?;

        let response = self
            .inner
            .http
            .post(self.endpoint(path))
            .bearer_auth(&token)
            .json(body)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with email and password.
    ///
    /// On success the returned token is also cached in memory so
    /// subsequent calls on this client are authenticated. Persisting it
    /// across runs is the caller's job (see `TokenStore`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Server` with the body's `message` (when the
    /// API supplies one) on a non-success status, or `ApiError::Http`
    /// on transport failure.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, ApiError> {
        let response = self
            .inner
            .http
            .post(self.endpoint("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        // Unlike authenticated endpoints, a 401 here is a credential
        // failure whose body carries the message to show the user.
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: Self::error_message(response).await,
            });
        }

        let body: LoginResponse = response.json().await?;

        let token = SessionToken::new(body.token);
        *self.inner.token.write().await = Some(token.clone());

        Ok(token)
    }

    /// Log out on the server.
    ///
    /// The response is not inspected: a non-success status still counts
    /// as a completed logout. Callers clear local state unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error only when no token is set or the request cannot
    /// be sent at all.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let token = self.bearer_token().await?;

        self.inner
            .http
            .post(self.endpoint("/logout"))
            .bearer_auth(&token)
            .send()
            .await?;

        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Get all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set, the request fails, or the
    /// server responds with a non-success status.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories").await
    }

    /// Create a new category.
    ///
    /// The created entity in the response is unused beyond the success
    /// signal; callers re-fetch the full list instead.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set, the request fails, or the
    /// server responds with a non-success status.
    #[instrument(skip(self), fields(name = %input.name))]
    pub async fn create_category(&self, input: &NewCategory) -> Result<(), ApiError> {
        self.post_json("/categories", input).await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Get all products.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set, the request fails, or the
    /// server responds with a non-success status.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products").await
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set, the request fails, or the
    /// server responds with a non-success status.
    #[instrument(skip(self), fields(name = %input.name))]
    pub async fn create_product(&self, input: &NewProduct) -> Result<(), ApiError> {
        self.post_json("/products", input).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_client(url: &str) -> ApiClient {
        let config = ClientConfig::new(url.parse().unwrap(), PathBuf::from("/tmp"));
        ApiClient::new(&config)
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = test_client("http://127.0.0.1:8000/api/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000/api");
        assert_eq!(client.endpoint("/login"), "http://127.0.0.1:8000/api/login");
    }

    #[tokio::test]
    async fn test_token_cache_lifecycle() {
        let client = test_client("http://127.0.0.1:8000/api");
        assert!(!client.has_token().await);

        client.set_token(SessionToken::new("T1".to_string())).await;
        assert!(client.has_token().await);
        assert_eq!(client.token().await.unwrap().token, "T1");

        client.clear_token().await;
        assert!(!client.has_token().await);
    }

    #[tokio::test]
    async fn test_authenticated_calls_require_token() {
        let client = test_client("http://127.0.0.1:8000/api");
        // No token set: the call must fail before any request is made.
        let err = client.categories().await.unwrap_err();
        assert!(matches!(err, ApiError::NoSessionToken));

        let err = client.logout().await.unwrap_err();
        assert!(matches!(err, ApiError::NoSessionToken));
    }
}
