//! Shop admin API client.
//!
//! This crate provides a typed client for the shop admin REST API:
//! email/password login, bearer-token sessions persisted across
//! invocations, and list/create operations for categories and products.
//!
//! # Architecture
//!
//! - [`ApiClient`] holds the HTTP client, the API base URL, and an
//!   in-memory session token cache; one method per API operation.
//! - [`TokenStore`] persists the session token on disk between runs.
//! - [`ClientConfig`] reads the base URL and token location from the
//!   environment.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopdesk_client::{ApiClient, ClientConfig};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! let token = client.login("admin@example.com", "hunter2").await?;
//!
//! let categories = client.categories().await?;
//! let products = client.products().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use session::{SessionToken, TokenStore, TokenStoreError};
pub use types::{Category, NewCategory, NewProduct, Product};
