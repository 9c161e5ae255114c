//! Command handlers: one per user-facing flow.
//!
//! Each handler wires configuration, the token store, and the API
//! client together, then delegates the actual request/response/render
//! work to [`crate::flows`].

pub mod create;
pub mod dashboard;
pub mod login;
pub mod logout;

use colored::Colorize;
use shopdesk_client::{ApiClient, ClientConfig, TokenStore, TokenStoreError};

/// Outcome of the dashboard gate.
pub enum Gate {
    /// A stored token exists; the client carries it.
    Authenticated(ApiClient),
    /// No stored token: the operator must log in first.
    RedirectToLogin,
}

/// Build the shared per-command context from the environment.
pub fn context() -> Result<(TokenStore, ApiClient), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let store = TokenStore::new(&config.token_dir);
    let client = ApiClient::new(&config);
    Ok((store, client))
}

/// Gate authenticated flows on the presence of a stored token.
///
/// The gate only checks presence; validity is the server's call on
/// every request. It runs before any fetch is issued.
///
/// # Errors
///
/// Returns an error if the token store exists but cannot be read.
pub async fn gate(client: ApiClient, store: &TokenStore) -> Result<Gate, TokenStoreError> {
    match store.load()? {
        Some(token) => {
            client.set_token(token).await;
            Ok(Gate::Authenticated(client))
        }
        None => Ok(Gate::RedirectToLogin),
    }
}

/// Message shown when the gate redirects.
pub fn print_login_redirect() {
    println!(
        "{}",
        "No session token found. Run `shopdesk login` first.".yellow()
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use shopdesk_client::SessionToken;

    fn test_client() -> ApiClient {
        let config = ClientConfig::new(
            "http://127.0.0.1:8000/api".parse().unwrap(),
            PathBuf::from("/tmp"),
        );
        ApiClient::new(&config)
    }

    fn temp_store(label: &str) -> TokenStore {
        let dir = std::env::temp_dir()
            .join("shopdesk-gate-tests")
            .join(format!("{}-{}", label, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        TokenStore::new(dir)
    }

    #[tokio::test]
    async fn gate_without_token_redirects_to_login() {
        let store = temp_store("redirect");
        let gate = gate(test_client(), &store).await.unwrap();
        assert!(matches!(gate, Gate::RedirectToLogin));
    }

    #[tokio::test]
    async fn gate_with_token_authenticates_client() {
        let store = temp_store("authenticated");
        store.save(&SessionToken::new("T1".to_string())).unwrap();

        match gate(test_client(), &store).await.unwrap() {
            Gate::Authenticated(client) => {
                assert_eq!(client.token().await.unwrap().token, "T1");
            }
            Gate::RedirectToLogin => panic!("expected an authenticated gate"),
        }
    }
}
