//! Login flow: capture credentials, submit, persist the token.

use colored::Colorize;
use dialoguer::{Input, Password};
use shopdesk_client::ApiError;

/// Run the login flow.
///
/// Both credentials are trimmed and presence-checked before any network
/// call. Failures surface as blocking errors: the login context has no
/// notification container.
///
/// # Errors
///
/// Returns an error on validation failure, on a rejected login (with
/// the server's `message` when it supplies one), or when the token
/// cannot be persisted.
pub async fn run(email: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (store, client) = super::context()?;

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields".into());
    }

    println!("Logging in...");

    match client.login(email, password).await {
        Ok(token) => {
            store.save(&token)?;
            println!(
                "{}",
                "Login successful. Run `shopdesk dashboard` to continue.".green()
            );
            Ok(())
        }
        Err(ApiError::Server { message, .. }) => {
            Err(message.unwrap_or_else(|| "Login failed".to_string()).into())
        }
        Err(err) => Err(err.into()),
    }
}
