//! Logout flow: tell the server, then clear local state regardless.

/// Run the logout flow.
///
/// The server call's outcome is not inspected; a failure is logged and
/// the stored token is cleared anyway, so logout always succeeds from
/// the client's perspective.
///
/// # Errors
///
/// Returns an error only when the local token store cannot be cleared.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (store, client) = super::context()?;

    if let Some(token) = store.load()? {
        client.set_token(token).await;
        if let Err(err) = client.logout().await {
            tracing::error!(error = %err, "logout request failed; clearing local session anyway");
        }
    }

    store.clear()?;
    client.clear_token().await;

    println!("Logged out. Run `shopdesk login` to sign in again.");
    Ok(())
}
