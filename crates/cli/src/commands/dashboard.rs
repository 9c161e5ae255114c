//! Dashboard flow: gate on the stored token, fetch, render.

use crate::flows;
use crate::kind::EntityKind;
use crate::notify::Notifier;

use super::Gate;

/// Run the full dashboard load: both lists fetched concurrently.
///
/// # Errors
///
/// Returns an error if configuration or the token store cannot be read.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (store, client) = super::context()?;

    let client = match super::gate(client, &store).await? {
        Gate::Authenticated(client) => client,
        Gate::RedirectToLogin => {
            super::print_login_redirect();
            return Ok(());
        }
    };

    let mut notifier = Notifier::default();
    let (categories, products) = flows::load_dashboard(&client, &mut notifier).await;

    if let Some(panel) = categories {
        println!("{panel}");
    }
    if let Some(panel) = products {
        println!("{panel}");
    }

    Ok(())
}

/// Re-fetch and render a single list.
///
/// # Errors
///
/// Returns an error if configuration or the token store cannot be read.
pub async fn refresh(kind: EntityKind) -> Result<(), Box<dyn std::error::Error>> {
    let (store, client) = super::context()?;

    let client = match super::gate(client, &store).await? {
        Gate::Authenticated(client) => client,
        Gate::RedirectToLogin => {
            super::print_login_redirect();
            return Ok(());
        }
    };

    let mut notifier = Notifier::default();
    if let Some(panel) = flows::fetch_list(&client, kind, &mut notifier).await {
        println!("{panel}");
    }

    Ok(())
}
