//! Create flows: validate locally, post, re-fetch the affected list.

use crate::flows::{self, CategoryForm, ProductForm};
use crate::notify::Notifier;

use super::Gate;

/// Create a category from the given name.
///
/// # Errors
///
/// Returns an error if configuration or the token store cannot be read.
pub async fn category(name: String) -> Result<(), Box<dyn std::error::Error>> {
    let (store, client) = super::context()?;

    let client = match super::gate(client, &store).await? {
        Gate::Authenticated(client) => client,
        Gate::RedirectToLogin => {
            super::print_login_redirect();
            return Ok(());
        }
    };

    let mut notifier = Notifier::default();
    let mut form = CategoryForm { name };

    if let Some(panel) = flows::create_category(&client, &mut form, &mut notifier).await {
        println!("{panel}");
    }

    Ok(())
}

/// Create a product from the given raw fields.
///
/// # Errors
///
/// Returns an error if configuration or the token store cannot be read.
pub async fn product(
    name: String,
    price: String,
    category_id: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let (store, client) = super::context()?;

    let client = match super::gate(client, &store).await? {
        Gate::Authenticated(client) => client,
        Gate::RedirectToLogin => {
            super::print_login_redirect();
            return Ok(());
        }
    };

    let mut notifier = Notifier::default();
    let mut form = ProductForm {
        name,
        price,
        category_id,
    };

    if let Some(panel) = flows::create_product(&client, &mut form, &mut notifier).await {
        println!("{panel}");
    }

    Ok(())
}
