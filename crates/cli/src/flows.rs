//! Request/response/render flows, independent of the terminal surface.
//!
//! The command handlers in [`crate::commands`] are thin adapters over
//! these functions, which keeps the actual dashboard behavior testable
//! without a terminal: each flow takes an [`ApiClient`] and a
//! [`Notifier`] and returns the rendering to show, if any.

use shopdesk_client::{ApiClient, ApiError, Category, NewCategory, NewProduct, Product};
use shopdesk_core::{CategoryId, Price};

use crate::kind::EntityKind;
use crate::notify::{Notifier, Severity};
use crate::views;

/// Banner shown once the initial dashboard load has been kicked off.
pub const WELCOME_MESSAGE: &str = "Welcome back! Dashboard loaded successfully.";

/// Raw inputs for creating a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    /// Presence check: the name must be non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns the warning message to show when validation fails.
    pub fn validate(&self) -> Result<NewCategory, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Category name is required");
        }
        Ok(NewCategory {
            name: name.to_string(),
        })
    }

    /// Reset the inputs after a successful create.
    pub fn clear(&mut self) {
        self.name.clear();
    }

    /// Whether every input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Raw inputs for creating a product.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category_id: String,
}

impl ProductForm {
    /// Presence check on all three fields; price and category id must
    /// additionally parse into their typed forms.
    ///
    /// # Errors
    ///
    /// Returns the warning message to show when validation fails.
    pub fn validate(&self) -> Result<NewProduct, &'static str> {
        const REQUIRED: &str = "All product fields are required";

        let name = self.name.trim();
        if name.is_empty() || self.price.trim().is_empty() || self.category_id.trim().is_empty() {
            return Err(REQUIRED);
        }

        let price = Price::parse(&self.price).map_err(|_| REQUIRED)?;
        let category_id = self
            .category_id
            .parse::<CategoryId>()
            .map_err(|_| REQUIRED)?;

        Ok(NewProduct {
            name: name.to_string(),
            price,
            category_id,
        })
    }

    /// Reset the inputs after a successful create.
    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
        self.category_id.clear();
    }

    /// Whether every input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price.is_empty() && self.category_id.is_empty()
    }
}

fn handle_categories(
    result: Result<Vec<Category>, ApiError>,
    notifier: &mut Notifier,
) -> Option<String> {
    match result {
        Ok(categories) => Some(views::render_categories(&categories)),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch categories");
            notifier.notify(
                EntityKind::Category.fetch_error_message(),
                Severity::Danger,
            );
            None
        }
    }
}

fn handle_products(
    result: Result<Vec<Product>, ApiError>,
    notifier: &mut Notifier,
) -> Option<String> {
    match result {
        Ok(products) => Some(views::render_products(&products)),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch products");
            notifier.notify(EntityKind::Product.fetch_error_message(), Severity::Danger);
            None
        }
    }
}

/// Fetch one kind's list and render it.
///
/// On failure this returns `None` so the caller leaves any previous
/// rendering untouched, after raising exactly one danger notification.
pub async fn fetch_list(
    client: &ApiClient,
    kind: EntityKind,
    notifier: &mut Notifier,
) -> Option<String> {
    match kind {
        EntityKind::Category => handle_categories(client.categories().await, notifier),
        EntityKind::Product => handle_products(client.products().await, notifier),
    }
}

/// Initial dashboard load: both lists are fetched concurrently and
/// unordered; their renderings are disjoint, so either may fail without
/// affecting the other.
pub async fn load_dashboard(
    client: &ApiClient,
    notifier: &mut Notifier,
) -> (Option<String>, Option<String>) {
    let (categories, products) = tokio::join!(client.categories(), client.products());

    notifier.notify(WELCOME_MESSAGE, Severity::Success);

    (
        handle_categories(categories, notifier),
        handle_products(products, notifier),
    )
}

/// Create a category, then re-fetch the category list once.
///
/// Validation failures raise a warning and never reach the network. On
/// success the form is cleared; on failure it stays populated so the
/// operator can retry without re-entering.
pub async fn create_category(
    client: &ApiClient,
    form: &mut CategoryForm,
    notifier: &mut Notifier,
) -> Option<String> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(message) => {
            notifier.notify(message, Severity::Warning);
            return None;
        }
    };

    match client.create_category(&input).await {
        Ok(()) => {
            notifier.notify(EntityKind::Category.created_message(), Severity::Success);
            form.clear();
            fetch_list(client, EntityKind::Category, notifier).await
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to create category");
            notifier.notify(
                EntityKind::Category.create_error_message(),
                Severity::Danger,
            );
            None
        }
    }
}

/// Create a product, then re-fetch the product list once. Same
/// validation and clearing rules as [`create_category`].
pub async fn create_product(
    client: &ApiClient,
    form: &mut ProductForm,
    notifier: &mut Notifier,
) -> Option<String> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(message) => {
            notifier.notify(message, Severity::Warning);
            return None;
        }
    };

    match client.create_product(&input).await {
        Ok(()) => {
            notifier.notify(EntityKind::Product.created_message(), Severity::Success);
            form.clear();
            fetch_list(client, EntityKind::Product, notifier).await
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to create product");
            notifier.notify(EntityKind::Product.create_error_message(), Severity::Danger);
            None
        }
    }
}
