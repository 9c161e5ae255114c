//! Pure render functions for the dashboard lists.
//!
//! Every render rebuilds its output from scratch out of the fetched
//! data; there is no incremental update. Callers decide whether to show
//! the result, so a failed fetch simply leaves the previous rendering
//! on screen.

use shopdesk_client::{Category, Product};

/// Placeholder entry that always heads the category selector.
pub const SELECTOR_PLACEHOLDER: &str = "Select Category";

/// Category selector options: the placeholder first, then one option
/// per category in response order.
pub fn selector_options(categories: &[Category]) -> Vec<String> {
    std::iter::once(SELECTOR_PLACEHOLDER.to_string())
        .chain(categories.iter().map(|c| c.name.clone()))
        .collect()
}

/// Render the category list, its count, and the selector options.
pub fn render_categories(categories: &[Category]) -> String {
    let mut out = format!("Categories ({})\n", categories.len());
    for category in categories {
        out.push_str(&format!("  {}  [ID: {}]\n", category.name, category.id));
    }
    out.push_str(&format!(
        "  Category selector: {}\n",
        selector_options(categories).join(" | ")
    ));
    out
}

/// Render the product list and its count.
pub fn render_products(products: &[Product]) -> String {
    let mut out = format!("Products ({})\n", products.len());
    for product in products {
        out.push_str(&format!(
            "  {} - ${}  [Category ID: {}]\n",
            product.name, product.price, product.category_id
        ));
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shopdesk_core::{CategoryId, Price, ProductId};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_selector_has_placeholder_then_categories_in_order() {
        let categories = vec![category(2, "Games"), category(1, "Books")];
        let options = selector_options(&categories);
        assert_eq!(options, ["Select Category", "Games", "Books"]);
    }

    #[test]
    fn test_selector_for_single_category_has_two_options() {
        let categories = vec![category(1, "Books")];
        assert_eq!(selector_options(&categories).len(), 2);
    }

    #[test]
    fn test_render_categories_shows_count_and_entries() {
        let categories = vec![category(1, "Books")];
        let out = render_categories(&categories);
        assert!(out.starts_with("Categories (1)\n"));
        assert!(out.contains("Books  [ID: 1]"));
        assert!(out.contains("Select Category | Books"));
    }

    #[test]
    fn test_render_categories_empty_still_has_placeholder() {
        let out = render_categories(&[]);
        assert!(out.starts_with("Categories (0)\n"));
        assert!(out.contains("Category selector: Select Category\n"));
    }

    #[test]
    fn test_render_products_shows_price_and_category_badge() {
        let products = vec![Product {
            id: ProductId::new(3),
            name: "Pen".to_string(),
            price: Price::parse("1.5").unwrap(),
            category_id: CategoryId::new(2),
        }];
        let out = render_products(&products);
        assert!(out.starts_with("Products (1)\n"));
        assert!(out.contains("Pen - $1.50  [Category ID: 2]"));
    }
}
