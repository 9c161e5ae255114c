//! Request and response types for the shop admin API.

use serde::{Deserialize, Serialize};
use shopdesk_core::{CategoryId, Price, ProductId};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}

/// A product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product price, carried as a JSON number.
    pub price: Price,
    /// Category the product belongs to.
    pub category_id: CategoryId,
}

/// Input for creating a category.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    /// Category name (non-empty after trimming).
    pub name: String,
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    /// Product name (non-empty after trimming).
    pub name: String,
    /// Product price.
    pub price: Price,
    /// Category the product belongs to.
    pub category_id: CategoryId,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response body.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

/// Error body shape the API uses for failure responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_from_api_shape() {
        let category: Category = serde_json::from_str(r#"{"id":1,"name":"Books"}"#).unwrap();
        assert_eq!(category.id, CategoryId::new(1));
        assert_eq!(category.name, "Books");
    }

    #[test]
    fn test_product_deserializes_from_api_shape() {
        let product: Product =
            serde_json::from_str(r#"{"id":3,"name":"Pen","price":1.5,"category_id":2}"#).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Price::parse("1.5").unwrap());
        assert_eq!(product.category_id, CategoryId::new(2));
    }

    #[test]
    fn test_new_product_serializes_price_as_number() {
        let input = NewProduct {
            name: "Pen".to_string(),
            price: Price::parse("1.5").unwrap(),
            category_id: CategoryId::new(2),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["price"], serde_json::json!(1.5));
        assert_eq!(json["category_id"], serde_json::json!(2));
    }

    #[test]
    fn test_error_body_extracts_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.message, "Invalid credentials");
    }
}
