//! The two managed entity kinds and their fixed user-facing messages.

use core::fmt;

/// Either of the two managed resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Product,
}

impl EntityKind {
    /// Generic message shown when fetching this kind's list fails.
    pub const fn fetch_error_message(self) -> &'static str {
        match self {
            Self::Category => "Error fetching categories",
            Self::Product => "Error fetching products",
        }
    }

    /// Generic message shown when creating an entity of this kind fails.
    pub const fn create_error_message(self) -> &'static str {
        match self {
            Self::Category => "Error adding category",
            Self::Product => "Error adding product",
        }
    }

    /// Message shown when an entity of this kind was created.
    pub const fn created_message(self) -> &'static str {
        match self {
            Self::Category => "Category added successfully!",
            Self::Product => "Product added successfully!",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Category => "categories",
            Self::Product => "products",
        };
        write!(f, "{label}")
    }
}
