use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Money;
use crate::catalog::CatalogError;

/// Catalog-assigned product identifier. Starts at 1 and only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        ProductId(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Pricing tier of a product. Premium lines drive the order discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Premium,
    Regular,
    Budget,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Premium => "Premium",
            Category::Regular => "Regular",
            Category::Budget => "Budget",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Premium" => Ok(Category::Premium),
            "Regular" => Ok(Category::Regular),
            "Budget" => Ok(Category::Budget),
            other => Err(CatalogError::InvalidCategory(other.to_string())),
        }
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_name")]
    pub name: String,
    pub price: Money,
    pub category: Category,
    /// Units on hand. Never negative by construction.
    pub quantity: u32,
}

/// Payload for adding a product. The category is still raw text here; it is
/// validated when the catalog accepts the product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "product_name")]
    pub name: String,
    pub price: Money,
    pub category: String,
    pub quantity: u32,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            quantity,
        }
    }
}
