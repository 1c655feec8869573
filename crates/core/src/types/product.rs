//! Catalog entity records: products, categories, and brands.
//!
//! These are plain data records deserialized once from the catalog source.
//! The state core treats them as immutable; cart and wishlist entries hold
//! denormalized snapshots taken at insertion time.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::id::{BrandId, CategoryId, ProductId};
use super::price::Price;
use super::slug::Slug;

/// Audience tag on a product. There is no unisex value; every product is
/// tagged one way or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Men => write!(f, "men"),
            Self::Women => write!(f, "women"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            _ => Err(format!("invalid gender tag: {s}")),
        }
    }
}

/// A single catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Romanized display name.
    pub name: String,
    /// Arabic display name; drives the default sort order.
    pub name_ar: String,
    pub brand: String,
    pub category: Slug,
    pub gender: Gender,
    pub price: Price,
    /// Present only when the product is on sale; must be >= `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Average review rating in [0, 5].
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    pub in_stock: bool,
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// New-arrival badge flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Product {
    /// Slug form of the brand name, used by the brand filter.
    #[must_use]
    pub fn brand_slug(&self) -> Slug {
        Slug::new(&self.brand)
    }

    /// Discount badge percentage when the product is on sale, rounded half
    /// away from zero like the storefront badge.
    ///
    /// Returns `None` when there is no original price or it is zero.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount();
        if original <= Decimal::ZERO {
            return None;
        }
        let fraction = Decimal::ONE - self.price.amount() / original;
        let percent = (fraction * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        percent.to_u32()
    }
}

/// A catalog category the filter sidebar offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub slug: Slug,
    pub name_ar: String,
}

/// A watchmaker brand the filter sidebar offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

impl Brand {
    /// Slug form of the brand name, matching [`Product::brand_slug`].
    #[must_use]
    pub fn slug(&self) -> Slug {
        Slug::new(&self.name)
    }
}
