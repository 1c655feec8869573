//! The immutable product catalog.
//!
//! The catalog is loaded once at startup from a JSON document and never
//! mutated afterwards. Stores reference products by id; the catalog is the
//! single source of truth for what exists.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use meena_core::{Brand, Category, Price, Product, ProductId, Slug};

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(String),
    #[error("failed to parse catalog: {0}")]
    Parse(String),
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    #[error("product {id} references unknown category: {category}")]
    UnknownCategory { id: ProductId, category: Slug },
    #[error("product {id} original price {original} is below its sale price {price}")]
    InvalidSalePrice {
        id: ProductId,
        price: Price,
        original: Price,
    },
    #[error("product {id} rating {rating} is outside [0, 5]")]
    RatingOutOfRange { id: ProductId, rating: Decimal },
}

/// On-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    brands: Vec<Brand>,
}

/// Immutable catalog of products plus the category/brand reference lists the
/// filter sidebar offers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns an error on a duplicate product id, a product category with no
    /// matching category record (when category records are supplied at all),
    /// an original price below the sale price, or a rating outside [0, 5].
    pub fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        brands: Vec<Brand>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            validate_product(product, &categories)?;
        }

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "Catalog loaded"
        );
        if products.is_empty() {
            tracing::warn!("Catalog contains no products");
        }

        Ok(Self {
            products,
            categories,
            brands,
            index,
        })
    }

    /// Parse and validate a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.products, file.categories, file.brands)
    }

    /// Load a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category records for the filter sidebar.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Brand records for the filter sidebar.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Look up a product by id. A stale or unknown id is "not found", never
    /// an error.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Current price of a product, if the id is known.
    #[must_use]
    pub fn price(&self, id: &ProductId) -> Option<Price> {
        self.product(id).map(|p| p.price)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate_product(product: &Product, categories: &[Category]) -> Result<(), CatalogError> {
    if let Some(original) = product.original_price {
        if original < product.price {
            return Err(CatalogError::InvalidSalePrice {
                id: product.id.clone(),
                price: product.price,
                original,
            });
        }
    }

    if product.rating < Decimal::ZERO || product.rating > Decimal::from(5) {
        return Err(CatalogError::RatingOutOfRange {
            id: product.id.clone(),
            rating: product.rating,
        });
    }

    // Category records are optional; only cross-check when they are present.
    if !categories.is_empty() && !categories.iter().any(|c| c.slug == product.category) {
        return Err(CatalogError::UnknownCategory {
            id: product.id.clone(),
            category: product.category.clone(),
        });
    }

    Ok(())
}
