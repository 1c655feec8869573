//! Core types for the Meena storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod slug;

pub use id::*;
pub use price::{Price, format_price};
pub use product::{Brand, Category, Gender, Product};
pub use slug::Slug;
