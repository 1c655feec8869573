//! Meena Core - Shared types library.
//!
//! This crate provides the domain types used across the Meena storefront
//! state core:
//! - `state` - Stores (cart, wishlist, filter, theme) and the product view
//!   pipeline
//! - `integration-tests` - Cross-store test flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and slugs, plus
//!   the catalog entity records (`Product`, `Category`, `Brand`)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
