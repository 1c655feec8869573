//! Meena State - client-side stores and derived product views.
//!
//! This crate is the state core behind the Meena storefront UI: the cart,
//! wishlist, filter, and theme stores, the immutable product catalog they
//! read from, and the pure pipeline that derives the product list a page
//! should display.
//!
//! # Architecture
//!
//! Every store is an explicit state container: a plain state struct, a typed
//! action enum, and a pure reducer ([`store::Reduce`]). The store handle owns
//! its state, applies one action at a time through `&mut self`, and exposes
//! read accessors. Stores never write to each other; cross-store flows (for
//! example moving a wishlist item into the cart) are composed by the caller.
//!
//! The composition root is [`app::AppState`], which owns the catalog and the
//! four store handles and is passed explicitly to consumers - there is no
//! ambient global.
//!
//! Derived values (cart count and total, the filtered product view) are
//! recomputed on demand; the catalog is a few dozen records, so there is no
//! caching layer to invalidate.
//!
//! # Modules
//!
//! - [`catalog`] - Immutable product/category/brand catalog, loaded once
//! - [`store`] - Cart, wishlist, filter, and theme stores
//! - [`view`] - The pure filter/sort pipeline producing the visible products
//! - [`app`] - Composition root wiring catalog and stores together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod store;
pub mod view;

pub use app::AppState;
pub use catalog::{Catalog, CatalogError};
pub use store::cart::{CartAction, CartLine, CartState, CartStore};
pub use store::filter::{FilterAction, FilterState, FilterStore, Selection, SortKey};
pub use store::theme::{
    MemoryPreferences, PreferenceStore, SystemTheme, THEME_STORAGE_KEY, ThemeAction, ThemeMode,
    ThemeState, ThemeStore,
};
pub use store::wishlist::{WishlistAction, WishlistState, WishlistStore};
pub use view::{ViewOverrides, derive_view};
