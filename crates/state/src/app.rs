//! Application state composition root.
//!
//! Owns the catalog and the four store handles and is passed explicitly to
//! every consumer - there is no ambient global store. Pages read derived
//! data through [`AppState::visible_products`] and mutate through the public
//! store handles; cross-store flows are composed here by callers, never
//! inside a store.

use meena_core::Product;

use crate::catalog::Catalog;
use crate::store::cart::CartStore;
use crate::store::filter::FilterStore;
use crate::store::theme::{PreferenceStore, SystemTheme, ThemeStore};
use crate::store::wishlist::WishlistStore;
use crate::view::{ViewOverrides, derive_view};

/// All client-side state behind the storefront UI.
///
/// Store handles are public: mutation goes through `&mut self` on the
/// relevant store, which also lets callers touch two stores in one flow
/// (e.g., move a wishlist item into the cart).
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub filter: FilterStore,
    pub theme: ThemeStore,
}

impl AppState {
    /// Wire up the stores around an already-loaded catalog.
    ///
    /// The theme store is left uninitialized; call
    /// [`ThemeStore::initialize`] once the collaborators are ready to be
    /// read.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        preferences: Box<dyn PreferenceStore>,
        system: Box<dyn SystemTheme>,
    ) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
            filter: FilterStore::new(),
            theme: ThemeStore::new(preferences, system),
        }
    }

    /// The read-only catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The ordered product list for the current filters plus any page-local
    /// overrides.
    #[must_use]
    pub fn visible_products(&self, overrides: ViewOverrides<'_>) -> Vec<Product> {
        derive_view(&self.catalog, self.filter.state(), overrides)
    }
}
