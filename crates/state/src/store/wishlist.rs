//! The wishlist store.

use meena_core::{Product, ProductId};

use super::Reduce;

/// Wishlist state: favorited product snapshots, deduped by id, in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistState {
    pub items: Vec<Product>,
}

impl WishlistState {
    /// Whether a product id is in the wishlist.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Wishlist intents. All actions are total: duplicate adds and missing
/// removes are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Insert the product if absent; idempotent.
    Add(Product),
    /// Delete the product if present.
    Remove(ProductId),
    /// Remove if present, add otherwise. A single dispatch - observers never
    /// see an intermediate state.
    Toggle(Product),
}

impl Reduce for WishlistState {
    type Action = WishlistAction;

    fn reduce(mut self, action: WishlistAction) -> Self {
        match action {
            WishlistAction::Add(product) => {
                if !self.contains(&product.id) {
                    self.items.push(product);
                }
            }
            WishlistAction::Remove(id) => {
                self.items.retain(|item| item.id != id);
            }
            WishlistAction::Toggle(product) => {
                if let Some(position) = self.items.iter().position(|item| item.id == product.id) {
                    self.items.remove(position);
                } else {
                    self.items.push(product);
                }
            }
        }
        self
    }
}

/// Owning handle for the wishlist state.
#[derive(Debug, Default)]
pub struct WishlistStore {
    state: WishlistState,
}

impl WishlistStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action to the wishlist.
    pub fn dispatch(&mut self, action: WishlistAction) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Add a product; no-op if already present.
    pub fn add(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "Adding product to wishlist");
        self.dispatch(WishlistAction::Add(product));
    }

    /// Remove a product; no-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        tracing::debug!(product_id = %id, "Removing product from wishlist");
        self.dispatch(WishlistAction::Remove(id));
    }

    /// Toggle membership. This is the primary UI operation behind the heart
    /// icon.
    pub fn toggle(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "Toggling wishlist membership");
        self.dispatch(WishlistAction::Toggle(product));
    }

    /// Membership predicate driving the filled vs outline icon.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.state.contains(id)
    }

    #[must_use]
    pub fn state(&self) -> &WishlistState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.state.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meena_core::{Gender, Price, Slug};
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Watch {id}"),
            name_ar: format!("ساعة {id}"),
            brand: "Cartier".to_owned(),
            category: Slug::raw("luxury"),
            gender: Gender::Women,
            price: Price::from(900),
            original_price: None,
            rating: Decimal::new(47, 1),
            reviews: 40,
            in_stock: true,
            image: String::new(),
            description: String::new(),
            features: vec![],
            is_new: None,
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(product("a"));
        wishlist.add(product("a"));

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(product("other"));

        wishlist.toggle(product("a"));
        assert!(wishlist.contains(&ProductId::new("a")));

        wishlist.toggle(product("a"));
        assert!(!wishlist.contains(&ProductId::new("a")));

        // Unrelated entries are untouched.
        assert!(wishlist.contains(&ProductId::new("other")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(product("a"));
        wishlist.remove(ProductId::new("missing"));

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = WishlistStore::new();
        wishlist.add(product("c"));
        wishlist.add(product("a"));
        wishlist.add(product("b"));

        let ids: Vec<&str> = wishlist.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
