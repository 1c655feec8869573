//! The shopping cart store.

use meena_core::{Price, Product, ProductId};

use super::Reduce;

/// One cart entry: a product snapshot taken at insertion time plus a
/// quantity.
///
/// The snapshot is deliberate - catalog changes after insertion do not
/// retroactively reprice lines already in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    /// Always >= 1; a line whose quantity reaches 0 is removed instead.
    pub quantity: u32,
}

/// Cart state: lines in insertion order plus the sidebar visibility flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub is_open: bool,
}

impl CartState {
    /// Total number of items: the sum of line quantities, saturating at
    /// `u32::MAX` like the quantities themselves.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Cart total: the sum of snapshot price times quantity. No rounding is
    /// applied at this layer.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .map(|line| line.product.price * line.quantity)
            .sum()
    }

    /// Whether a product id has a line in the cart.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.lines.iter().any(|line| &line.product.id == id)
    }
}

/// Cart intents. Every action always succeeds; missing lines are no-ops and
/// negative quantities clamp to zero.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Increment the product's line, inserting it with quantity 1 if absent.
    Add(Product),
    /// Delete the line if present.
    Remove(ProductId),
    /// Set a line's quantity. Values below 0 clamp to 0, and 0 removes the
    /// line. There is no business-level upper bound; quantities saturate at
    /// the representation limit.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Show or hide the cart sidebar.
    SetOpen(bool),
    /// Flip the cart sidebar visibility.
    ToggleOpen,
}

impl Reduce for CartState {
    type Action = CartAction;

    fn reduce(mut self, action: CartAction) -> Self {
        match action {
            CartAction::Add(product) => {
                if let Some(line) = self
                    .lines
                    .iter_mut()
                    .find(|line| line.product.id == product.id)
                {
                    line.quantity = line.quantity.saturating_add(1);
                } else {
                    self.lines.push(CartLine {
                        product,
                        quantity: 1,
                    });
                }
            }
            CartAction::Remove(id) => {
                self.lines.retain(|line| line.product.id != id);
            }
            CartAction::SetQuantity { id, quantity } => {
                let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
                if clamped == 0 {
                    self.lines.retain(|line| line.product.id != id);
                } else if let Some(line) =
                    self.lines.iter_mut().find(|line| line.product.id == id)
                {
                    line.quantity = clamped;
                }
            }
            CartAction::SetOpen(open) => self.is_open = open,
            CartAction::ToggleOpen => self.is_open = !self.is_open,
        }
        self
    }
}

/// Owning handle for the cart state.
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action to the cart.
    pub fn dispatch(&mut self, action: CartAction) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Add one unit of a product.
    pub fn add(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "Adding product to cart");
        self.dispatch(CartAction::Add(product));
    }

    /// Remove a product's line entirely. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        tracing::debug!(product_id = %id, "Removing product from cart");
        self.dispatch(CartAction::Remove(id));
    }

    /// Set a line's quantity; see [`CartAction::SetQuantity`].
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        tracing::debug!(product_id = %id, quantity, "Updating cart quantity");
        self.dispatch(CartAction::SetQuantity { id, quantity });
    }

    pub fn set_open(&mut self, open: bool) {
        self.dispatch(CartAction::SetOpen(open));
    }

    pub fn toggle_open(&mut self) {
        self.dispatch(CartAction::ToggleOpen);
    }

    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.state.count()
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.state.total()
    }
}
