//! State containers for the storefront UI.
//!
//! Each store follows the same contract: a state struct, a typed action
//! enum, and a pure reducer implementing [`Reduce`]. The store handle owns
//! the state and applies actions through `&mut self`, so observers can never
//! see a half-applied transition - the reducer returns the next state
//! wholesale.
//!
//! Stores never reach into each other. A flow that touches two stores (for
//! example "move this wishlist item into the cart") is two dispatches issued
//! by the caller.

pub mod cart;
pub mod filter;
pub mod theme;
pub mod wishlist;

/// A pure state transition: consume the current state and one action, return
/// the next state.
///
/// Reducers are total - every action is defined for every state, using
/// clamping and no-op semantics instead of failure.
pub trait Reduce: Sized {
    type Action;

    #[must_use]
    fn reduce(self, action: Self::Action) -> Self;
}
