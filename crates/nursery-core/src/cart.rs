//! # Cart
//!
//! The cart state machine: what is in the cart, and the transitions that
//! change it.
//!
//! ## Line Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   absent ──add──► qty = 1 ──add / increment──► qty = N                 │
//! │     ▲                                             │                     │
//! │     │                              decrement (N > 1) → qty = N - 1      │
//! │     │                                             │                     │
//! │     └── decrement at 1 │ remove │ set_quantity ≤ 0 ┘                    │
//! │                                                                         │
//! │  No tombstones: re-adding a removed plant starts again at qty = 1.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `name`
//! - Every line has `quantity ≥ 1`
//! - Lines keep insertion order
//!
//! Transitions are pure: [`CartState::apply`] consumes the previous state
//! and returns the next one. [`CartStore`] holds the current state for a
//! single cart and is what the presentation layer talks to.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::CatalogItem;
use crate::price::PriceRepresentation;

// =============================================================================
// Line Item
// =============================================================================

/// One plant in the cart.
///
/// The price is kept exactly as the catalog supplied it; see
/// [`crate::money::normalize`] for how it is read.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Cart key.
    pub name: String,

    /// Raw per-unit price, as first added.
    #[ts(type = "number | string | null")]
    pub price: PriceRepresentation,

    /// Always ≥ 1.
    pub quantity: u32,

    pub image: Option<String>,

    pub description: Option<String>,
}

impl CartLineItem {
    fn from_catalog(item: CatalogItem) -> Self {
        CartLineItem {
            name: item.name,
            price: item.price,
            quantity: 1,
            image: item.image,
            description: item.description,
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// An intent raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit, or append a new line at quantity 1.
    AddItem { item: CatalogItem },
    /// Drop the line entirely.
    RemoveItem { name: String },
    /// Absolute set; ≤ 0 removes.
    UpdateQuantity { name: String, quantity: i64 },
    /// Empty the cart.
    Clear,
}

// =============================================================================
// Cart State
// =============================================================================

/// The ordered set of lines in one cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.name == name)
    }

    /// Returns true if `name` is in the cart.
    ///
    /// This is what drives the "Added to Cart" state on the product grid.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Current quantity of `name`, if present.
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.get(name).map(|line| line.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines (the cart badge count).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Applies one action and returns the resulting state.
    ///
    /// ## Example
    /// ```rust
    /// use nursery_core::{CartAction, CartState, CatalogItem};
    ///
    /// let state = CartState::new()
    ///     .apply(CartAction::AddItem { item: CatalogItem::new("Jasmine", "$18") })
    ///     .apply(CartAction::AddItem { item: CatalogItem::new("Jasmine", "$18") });
    /// assert_eq!(state.quantity_of("Jasmine"), Some(2));
    ///
    /// let state = state.apply(CartAction::UpdateQuantity { name: "Jasmine".into(), quantity: 0 });
    /// assert!(state.is_empty());
    /// ```
    pub fn apply(self, action: CartAction) -> CartState {
        match action {
            CartAction::AddItem { item } => self.with_added(item),
            CartAction::RemoveItem { name } => self.without(&name),
            CartAction::UpdateQuantity { name, quantity } => self.with_quantity(&name, quantity),
            CartAction::Clear => CartState::new(),
        }
    }

    fn with_added(mut self, item: CatalogItem) -> Self {
        match self.items.iter_mut().find(|line| line.name == item.name) {
            // First-seen price and metadata win; the new descriptor is dropped.
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                debug!(name = %line.name, quantity = line.quantity, "cart line incremented");
            }
            None => {
                debug!(name = %item.name, "cart line added");
                self.items.push(CartLineItem::from_catalog(item));
            }
        }
        self
    }

    fn without(mut self, name: &str) -> Self {
        let before = self.items.len();
        self.items.retain(|line| line.name != name);

        if self.items.len() == before {
            debug!(name = %name, "remove ignored, not in cart");
        } else {
            debug!(name = %name, "cart line removed");
        }
        self
    }

    fn with_quantity(mut self, name: &str, quantity: i64) -> Self {
        if quantity <= 0 {
            return if self.contains(name) {
                self.without(name)
            } else {
                debug!(name = %name, "set quantity ignored, not in cart");
                self
            };
        }

        match self.items.iter_mut().find(|line| line.name == name) {
            Some(line) => {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                debug!(name = %name, quantity = line.quantity, "cart line quantity set");
            }
            None => debug!(name = %name, "set quantity ignored, not in cart"),
        }
        self
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Holds the current state of one cart.
///
/// Each store is independent; nothing here is global.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cart.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Applies an action and returns the new state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let previous = std::mem::take(&mut self.state);
        self.state = previous.apply(action);
        &self.state
    }

    /// Adds one unit of `item`.
    pub fn add(&mut self, item: CatalogItem) -> &CartState {
        self.dispatch(CartAction::AddItem { item })
    }

    /// Removes `name`; a no-op if it is not in the cart.
    pub fn remove(&mut self, name: &str) -> &CartState {
        self.dispatch(CartAction::RemoveItem {
            name: name.to_string(),
        })
    }

    /// Sets the quantity of `name` to exactly `quantity`.
    ///
    /// ## Behavior
    /// - Unknown `name`: no-op
    /// - `quantity ≤ 0`: same as [`CartStore::remove`]
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> &CartState {
        self.dispatch(CartAction::UpdateQuantity {
            name: name.to_string(),
            quantity,
        })
    }

    /// The "+" button: current quantity plus one.
    pub fn increment(&mut self, name: &str) -> &CartState {
        match self.state.quantity_of(name) {
            Some(quantity) => self.set_quantity(name, i64::from(quantity) + 1),
            None => &self.state,
        }
    }

    /// The "−" button: current quantity minus one, removing the line at 1.
    pub fn decrement(&mut self, name: &str) -> &CartState {
        match self.state.quantity_of(name) {
            Some(quantity) if quantity > 1 => self.set_quantity(name, i64::from(quantity) - 1),
            Some(_) => self.remove(name),
            None => &self.state,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> &CartState {
        self.dispatch(CartAction::Clear)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
