//! # Totals
//!
//! Per-line and cart-wide totals, computed from cart state on every read.
//!
//! ## Round Once, at the End
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line_total   = round( normalize(price) × quantity )                    │
//! │  cart_total   = round( Σ normalize(price) × quantity )                  │
//! │                                                                         │
//! │  NOT  Σ round(line): summing rounded lines can drift from the true     │
//! │  total by up to half a cent per line:                                   │
//! │                                                                         │
//! │    3 lines at $0.005 each                                              │
//! │      Σ round(line) = $0.01 + $0.01 + $0.01 = $0.03                     │
//! │      round(Σ line)  = round($0.015)        = $0.02   ← displayed total │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

use crate::cart::{CartLineItem, CartState};
use crate::money::{Money, NormalizedAmount, PriceNormalizer};

/// Totals the presentation layer shows next to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    /// Distinct lines.
    pub item_count: usize,
    /// Sum of quantities (cart badge).
    pub total_quantity: u64,
    /// Grand total, rounded once.
    pub total: Money,
}

impl PriceNormalizer {
    /// `normalize(price) × quantity`, unrounded.
    pub fn line_total_exact(&self, item: &CartLineItem) -> NormalizedAmount {
        let unit = self.normalize(&item.price);
        let quantity = Decimal::from(item.quantity);

        unit.checked_mul(quantity).unwrap_or_else(|| {
            warn!(name = %item.name, quantity = item.quantity, "line total overflowed, saturating");
            Decimal::MAX
        })
    }

    /// Line total rounded half-up to cents, for display.
    pub fn line_total(&self, item: &CartLineItem) -> Money {
        Money::from_decimal(self.line_total_exact(item))
    }

    /// Sum of unrounded line totals.
    pub fn cart_total_exact(&self, state: &CartState) -> NormalizedAmount {
        state
            .items()
            .iter()
            .map(|item| self.line_total_exact(item))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Cart total, rounded once after summing.
    pub fn cart_total(&self, state: &CartState) -> Money {
        Money::from_decimal(self.cart_total_exact(state))
    }

    /// Counts and grand total in one pass over the state.
    pub fn summarize(&self, state: &CartState) -> CartSummary {
        CartSummary {
            item_count: state.len(),
            total_quantity: state.total_quantity(),
            total: self.cart_total(state),
        }
    }
}

/// Line total with the default `$` marker.
pub fn line_total(item: &CartLineItem) -> Money {
    PriceNormalizer::default().line_total(item)
}

/// Cart total with the default `$` marker.
///
/// ## Example
/// ```rust
/// use nursery_core::{cart_total, CartStore, CatalogItem};
///
/// let mut store = CartStore::new();
/// store.add(CatalogItem::new("A", 10.0));
/// store.set_quantity("A", 3);
/// store.add(CatalogItem::new("B", "$5.50"));
///
/// assert_eq!(cart_total(store.state()).to_string(), "$35.50");
/// ```
pub fn cart_total(state: &CartState) -> Money {
    PriceNormalizer::default().cart_total(state)
}

/// Summary with the default `$` marker.
pub fn summarize(state: &CartState) -> CartSummary {
    PriceNormalizer::default().summarize(state)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::CatalogItem;
    use crate::price::PriceRepresentation;

    #[test]
    fn test_empty_cart_total_is_zero() {
        let state = CartState::new();
        assert_eq!(cart_total(&state), Money::zero());
        assert_eq!(cart_total(&state).to_string(), "$0.00");
    }

    #[test]
    fn test_snake_plant_added_twice() {
        let mut store = CartStore::new();
        store.add(CatalogItem::new("Snake Plant", "$15"));
        store.add(CatalogItem::new("Snake Plant", "$15"));

        let line = store.state().get("Snake Plant").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line_total(line).cents(), 3000);
        assert_eq!(cart_total(store.state()).cents(), 3000);
    }

    #[test]
    fn test_mixed_numeric_and_text_prices() {
        let mut store = CartStore::new();
        store.add(CatalogItem::new("A", 10.0));
        store.set_quantity("A", 3);
        store.add(CatalogItem::new("B", "$5.50"));

        assert_eq!(cart_total(store.state()).cents(), 3550);
    }

    #[test]
    fn test_unparseable_and_absent_prices_count_as_zero() {
        let mut store = CartStore::new();
        store.add(CatalogItem::new("Mystery", "abc"));
        store.add(CatalogItem::new("Free", PriceRepresentation::Absent));
        store.add(CatalogItem::new("Fern", "$20"));
        store.set_quantity("Mystery", 4);

        let mystery = store.state().get("Mystery").unwrap();
        assert_eq!(line_total(mystery), Money::zero());
        assert_eq!(cart_total(store.state()).cents(), 2000);
    }

    #[test]
    fn test_sum_then_round() {
        let mut store = CartStore::new();
        for name in ["X", "Y", "Z"] {
            store.add(CatalogItem::new(name, "0.005"));
        }

        let rounded_lines: i64 = store
            .state()
            .items()
            .iter()
            .map(|item| line_total(item).cents())
            .sum();
        assert_eq!(rounded_lines, 3);

        // 0.015 rounds half-up to 0.02
        assert_eq!(cart_total(store.state()).cents(), 2);
    }

    #[test]
    fn test_decimal_prices_do_not_drift() {
        let mut store = CartStore::new();
        store.add(CatalogItem::new("Tea", 0.1));
        store.add(CatalogItem::new("Mint", 0.2));

        assert_eq!(
            PriceNormalizer::default().cart_total_exact(store.state()),
            Decimal::new(3, 1)
        );
    }

    #[test]
    fn test_custom_marker_totals() {
        let mut store = CartStore::new();
        store.add(CatalogItem::new("Lavender", "€20"));
        store.add(CatalogItem::new("Jasmine", "$18"));

        let euro = PriceNormalizer::new('€');
        assert_eq!(euro.cart_total(store.state()).cents(), 2000);
        assert_eq!(cart_total(store.state()).cents(), 1800);
    }

    #[test]
    fn test_summarize() {
        let mut store = CartStore::new();
        store.add(CatalogItem::new("Snake Plant", "$15"));
        store.add(CatalogItem::new("Snake Plant", "$15"));
        store.add(CatalogItem::new("Jasmine", 18.0));

        let summary = summarize(store.state());
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total.cents(), 4800);
    }
}
