//! # Checkout Command
//!
//! Placeholder until payment exists. It never changes the cart.

use tracing::info;

use crate::error::{ShellError, ShellResult};
use crate::state::{CartSession, ShopConfig};

/// Starts checkout.
///
/// ## Returns
/// - `EmptyCart` when there is nothing to buy
/// - `CheckoutUnavailable` with the formatted total otherwise
pub fn checkout(cart: &CartSession, config: &ShopConfig) -> ShellResult<()> {
    let normalizer = config.normalizer();
    let summary = cart.with_cart(|state| normalizer.summarize(state));

    if summary.item_count == 0 {
        return Err(ShellError::EmptyCart);
    }

    let total = config.format_money(summary.total);
    info!(total = %total, lines = summary.item_count, "checkout requested");

    Err(ShellError::CheckoutUnavailable { total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_core::CatalogItem;

    #[test]
    fn test_checkout_empty_cart() {
        let cart = CartSession::new();
        assert!(matches!(
            checkout(&cart, &ShopConfig::default()),
            Err(ShellError::EmptyCart)
        ));
    }

    #[test]
    fn test_checkout_reports_total_and_keeps_cart() {
        let cart = CartSession::new();
        cart.with_cart_mut(|store| {
            store.add(CatalogItem::new("Rubber Plant", "$17"));
            store.set_quantity("Rubber Plant", 2);
        });

        match checkout(&cart, &ShopConfig::default()) {
            Err(ShellError::CheckoutUnavailable { total }) => assert_eq!(total, "$34.00"),
            other => panic!("unexpected checkout result: {:?}", other),
        }
        assert_eq!(cart.with_cart(|state| state.quantity_of("Rubber Plant")), Some(2));
    }
}
