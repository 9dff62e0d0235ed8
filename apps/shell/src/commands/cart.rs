//! # Cart Commands
//!
//! Handlers for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │  (stub, checkout.rs)   │
//! │  │  Cart    │◄────│          │     │          │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   increment_item / decrement_item                       │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                                                                         │
//! │  Removing the last line (or decrementing it to zero) returns to Empty. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every handler returns the whole cart so the caller can re-render from one
//! response.

use serde::Serialize;
use tracing::debug;

use nursery_core::{CartLineItem, CartState, CartSummary, PriceNormalizer};

use crate::error::{ShellError, ShellResult};
use crate::state::{CartSession, CatalogState, ShopConfig};

/// One cart line as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Unit price as the catalog wrote it.
    pub unit_price: String,
    pub quantity: u32,
    /// Line total in cents.
    pub line_total: i64,
    pub line_total_display: String,
}

impl CartLineView {
    fn from_line(line: &CartLineItem, normalizer: &PriceNormalizer, config: &ShopConfig) -> Self {
        let total = normalizer.line_total(line);
        CartLineView {
            name: line.name.clone(),
            image: line.image.clone(),
            description: line.description.clone(),
            unit_price: line.price.display_with(&config.currency_symbol),
            quantity: line.quantity,
            line_total: total.cents(),
            line_total_display: config.format_money(total),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineView>,
    pub summary: CartSummary,
    pub total_display: String,
    /// Session version this response was built from.
    pub version: u64,
}

impl CartResponse {
    fn build(state: &CartState, config: &ShopConfig, version: u64) -> Self {
        let normalizer = config.normalizer();
        let summary = normalizer.summarize(state);

        CartResponse {
            items: state
                .items()
                .iter()
                .map(|line| CartLineView::from_line(line, &normalizer, config))
                .collect(),
            total_display: config.format_money(summary.total),
            summary,
            version,
        }
    }
}

fn snapshot(cart: &CartSession, config: &ShopConfig) -> CartResponse {
    let version = cart.version();
    cart.with_cart(|state| CartResponse::build(state, config, version))
}

/// Gets the current cart contents.
///
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  CART                                              3 plants    │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Snake Plant        $15    x2                    $30.00        │
/// │  Jasmine            $18    x1                    $18.00        │
/// ├────────────────────────────────────────────────────────────────┤
/// │  TOTAL                                           $48.00        │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartSession, config: &ShopConfig) -> CartResponse {
    debug!("get_cart command");
    snapshot(cart, config)
}

/// Adds one of a catalog plant to the cart.
///
/// ## Behavior
/// - Already in cart: quantity goes up by one
/// - Not in cart: new line with quantity 1
/// - Not in the catalog: `UnknownItem`, cart untouched
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartSession,
    config: &ShopConfig,
    name: &str,
) -> ShellResult<CartResponse> {
    debug!(name = %name, "add_to_cart command");

    let item = catalog
        .find(name)
        .cloned()
        .ok_or_else(|| ShellError::UnknownItem(name.to_string()))?;

    cart.with_cart_mut(|store| {
        store.add(item);
    });

    Ok(snapshot(cart, config))
}

/// Raises a line's quantity by one.
pub fn increment_item(cart: &CartSession, config: &ShopConfig, name: &str) -> CartResponse {
    debug!(name = %name, "increment_item command");

    cart.with_cart_mut(|store| {
        store.increment(name);
    });

    snapshot(cart, config)
}

/// Lowers a line's quantity by one, removing it at zero.
pub fn decrement_item(cart: &CartSession, config: &ShopConfig, name: &str) -> CartResponse {
    debug!(name = %name, "decrement_item command");

    cart.with_cart_mut(|store| {
        store.decrement(name);
    });

    snapshot(cart, config)
}

/// Sets a line's quantity.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Name not in cart: nothing changes
pub fn update_cart_item(
    cart: &CartSession,
    config: &ShopConfig,
    name: &str,
    quantity: i64,
) -> CartResponse {
    debug!(name = %name, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|store| {
        store.set_quantity(name, quantity);
    });

    snapshot(cart, config)
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartSession, config: &ShopConfig, name: &str) -> CartResponse {
    debug!(name = %name, "remove_from_cart command");

    cart.with_cart_mut(|store| {
        store.remove(name);
    });

    snapshot(cart, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CatalogState, CartSession, ShopConfig) {
        (
            CatalogState::bundled().unwrap(),
            CartSession::new(),
            ShopConfig::default(),
        )
    }

    #[test]
    fn test_add_twice_then_view() {
        let (catalog, cart, config) = setup();

        add_to_cart(&catalog, &cart, &config, "Snake Plant").unwrap();
        let response = add_to_cart(&catalog, &cart, &config, "Snake Plant").unwrap();

        assert_eq!(response.items.len(), 1);
        let line = &response.items[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, "$15");
        assert_eq!(line.line_total, 3000);
        assert_eq!(line.line_total_display, "$30.00");
        assert_eq!(response.total_display, "$30.00");
        assert_eq!(response.summary.total_quantity, 2);
        assert_eq!(response.version, 2);
    }

    #[test]
    fn test_add_unknown_plant_leaves_cart_alone() {
        let (catalog, cart, config) = setup();

        let result = add_to_cart(&catalog, &cart, &config, "Venus Flytrap");
        assert!(matches!(result, Err(ShellError::UnknownItem(name)) if name == "Venus Flytrap"));
        assert!(get_cart(&cart, &config).items.is_empty());
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let (catalog, cart, config) = setup();
        add_to_cart(&catalog, &cart, &config, "Jasmine").unwrap();

        let response = increment_item(&cart, &config, "Jasmine");
        assert_eq!(response.items[0].quantity, 2);

        decrement_item(&cart, &config, "Jasmine");
        let response = decrement_item(&cart, &config, "Jasmine");
        assert!(response.items.is_empty());
        assert_eq!(response.total_display, "$0.00");
    }

    #[test]
    fn test_update_quantity_and_remove() {
        let (catalog, cart, config) = setup();
        add_to_cart(&catalog, &cart, &config, "Boston Fern").unwrap();
        add_to_cart(&catalog, &cart, &config, "Peace Lily").unwrap();

        let response = update_cart_item(&cart, &config, "Boston Fern", 3);
        assert_eq!(response.total_display, "$78.00");

        let response = update_cart_item(&cart, &config, "Boston Fern", -1);
        assert_eq!(response.items.len(), 1);

        let response = remove_from_cart(&cart, &config, "Peace Lily");
        assert!(response.items.is_empty());

        let again = remove_from_cart(&cart, &config, "Peace Lily");
        assert_eq!(again.items, response.items);
    }

    #[test]
    fn test_cart_response_json_shape() {
        let (catalog, cart, config) = setup();
        add_to_cart(&catalog, &cart, &config, "Aloe Vera Medicinal").unwrap();

        let json = serde_json::to_value(get_cart(&cart, &config)).unwrap();
        assert_eq!(json["items"][0]["name"], "Aloe Vera Medicinal");
        assert_eq!(json["items"][0]["lineTotal"], 1400);
        assert_eq!(json["summary"]["totalQuantity"], 1);
        assert_eq!(json["totalDisplay"], "$14.00");
    }
}
