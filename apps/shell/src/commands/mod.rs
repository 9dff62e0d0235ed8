//! # Commands Module
//!
//! Handlers the shell calls for each parsed [`Command`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Response, help)
//! ├── catalog.rs   ◄─── Product grid with in-cart flags
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Checkout stub
//! ```
//!
//! ## How Commands Work
//! Each handler takes only the state it needs and returns a serializable
//! response:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartSession, config: &ShopConfig) -> CartResponse
//!
//! // Needs the catalog too
//! fn add_to_cart(catalog: &CatalogState, cart: &CartSession, config: &ShopConfig, name: &str)
//!     -> ShellResult<CartResponse>
//! ```
//!
//! [`Command`]: crate::input::Command

pub mod cart;
pub mod catalog;
pub mod checkout;

use serde::Serialize;

use crate::input::USAGE;

pub use cart::{CartLineView, CartResponse};
pub use catalog::{CatalogResponse, CategoryView, PlantView};

/// One usage line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelpEntry {
    pub usage: String,
    pub description: String,
}

/// The command list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelpResponse {
    pub commands: Vec<HelpEntry>,
}

/// Lists every command.
pub fn help() -> HelpResponse {
    HelpResponse {
        commands: USAGE
            .iter()
            .map(|(usage, description)| HelpEntry {
                usage: usage.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

/// Anything a command can hand back for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Catalog(CatalogResponse),
    Cart(CartResponse),
    Help(HelpResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        let response = help();
        assert_eq!(response.commands.len(), USAGE.len());
        assert!(response.commands.iter().any(|c| c.usage == "set <name> <qty>"));
    }
}
