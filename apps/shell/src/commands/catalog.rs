//! # Catalog Commands
//!
//! The product grid: every plant by category, with an "in cart" flag read
//! from the current cart rather than tracked on its own.

use serde::Serialize;
use tracing::debug;

use crate::state::{CartSession, CatalogState, ShopConfig};

/// One plant card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantView {
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: String,
    /// True while the plant has a cart line. The add button is disabled then.
    pub in_cart: bool,
}

/// A category heading and its plants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category: String,
    pub plants: Vec<PlantView>,
}

/// Product grid plus the header badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub store_name: String,
    pub tagline: String,
    pub categories: Vec<CategoryView>,
    /// Sum of quantities in the cart.
    pub cart_badge: u64,
}

/// Lists the catalog with cart flags.
pub fn list_plants(
    catalog: &CatalogState,
    cart: &CartSession,
    config: &ShopConfig,
) -> CatalogResponse {
    debug!("list_plants command");

    cart.with_cart(|state| CatalogResponse {
        store_name: config.store_name.clone(),
        tagline: config.tagline.clone(),
        categories: catalog
            .catalog()
            .categories()
            .iter()
            .map(|category| CategoryView {
                category: category.category.clone(),
                plants: category
                    .plants
                    .iter()
                    .map(|plant| PlantView {
                        name: plant.name.clone(),
                        image: plant.image.clone(),
                        description: plant.description.clone(),
                        price: plant.price.display_with(&config.currency_symbol),
                        in_cart: state.contains(&plant.name),
                    })
                    .collect(),
            })
            .collect(),
        cart_badge: state.total_quantity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, remove_from_cart};

    fn flag(response: &CatalogResponse, name: &str) -> bool {
        response
            .categories
            .iter()
            .flat_map(|c| c.plants.iter())
            .find(|p| p.name == name)
            .map(|p| p.in_cart)
            .unwrap_or(false)
    }

    #[test]
    fn test_in_cart_flag_follows_cart() {
        let catalog = CatalogState::bundled().unwrap();
        let cart = CartSession::new();
        let config = ShopConfig::default();

        let response = list_plants(&catalog, &cart, &config);
        assert!(!flag(&response, "Lavender Aromatic"));
        assert_eq!(response.cart_badge, 0);

        add_to_cart(&catalog, &cart, &config, "Lavender Aromatic").unwrap();
        add_to_cart(&catalog, &cart, &config, "Lavender Aromatic").unwrap();
        let response = list_plants(&catalog, &cart, &config);
        assert!(flag(&response, "Lavender Aromatic"));
        assert!(!flag(&response, "Jasmine"));
        assert_eq!(response.cart_badge, 2);

        remove_from_cart(&cart, &config, "Lavender Aromatic");
        let response = list_plants(&catalog, &cart, &config);
        assert!(!flag(&response, "Lavender Aromatic"));
    }

    #[test]
    fn test_categories_keep_catalog_order() {
        let catalog = CatalogState::bundled().unwrap();
        let response = list_plants(&catalog, &CartSession::new(), &ShopConfig::default());

        assert_eq!(response.store_name, "Paradise Nursery");
        assert_eq!(response.categories.len(), 3);
        assert_eq!(response.categories[0].plants[0].name, "Snake Plant");
        assert_eq!(response.categories[0].plants[0].price, "$15");
    }
}
