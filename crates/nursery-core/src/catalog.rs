//! # Catalog
//!
//! The read-only list of plants the storefront offers, grouped into
//! categories.
//!
//! ## JSON Shape
//! ```json
//! [
//!   {
//!     "category": "Air Purifying Plants",
//!     "plants": [
//!       { "name": "Snake Plant", "image": "https://…", "description": "…", "cost": "$15" }
//!     ]
//!   }
//! ]
//! ```
//! `cost` is accepted as an alias of `price`; the price may be a number, a
//! string, `null`, or missing.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::price::PriceRepresentation;
use crate::validation::{validate_category_name, validate_item_name, ValidationResult};

// =============================================================================
// Catalog Item
// =============================================================================

/// A plant as the catalog describes it. Also the descriptor passed to
/// [`crate::cart::CartStore::add`].
///
/// Serializes with a `price` key; reading also accepts `cost`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Display name, unique across the catalog.
    pub name: String,

    /// Image URL, passed through untouched.
    pub image: Option<String>,

    /// Short blurb, passed through untouched.
    pub description: Option<String>,

    /// Raw per-unit price.
    #[ts(type = "number | string | null")]
    pub price: PriceRepresentation,
}

/// Wire form of a catalog entry. Kept apart from [`CatalogItem`] so the
/// `cost` alias stays out of the TypeScript bindings.
#[derive(Deserialize)]
struct CatalogItemRecord {
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "cost")]
    price: PriceRepresentation,
}

impl From<CatalogItemRecord> for CatalogItem {
    fn from(record: CatalogItemRecord) -> Self {
        CatalogItem {
            name: record.name,
            image: record.image,
            description: record.description,
            price: record.price,
        }
    }
}

impl<'de> Deserialize<'de> for CatalogItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        CatalogItemRecord::deserialize(deserializer).map(CatalogItem::from)
    }
}

impl CatalogItem {
    /// Creates an item with no display metadata.
    pub fn new(name: impl Into<String>, price: impl Into<PriceRepresentation>) -> Self {
        CatalogItem {
            name: name.into(),
            image: None,
            description: None,
            price: price.into(),
        }
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Category
// =============================================================================

/// A titled group of plants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogCategory {
    pub category: String,
    #[serde(default)]
    pub plants: Vec<CatalogItem>,
}

// =============================================================================
// Catalog
// =============================================================================

/// All categories, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<CatalogCategory>,
}

impl Catalog {
    /// Builds a catalog from categories, validating names.
    pub fn new(categories: Vec<CatalogCategory>) -> ValidationResult<Self> {
        let catalog = Catalog { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a JSON catalog.
    ///
    /// ## Example
    /// ```rust
    /// use nursery_core::Catalog;
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{"category": "Aromatic", "plants": [{"name": "Jasmine", "cost": "$18"}]}]"#,
    /// ).unwrap();
    /// assert!(catalog.find("Jasmine").is_some());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        debug!(
            categories = catalog.categories.len(),
            plants = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Checks every name is present, not overlong, and unique.
    ///
    /// Plant names are cart keys, so two catalog entries with the same name
    /// would silently share one cart line.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut seen = HashSet::new();

        for category in &self.categories {
            validate_category_name(&category.category)?;

            for item in &category.plants {
                validate_item_name(&item.name)?;

                if !seen.insert(item.name.as_str()) {
                    return Err(ValidationError::Duplicate {
                        field: "plant name".to_string(),
                        value: item.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    /// Every plant across all categories, in display order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories.iter().flat_map(|c| c.plants.iter())
    }

    /// Looks up a plant by exact name.
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items().find(|item| item.name == name)
    }

    /// Number of plants.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.plants.len()).sum()
    }

    /// Returns true if the catalog lists no plants.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const SAMPLE: &str = r#"[
        {
            "category": "Air Purifying Plants",
            "plants": [
                {"name": "Snake Plant", "image": "snake.jpg", "description": "Produces oxygen at night.", "cost": "$15"},
                {"name": "Spider Plant", "cost": 12}
            ]
        },
        {
            "category": "Aromatic Fragrant Plants",
            "plants": [
                {"name": "Jasmine", "price": null},
                {"name": "Mint"}
            ]
        }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.len(), 4);

        let snake = catalog.find("Snake Plant").unwrap();
        assert_eq!(snake.price, PriceRepresentation::Textual("$15".to_string()));
        assert_eq!(snake.image.as_deref(), Some("snake.jpg"));

        assert_eq!(
            catalog.find("Spider Plant").unwrap().price,
            PriceRepresentation::Numeric(12.0)
        );
        assert!(catalog.find("Jasmine").unwrap().price.is_absent());
        assert!(catalog.find("Mint").unwrap().price.is_absent());
        assert!(catalog.find("Cactus").is_none());
    }

    #[test]
    fn test_items_keep_display_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = catalog.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Snake Plant", "Spider Plant", "Jasmine", "Mint"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = r#"[
            {"category": "A", "plants": [{"name": "Aloe Vera", "cost": "$14"}]},
            {"category": "B", "plants": [{"name": "Aloe Vera", "cost": "$14"}]}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Catalog::new(vec![CatalogCategory {
            category: "Medicinal".to_string(),
            plants: vec![CatalogItem::new("  ", "$5")],
        }])
        .unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_price_and_cost_keys_both_read() {
        let json = r#"[{"category": "Herbs", "plants": [
            {"name": "Basil", "price": "$4"},
            {"name": "Sage", "cost": 6}
        ]}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.find("Basil").unwrap().price, PriceRepresentation::from("$4"));
        assert_eq!(catalog.find("Sage").unwrap().price, PriceRepresentation::Numeric(6.0));

        let written = serde_json::to_value(catalog.find("Sage").unwrap()).unwrap();
        assert_eq!(written["price"], 6.0);
        assert!(written.get("cost").is_none());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CoreError::CatalogFormat(_))
        ));
    }
}
