//! # Catalog State
//!
//! The plant catalog, loaded once at startup and read-only afterwards.

use std::path::Path;

use tracing::info;

use nursery_core::{Catalog, CatalogItem};

use crate::error::ShellResult;

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/plants.json");

/// Read-only catalog handle.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Loads the catalog at `path`, or the bundled one when `path` is `None`.
    pub fn load(path: Option<&Path>) -> ShellResult<Self> {
        let catalog = match path {
            Some(path) => {
                info!(?path, "Loading catalog from file");
                let json = std::fs::read_to_string(path)?;
                Catalog::from_json(&json)?
            }
            None => Catalog::from_json(BUNDLED_CATALOG)?,
        };

        info!(
            categories = catalog.categories().len(),
            plants = catalog.len(),
            "Catalog loaded"
        );

        Ok(CatalogState { catalog })
    }

    /// The bundled catalog.
    pub fn bundled() -> ShellResult<Self> {
        Self::load(None)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up a plant by exact name.
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.catalog.find(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_bundled_catalog_loads() {
        let state = CatalogState::bundled().unwrap();
        let categories: Vec<&str> = state
            .catalog()
            .categories()
            .iter()
            .map(|c| c.category.as_str())
            .collect();

        assert_eq!(
            categories,
            ["Air Purifying Plants", "Aromatic Fragrant Plants", "Medicinal Plants"]
        );
        assert_eq!(state.catalog().len(), 9);
        assert!(state.find("Snake Plant").is_some());
        assert!(state.find("snake plant").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("nursery-shell-catalog-test.json");
        std::fs::write(
            &path,
            r#"[{"category": "Succulents", "plants": [{"name": "Jade", "cost": "$9"}]}]"#,
        )
        .unwrap();

        let state = CatalogState::load(Some(&path)).unwrap();
        assert_eq!(state.catalog().len(), 1);
        assert!(state.find("Jade").is_some());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("nursery-shell-no-such-catalog.json");
        assert!(matches!(
            CatalogState::load(Some(&path)),
            Err(ShellError::Io(_))
        ));
    }
}
