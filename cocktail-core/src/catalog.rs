//! Ingredient catalog: the known ingredients offered for each category.
//!
//! Loaded once from `data/ingredients.json` (category key → list of names)
//! and then passed around by reference. Nothing here is global.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CatalogError;

/// Default location of the catalog, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/ingredients.json";

/// Categories shown first, in this order, with their display labels.
const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("base_spirits", "Base Spirits"),
    ("liqueurs", "Liqueurs"),
    ("bitters", "Bitters"),
    ("mixers", "Mixers"),
    ("garnishes", "Garnishes"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Key as it appears in the JSON file, e.g. "base_spirits".
    pub key: String,
    /// Display label, e.g. "Base Spirits".
    pub label: String,
    pub items: Vec<String>,
}

impl Category {
    /// Case-insensitive exact name match.
    pub fn contains(&self, item: &str) -> bool {
        let item = item.trim().to_lowercase();
        self.items.iter().any(|known| known.to_lowercase() == item)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientCatalog {
    categories: Vec<Category>,
}

impl IngredientCatalog {
    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "Loaded ingredient catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_map(raw))
    }

    /// Order known categories first, then any others alphabetically by key.
    pub fn from_map(mut raw: HashMap<String, Vec<String>>) -> Self {
        let mut categories = Vec::with_capacity(raw.len());

        for &(key, label) in KNOWN_CATEGORIES {
            if let Some(items) = raw.remove(key) {
                categories.push(Category {
                    key: key.to_string(),
                    label: label.to_string(),
                    items,
                });
            }
        }

        let mut extra: Vec<(String, Vec<String>)> = raw.into_iter().collect();
        extra.sort_by(|a, b| a.0.cmp(&b.0));
        categories.extend(extra.into_iter().map(|(key, items)| Category {
            label: label_from_key(&key),
            key,
            items,
        }));

        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// The first category listing `item`, if any.
    pub fn category_of(&self, item: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(item))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// "soft_drinks" → "Soft Drinks"
fn label_from_key(key: &str) -> String {
    crate::inventory::title_case(&key.replace('_', " "))
}
