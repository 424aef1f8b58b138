//! Ingredient selection and the per-session bar inventory.
//!
//! A selection is what the user picked for a single request. The inventory is
//! what they have saved during the session: a normalized, deduplicated set
//! that lives only as long as the `Inventory` value does.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::IngredientCatalog;

/// Label of the group holding items the catalog does not know.
pub const OTHERS_LABEL: &str = "Others";

/// Trim and lowercase an ingredient name. Blank names yield `None`.
pub fn normalize_item(item: &str) -> Option<String> {
    let item = item.trim();
    if item.is_empty() {
        None
    } else {
        Some(item.to_lowercase())
    }
}

/// Split a comma-separated free-text entry ("mint, soda water, ") into names.
pub fn split_custom_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Capitalize the first letter of each word, lowercase the rest.
///
/// Words start after whitespace or a hyphen: "st-germain" → "St-Germain".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = c.is_whitespace() || c == '-';
    }
    out
}

/// The ingredients chosen for one request, grouped by where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSelection {
    groups: Vec<(String, Vec<String>)>,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add catalog picks for a category plus its comma-separated extras.
    pub fn add<I, S>(&mut self, category: &str, picked: I, custom_input: &str)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = picked
            .into_iter()
            .map(Into::into)
            .filter(|item| !item.trim().is_empty())
            .collect();
        items.extend(split_custom_input(custom_input));

        match self.groups.iter_mut().find(|(key, _)| key == category) {
            Some((_, existing)) => existing.extend(items),
            None => self.groups.push((category.to_string(), items)),
        }
    }

    /// Everything selected, in the order categories were added.
    pub fn all_ingredients(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|(_, items)| items.iter())
            .map(|item| item.trim().to_string())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|(_, items)| items.is_empty())
    }
}

/// Items from the inventory that fall under one display heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryGroup {
    pub label: String,
    /// Title-cased and sorted.
    pub items: Vec<String>,
}

/// Ingredients saved during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge items into the inventory. Returns how many were new.
    pub fn save<I, S>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.items.len();
        self.items
            .extend(items.into_iter().filter_map(|i| normalize_item(i.as_ref())));
        let added = self.items.len() - before;
        tracing::debug!(added, total = self.items.len(), "Saved ingredients to inventory");
        added
    }

    pub fn remove(&mut self, item: &str) -> bool {
        normalize_item(item).is_some_and(|item| self.items.remove(&item))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, item: &str) -> bool {
        normalize_item(item).is_some_and(|item| self.items.contains(&item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }

    /// Group saved items under catalog categories, unknown ones under "Others".
    ///
    /// Groups follow catalog order and empty groups are left out.
    pub fn group_by_category(&self, catalog: &IngredientCatalog) -> Vec<InventoryGroup> {
        let mut groups: Vec<InventoryGroup> = catalog
            .categories()
            .iter()
            .map(|c| InventoryGroup {
                label: c.label.clone(),
                items: Vec::new(),
            })
            .collect();
        let mut others = Vec::new();

        for item in &self.items {
            let slot = catalog
                .categories()
                .iter()
                .position(|category| category.contains(item));
            match slot {
                Some(idx) => groups[idx].items.push(title_case(item)),
                None => others.push(title_case(item)),
            }
        }

        if !others.is_empty() {
            groups.push(InventoryGroup {
                label: OTHERS_LABEL.to_string(),
                items: others,
            });
        }

        groups.retain(|g| !g.items.is_empty());
        for group in &mut groups {
            group.items.sort();
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::from_json(
            r#"{
                "base_spirits": ["Gin", "White Rum"],
                "liqueurs": ["St-Germain"],
                "mixers": ["Lime Juice", "Tonic Water"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_item() {
        assert_eq!(normalize_item("  Lime Juice "), Some("lime juice".to_string()));
        assert_eq!(normalize_item("   "), None);
    }

    #[test]
    fn test_split_custom_input() {
        assert_eq!(
            split_custom_input(" mint, soda water,, ,cucumber "),
            vec!["mint", "soda water", "cucumber"]
        );
        assert!(split_custom_input("").is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("white rum"), "White Rum");
        assert_eq!(title_case("st-germain"), "St-Germain");
        assert_eq!(title_case("peychaud's bitters"), "Peychaud's Bitters");
        assert_eq!(title_case("GIN"), "Gin");
    }

    #[test]
    fn test_selection_flattens_in_order() {
        let mut selection = IngredientSelection::new();
        assert!(selection.is_empty());

        selection.add("base_spirits", ["Gin"], "mezcal");
        selection.add("mixers", ["Lime Juice", " "], "");
        selection.add("base_spirits", Vec::<String>::new(), "white rum, ");

        assert_eq!(
            selection.all_ingredients(),
            vec!["Gin", "mezcal", "white rum", "Lime Juice"]
        );
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_save_dedupes_and_normalizes() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.save(["Gin", " gin ", "Lime Juice", ""]), 2);
        assert_eq!(inventory.save(["LIME JUICE", "Mint"]), 1);
        assert_eq!(inventory.to_vec(), vec!["gin", "lime juice", "mint"]);
        assert!(inventory.contains("MINT"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut inventory = Inventory::new();
        inventory.save(["Gin", "Tonic Water"]);
        assert!(inventory.remove("GIN"));
        assert!(!inventory.remove("gin"));
        assert_eq!(inventory.len(), 1);
        inventory.clear();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_group_by_category() {
        let mut inventory = Inventory::new();
        inventory.save(["tonic water", "gin", "st-germain", "mint", "white rum", "basil"]);

        let groups = inventory.group_by_category(&catalog());
        assert_eq!(
            groups,
            vec![
                InventoryGroup {
                    label: "Base Spirits".to_string(),
                    items: vec!["Gin".to_string(), "White Rum".to_string()],
                },
                InventoryGroup {
                    label: "Liqueurs".to_string(),
                    items: vec!["St-Germain".to_string()],
                },
                InventoryGroup {
                    label: "Mixers".to_string(),
                    items: vec!["Tonic Water".to_string()],
                },
                InventoryGroup {
                    label: "Others".to_string(),
                    items: vec!["Basil".to_string(), "Mint".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_group_empty_inventory() {
        assert!(Inventory::new().group_by_category(&catalog()).is_empty());
    }
}
