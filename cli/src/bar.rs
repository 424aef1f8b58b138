//! Catalog and inventory listings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cocktail_core::{AssistantConfig, IngredientCatalog, Inventory, InventoryGroup};

/// Load the catalog from `path`, or from the configured location.
pub fn load_catalog(path: Option<PathBuf>) -> Result<IngredientCatalog> {
    let path = match path {
        Some(path) => path,
        None => AssistantConfig::from_env()?.ingredients_path,
    };
    IngredientCatalog::load(&path).with_context(|| {
        format!(
            "Data file not found. Please ensure '{}' exists.",
            path.display()
        )
    })
}

pub fn list_catalog(path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(path)?;

    for category in catalog.categories() {
        println!("{} ({}):", category.label, category.key);
        for item in &category.items {
            println!("  {}", item);
        }
    }

    Ok(())
}

pub fn show_inventory(ingredients: &[String], path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(path)?;
    let mut inventory = Inventory::new();
    inventory.save(ingredients);

    if inventory.is_empty() {
        println!("Inventory is empty.");
        return Ok(());
    }

    print!("{}", render_groups(&inventory.group_by_category(&catalog)));
    Ok(())
}

/// Markdown rendering: a bold heading per group, then its items.
pub fn render_groups(groups: &[InventoryGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("**{}:**\n{}\n\n", group.label, group.items.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_groups() {
        let groups = vec![
            InventoryGroup {
                label: "Base Spirits".to_string(),
                items: vec!["Gin".to_string(), "White Rum".to_string()],
            },
            InventoryGroup {
                label: "Others".to_string(),
                items: vec!["Basil".to_string()],
            },
        ];
        assert_eq!(
            render_groups(&groups),
            "**Base Spirits:**\nGin, White Rum\n\n**Others:**\nBasil\n\n"
        );
    }
}
