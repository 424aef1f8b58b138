use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cocktail_core::{
    create_provider, AssistantConfig, AssistantError, CocktailAssistant, CocktailRequest,
    IngredientCatalog, IngredientSelection, Inventory, VolumeUnit,
};

use crate::bar::{load_catalog, render_groups};

/// Selection key for ingredients the catalog does not list.
const CUSTOM_KEY: &str = "custom";

pub struct SuggestArgs {
    pub ingredients: Vec<String>,
    pub custom: String,
    pub prompt: String,
    pub units: Option<VolumeUnit>,
    pub catalog: Option<PathBuf>,
}

/// File each named ingredient under its catalog category, extras under "custom".
fn build_selection(
    catalog: &IngredientCatalog,
    ingredients: &[String],
    custom: &str,
) -> IngredientSelection {
    let mut selection = IngredientSelection::new();
    for item in ingredients {
        let key = catalog
            .category_of(item)
            .map(|c| c.key.as_str())
            .unwrap_or(CUSTOM_KEY);
        selection.add(key, [item.as_str()], "");
    }
    selection.add(CUSTOM_KEY, Vec::<String>::new(), custom);
    selection
}

pub async fn run(args: SuggestArgs) -> Result<()> {
    let mut config = AssistantConfig::from_env()?;
    if let Some(path) = args.catalog {
        config.ingredients_path = path;
    }

    let catalog = load_catalog(Some(config.ingredients_path.clone()))?;
    let selection = build_selection(&catalog, &args.ingredients, &args.custom);
    if selection.is_empty() {
        bail!(AssistantError::NoIngredients);
    }

    let mut inventory = Inventory::new();
    inventory.save(selection.all_ingredients());
    eprint!("{}", render_groups(&inventory.group_by_category(&catalog)));

    let provider = create_provider(&config).context("Failed to set up the model provider")?;
    let assistant = CocktailAssistant::new(provider);

    let request = CocktailRequest::new(args.prompt, selection.all_ingredients());
    let markdown = assistant.suggest(&request, args.units).await?;

    println!("## Cocktails You Can Make\n");
    println!("{}", markdown);
    Ok(())
}
