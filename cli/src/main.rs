mod bar;
mod convert;
mod suggest;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cocktail_core::VolumeUnit;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cocktail")]
#[command(about = "Find cocktails you can make with what is in your bar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite ml/oz measurements in a markdown file (or stdin) into one unit
    Convert {
        /// Target unit: ml or oz
        #[arg(long)]
        to: VolumeUnit,
        /// Input file (default: stdin)
        file: Option<PathBuf>,
    },
    /// Suggest cocktails for the given ingredients
    Suggest {
        /// Ingredient on hand (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Extra ingredients not in the catalog, comma-separated
        #[arg(long, default_value = "")]
        custom: String,
        /// What you are in the mood for, e.g. "something sweet and refreshing"
        #[arg(short, long, default_value = "")]
        prompt: String,
        /// Rewrite measurements into ml or oz
        #[arg(long, env = "COCKTAIL_UNITS")]
        units: Option<VolumeUnit>,
        /// Ingredient catalog JSON
        #[arg(long, env = "COCKTAIL_INGREDIENTS_PATH")]
        catalog: Option<PathBuf>,
    },
    /// List the ingredient catalog by category
    Catalog {
        /// Ingredient catalog JSON
        #[arg(long, env = "COCKTAIL_INGREDIENTS_PATH")]
        catalog: Option<PathBuf>,
    },
    /// Show ingredients grouped the way they would be saved to the bar inventory
    Inventory {
        /// Ingredient on hand (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Ingredient catalog JSON
        #[arg(long, env = "COCKTAIL_INGREDIENTS_PATH")]
        catalog: Option<PathBuf>,
    },
}

fn init_logging() {
    // stderr only: stdout carries the markdown
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cocktail=info,cocktail_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { to, file } => {
            convert::run(to, file.as_deref())?;
        }
        Commands::Suggest {
            ingredients,
            custom,
            prompt,
            units,
            catalog,
        } => {
            let args = suggest::SuggestArgs {
                ingredients,
                custom,
                prompt,
                units,
                catalog,
            };
            suggest::run(args).await?;
        }
        Commands::Catalog { catalog } => {
            bar::list_catalog(catalog)?;
        }
        Commands::Inventory {
            ingredients,
            catalog,
        } => {
            bar::show_inventory(&ingredients, catalog)?;
        }
    }

    Ok(())
}
