pub mod assistant;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod llm;
pub mod prompts;
pub mod quantity;
pub mod rewrite;
pub mod units;

pub use assistant::{AssistantError, CocktailAssistant, CocktailRequest};
pub use catalog::{Category, IngredientCatalog};
pub use config::{AssistantConfig, ConfigError, ProviderKind};
pub use error::{CatalogError, QuantityError, UnitError};
pub use inventory::{IngredientSelection, Inventory, InventoryGroup};
pub use llm::{
    create_provider, CachingProvider, FakeProvider, LlmError, LlmProvider, OllamaProvider,
};
pub use quantity::{parse_quantity, Notation, NumericToken};
pub use rewrite::{convert_quantities, find_measurements, MeasurementMatch};
pub use units::{ConvertedAmount, VolumeUnit, ML_PER_FL_OZ};
