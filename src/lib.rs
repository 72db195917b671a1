//! Shared recipe model and the helpers that normalize it.
//!
//! The frontend, the AI generation service and the storage service all
//! exchange [`Recipe`] values. Producers disagree on a few representations
//! (servings as text, timestamps as strings, zero vs. missing durations);
//! the functions re-exported here turn those into one consistent reading.

pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod uniffi_bindings;
pub mod utils;

pub use config::{load_config, SharedConfig};
pub use error::SchemaError;
pub use model::{
    DateValue, ImageGeneration, NutritionValues, NutritionalInfo, Recipe, RecipeSource,
    RecipeTips, Servings, Timestamp,
};
pub use schema::{recipe_schema, recipe_schema_with, JsonSchema, SchemaBuilder, SchemaType};
pub use utils::{
    calculated_total_time_minutes, date_to_instant_string, instant_to_date, servings_as_number,
    total_time_minutes_with, TimingPolicy,
};
