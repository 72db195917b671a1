//! JSON response schemas for the AI generation service.

mod builder;
mod recipe;

pub use self::builder::{JsonSchema, SchemaBuilder, SchemaType};
pub use self::recipe::{recipe_schema, recipe_schema_with, REQUIRED_FIELDS};
