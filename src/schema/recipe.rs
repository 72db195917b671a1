use log::debug;

use super::{JsonSchema, SchemaBuilder};
use crate::config::SchemaConfig;

/// Fields every generated recipe has to carry
pub const REQUIRED_FIELDS: [&str; 4] = ["recipeName", "ingredients", "instructions", "servings"];

// Set by the storage layer, never by the generator
const IDENTITY_FIELDS: [&str; 5] = ["id", "userId", "createdAt", "updatedAt", "isPublic"];

/// Response schema describing the shared [`Recipe`](crate::Recipe) shape.
pub fn recipe_schema() -> JsonSchema {
    recipe_schema_with(&SchemaConfig::default())
}

/// Recipe schema with identity fields and extra required fields taken
/// from configuration.
pub fn recipe_schema_with(config: &SchemaConfig) -> JsonSchema {
    let string_list = || SchemaBuilder::array().items(SchemaBuilder::string());

    let nutrition_values = || {
        SchemaBuilder::object()
            .property("calories", SchemaBuilder::number())
            .property("protein", SchemaBuilder::number())
            .property("carbohydrates", SchemaBuilder::number())
            .property("fat", SchemaBuilder::number())
            .property("fiber", SchemaBuilder::number())
            .property("sodium", SchemaBuilder::number())
    };

    let nutritional_info = SchemaBuilder::object()
        .property("perServing", nutrition_values())
        .property("total", nutrition_values());

    let tips = SchemaBuilder::object()
        .property("substitutions", string_list())
        .property("makeAhead", SchemaBuilder::string())
        .property("storage", SchemaBuilder::string())
        .property("reheating", SchemaBuilder::string())
        .property("variations", string_list());

    let image_generation = SchemaBuilder::object()
        .property("status", SchemaBuilder::string())
        .property("source", SchemaBuilder::string())
        .property("errorMessage", SchemaBuilder::string());

    let properties = vec![
        ("id", SchemaBuilder::string()),
        ("userId", SchemaBuilder::string()),
        ("recipeName", SchemaBuilder::string()),
        ("description", SchemaBuilder::string()),
        ("ingredients", string_list()),
        (
            "instructions",
            string_list().description("Steps in the order they are performed"),
        ),
        ("prepTime", SchemaBuilder::string()),
        ("cookTime", SchemaBuilder::string()),
        ("totalTime", SchemaBuilder::string()),
        ("prepTimeMinutes", SchemaBuilder::integer()),
        ("cookTimeMinutes", SchemaBuilder::integer()),
        ("totalTimeMinutes", SchemaBuilder::integer()),
        ("servings", SchemaBuilder::integer()),
        ("nutritionalInfo", nutritional_info),
        ("tips", tips),
        ("imageUrl", SchemaBuilder::string()),
        ("imageGeneration", image_generation),
        ("source", SchemaBuilder::string()),
        ("createdAt", SchemaBuilder::string()),
        ("updatedAt", SchemaBuilder::string()),
        ("tags", string_list()),
        ("dietaryRestrictions", string_list()),
        ("isPublic", SchemaBuilder::boolean()),
    ];

    let properties: Vec<_> = properties
        .into_iter()
        .filter(|(name, _)| config.include_identity || !IDENTITY_FIELDS.contains(name))
        .collect();
    let known: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();

    let mut required: Vec<String> = REQUIRED_FIELDS.iter().map(|s| s.to_string()).collect();
    for extra in &config.extra_required {
        if !known.contains(&extra.as_str()) {
            debug!("Ignoring required field {:?}: not part of the schema", extra);
            continue;
        }
        if !required.contains(extra) {
            required.push(extra.clone());
        }
    }

    SchemaBuilder::object()
        .properties(properties)
        .required(required)
        .build()
}
