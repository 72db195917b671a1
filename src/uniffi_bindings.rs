//! UniFFI bindings for recipe-shared
//!
//! Exposes the normalization helpers to Swift and Kotlin consumers. Recipes
//! cross the boundary as JSON strings so the contract stays defined in one
//! place.

use std::fmt;

use crate::{
    calculated_total_time_minutes, instant_to_date, recipe_schema, servings_as_number, Recipe,
    SchemaError,
};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiSchemaError {
    /// Recipe JSON did not match the shared contract
    InvalidRecipe { message: String },
}

impl fmt::Display for FfiSchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiSchemaError::InvalidRecipe { message } => write!(f, "Invalid recipe: {}", message),
        }
    }
}

impl std::error::Error for FfiSchemaError {}

impl From<SchemaError> for FfiSchemaError {
    fn from(err: SchemaError) -> Self {
        FfiSchemaError::InvalidRecipe {
            message: err.to_string(),
        }
    }
}

/// Servings text as a number, `NaN` when it has no leading integer
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn servings_from_text(text: String) -> f64 {
    servings_as_number(text)
}

/// Total time in minutes of a recipe given as JSON
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn total_time_minutes_from_json(json: String) -> Result<Option<f64>, FfiSchemaError> {
    let recipe = Recipe::from_json(&json)?;
    Ok(calculated_total_time_minutes(&recipe))
}

/// Canonical wire form of a timestamp, `None` when it cannot be parsed
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_timestamp(raw: String) -> Option<String> {
    instant_to_date(&raw).to_wire_string()
}

/// Recipe response schema as compact JSON
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recipe_schema_json() -> String {
    recipe_schema().to_string()
}
