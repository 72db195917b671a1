use std::path::Path;

use config::{Config, Environment, File};
use log::debug;
use serde::Deserialize;

use crate::error::SchemaError;
use crate::model::Recipe;
use crate::schema::{recipe_schema_with, JsonSchema};
use crate::utils::TimingPolicy;

/// Settings shared by services that embed the recipe contract
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SharedConfig {
    /// Total-time calculation settings
    #[serde(default)]
    pub timing: TimingConfig,
    /// Response schema settings
    #[serde(default)]
    pub schema: SchemaConfig,
}

/// Configuration for the total-time calculator
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TimingConfig {
    /// How a stored `0` is read: "absent" (default) or "value"
    #[serde(default)]
    pub zero_minutes: TimingPolicy,
}

/// Configuration for the generated recipe schema
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SchemaConfig {
    /// Fields required on top of recipeName, ingredients, instructions and servings
    #[serde(default)]
    pub extra_required: Vec<String>,
    /// Whether id, userId, createdAt, updatedAt and isPublic are described
    #[serde(default = "default_include_identity")]
    pub include_identity: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            extra_required: Vec::new(),
            include_identity: default_include_identity(),
        }
    }
}

fn default_include_identity() -> bool {
    true
}

impl SharedConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SHARED__ prefix
    /// 2. recipe_shared.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SHARED__TIMING__ZERO_MINUTES
    ///
    /// `RECIPE_SHARED__SCHEMA__EXTRA_REQUIRED` takes a comma-separated list.
    pub fn load() -> Result<Self, SchemaError> {
        load_config()
    }

    /// Total time of `recipe` under the configured zero-minutes policy
    pub fn total_time_minutes(&self, recipe: &Recipe) -> Option<f64> {
        recipe.total_time_minutes_with(self.timing.zero_minutes)
    }

    /// Recipe response schema under the configured schema settings
    pub fn recipe_schema(&self) -> JsonSchema {
        recipe_schema_with(&self.schema)
    }
}

/// Load configuration from file and environment variables
///
/// See [`SharedConfig::load`] for the precedence rules.
pub fn load_config() -> Result<SharedConfig, SchemaError> {
    load_config_from("recipe_shared")
}

/// Same as [`load_config`] with an explicit file name (extension optional)
pub fn load_config_from(file_name: &str) -> Result<SharedConfig, SchemaError> {
    let file_present = [file_name.to_string(), format!("{file_name}.toml")]
        .iter()
        .any(|candidate| Path::new(candidate).is_file());
    if !file_present {
        debug!("No {}.toml found, using defaults and environment", file_name);
    }

    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        // Use double underscore for nested: RECIPE_SHARED__SCHEMA__INCLUDE_IDENTITY
        .add_source(
            Environment::with_prefix("RECIPE_SHARED")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("schema.extra_required"),
        )
        .build()?;

    let config: SharedConfig = settings.try_deserialize()?;
    debug!("Loaded shared recipe config: {:?}", config);
    Ok(config)
}
