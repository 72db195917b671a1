use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::{NutritionalInfo, RecipeTips, Timestamp};
use crate::error::SchemaError;
use crate::utils::{self, TimingPolicy};

/// Shared recipe record exchanged between the frontend, the AI service
/// and the storage service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Storage document id, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user, absent until associated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub recipe_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ingredient lines with quantities
    pub ingredients: Vec<String>,
    /// Steps in cooking order
    pub instructions: Vec<String>,

    // Any JSON number is accepted; producers disagree on integer vs. fraction
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_minutes"
    )]
    pub prep_time_minutes: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_minutes"
    )]
    pub cook_time_minutes: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_minutes"
    )]
    pub total_time_minutes: Option<f64>,

    // Human-readable durations ("15 minutes"); not kept in sync with the
    // minute fields above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,

    pub servings: Servings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<RecipeTips>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub source: RecipeSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_generation: Option<ImageGeneration>,
}

impl Recipe {
    /// Minimal recipe with every optional field left empty
    pub fn new(
        recipe_name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Vec<String>,
        servings: impl Into<Servings>,
        source: RecipeSource,
    ) -> Self {
        Recipe {
            id: None,
            user_id: None,
            recipe_name: recipe_name.into(),
            description: None,
            ingredients,
            instructions,
            prep_time_minutes: None,
            cook_time_minutes: None,
            total_time_minutes: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            servings: servings.into(),
            nutritional_info: None,
            tips: None,
            image_url: None,
            source,
            created_at: None,
            updated_at: None,
            tags: None,
            dietary_restrictions: None,
            is_public: None,
            image_generation: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Servings as a number; `NaN` when they arrived as unparseable text
    pub fn servings_as_number(&self) -> f64 {
        self.servings.as_number()
    }

    /// Best available total time, see [`utils::calculated_total_time_minutes`]
    pub fn calculated_total_time_minutes(&self) -> Option<f64> {
        utils::calculated_total_time_minutes(self)
    }

    /// Total time under an explicit policy for zero-minute fields
    pub fn total_time_minutes_with(&self, policy: TimingPolicy) -> Option<f64> {
        utils::total_time_minutes_with(self, policy)
    }
}

/// Servings as received: producers send either a number or text.
///
/// A `Count(NaN)` is written as JSON `null` (as `JSON.stringify` does),
/// and `null` is not accepted back as servings. Normalize text with
/// [`Servings::as_number`] only when a number is needed, and check for
/// `NaN` before storing the result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Servings {
    Count(f64),
    Text(String),
}

impl Servings {
    pub fn as_number(&self) -> f64 {
        utils::servings_value(self)
    }
}

impl Serialize for Servings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Servings::Count(n) => serialize_number(*n, serializer),
            Servings::Text(text) => serializer.serialize_str(text),
        }
    }
}

// Whole numbers go back out as JSON integers, fractions as floats and
// NaN as null.
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

fn serialize_minutes<S: Serializer>(
    minutes: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match minutes {
        Some(n) => serialize_number(*n, serializer),
        None => serializer.serialize_none(),
    }
}

impl From<f64> for Servings {
    fn from(n: f64) -> Self {
        Servings::Count(n)
    }
}

impl From<u32> for Servings {
    fn from(n: u32) -> Self {
        Servings::Count(f64::from(n))
    }
}

impl From<String> for Servings {
    fn from(text: String) -> Self {
        Servings::Text(text)
    }
}

impl From<&str> for Servings {
    fn from(text: &str) -> Self {
        Servings::Text(text.to_string())
    }
}

/// Where a recipe came from. Unknown tags are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecipeSource {
    AiGenerated,
    Manual,
    Other(String),
}

impl RecipeSource {
    pub fn as_str(&self) -> &str {
        match self {
            RecipeSource::AiGenerated => "ai-generated",
            RecipeSource::Manual => "manual",
            RecipeSource::Other(tag) => tag,
        }
    }
}

impl From<String> for RecipeSource {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ai-generated" => RecipeSource::AiGenerated,
            "manual" => RecipeSource::Manual,
            _ => RecipeSource::Other(tag),
        }
    }
}

impl From<&str> for RecipeSource {
    fn from(tag: &str) -> Self {
        RecipeSource::from(tag.to_string())
    }
}

impl From<RecipeSource> for String {
    fn from(source: RecipeSource) -> Self {
        match source {
            RecipeSource::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata written by the AI image-generation step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGeneration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Producer-specific keys not covered by the fields above
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
