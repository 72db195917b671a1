use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nutritional values for a recipe or a single serving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

impl NutritionValues {
    /// Build from a loosely typed storage document.
    ///
    /// Integer and float entries are read as `f64`; anything that is not a
    /// number is treated as missing.
    pub fn from_map(values: &Map<String, Value>) -> Self {
        let number = |key: &str| values.get(key).and_then(Value::as_f64);
        NutritionValues {
            calories: number("calories"),
            protein: number("protein"),
            carbohydrates: number("carbohydrates"),
            fat: number("fat"),
            fiber: number("fiber"),
            sodium: number("sodium"),
        }
    }

    /// Convert to a storage document, emitting only the values that are set.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sodium", self.sodium),
        ];
        for (key, value) in fields {
            // from_f64 rejects NaN and infinities, which JSON cannot hold
            if let Some(number) = value.and_then(serde_json::Number::from_f64) {
                map.insert(key.to_string(), Value::Number(number));
            }
        }
        map
    }
}

/// Nutritional information, both per serving and for the whole recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_serving: Option<NutritionValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<NutritionValues>,
}

impl NutritionalInfo {
    /// Build from a storage document holding nested `perServing` and
    /// `total` objects. Entries that are not objects are treated as missing.
    pub fn from_map(nutrition: &Map<String, Value>) -> Self {
        let nested = |key: &str| {
            nutrition
                .get(key)
                .and_then(Value::as_object)
                .map(NutritionValues::from_map)
        };
        NutritionalInfo {
            per_serving: nested("perServing"),
            total: nested("total"),
        }
    }

    /// Convert to a storage document. Both keys are always written; a
    /// missing side is stored as `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        let side = |values: &Option<NutritionValues>| {
            values
                .as_ref()
                .map(|v| Value::Object(v.to_map()))
                .unwrap_or(Value::Null)
        };
        let mut map = Map::new();
        map.insert("perServing".to_string(), side(&self.per_serving));
        map.insert("total".to_string(), side(&self.total));
        map
    }
}
