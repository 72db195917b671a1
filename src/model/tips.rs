use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Recipe tips: substitutions, make-ahead and storage advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTips {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_ahead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reheating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<String>>,
}

impl RecipeTips {
    /// Build from the storage service layout, a map of string lists.
    ///
    /// Only `substitutions` and `variations` exist in that layout.
    pub fn from_map(tips: &HashMap<String, Vec<String>>) -> Self {
        RecipeTips {
            substitutions: tips.get("substitutions").cloned(),
            variations: tips.get("variations").cloned(),
            ..Default::default()
        }
    }

    /// Convert to the storage service layout. `make_ahead`, `storage` and
    /// `reheating` are not representable there and are dropped.
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        let mut map = HashMap::new();
        if let Some(substitutions) = &self.substitutions {
            map.insert("substitutions".to_string(), substitutions.clone());
        }
        if let Some(variations) = &self.variations {
            map.insert("variations".to_string(), variations.clone());
        }
        map
    }
}
