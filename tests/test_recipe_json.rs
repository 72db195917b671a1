use recipe_shared::{
    DateValue, NutritionValues, Recipe, RecipeSource, SchemaError, Servings, Timestamp,
};
use serde_json::{json, Value};

const FULL_RECIPE: &str = r#"
{
    "id": "abc123",
    "userId": "user-42",
    "recipeName": "Shakshuka",
    "description": "Eggs poached in spiced tomato sauce",
    "ingredients": ["6 eggs", "800g canned tomatoes", "1 onion"],
    "instructions": ["Soften the onion", "Add tomatoes and simmer", "Crack in the eggs"],
    "prepTimeMinutes": 10,
    "cookTimeMinutes": 25,
    "prepTime": "10 minutes",
    "cookTime": "25 minutes",
    "servings": "4 people",
    "nutritionalInfo": {
        "perServing": { "calories": 250, "protein": 15.5 },
        "total": { "calories": 1000 }
    },
    "tips": {
        "substitutions": ["Feta instead of goat cheese"],
        "makeAhead": "Sauce keeps for 2 days",
        "variations": ["Green shakshuka"]
    },
    "imageUrl": "https://example.com/shakshuka.jpg",
    "source": "ai-generated",
    "createdAt": "2024-01-01T10:00:00Z",
    "updatedAt": "2024-02-03T04:05:06.789+01:00",
    "tags": ["breakfast", "vegetarian"],
    "dietaryRestrictions": ["vegetarian"],
    "isPublic": true,
    "imageGeneration": {
        "status": "completed",
        "source": "imagen",
        "seed": 1234
    }
}
"#;

#[test]
fn test_full_recipe_deserializes() {
    let _ = env_logger::try_init();

    let recipe = Recipe::from_json(FULL_RECIPE).unwrap();

    assert_eq!(recipe.id.as_deref(), Some("abc123"));
    assert_eq!(recipe.user_id.as_deref(), Some("user-42"));
    assert_eq!(recipe.instructions[2], "Crack in the eggs");
    assert_eq!(recipe.servings, Servings::Text("4 people".to_string()));
    assert_eq!(recipe.servings_as_number(), 4.0);
    assert_eq!(recipe.source, RecipeSource::AiGenerated);
    assert_eq!(recipe.is_public, Some(true));
    assert_eq!(recipe.calculated_total_time_minutes(), Some(35.0));
    assert_eq!(recipe.total_time, None);

    let per_serving = recipe
        .nutritional_info
        .as_ref()
        .and_then(|info| info.per_serving.as_ref())
        .unwrap();
    assert_eq!(
        *per_serving,
        NutritionValues {
            calories: Some(250.0),
            protein: Some(15.5),
            ..Default::default()
        }
    );

    let tips = recipe.tips.as_ref().unwrap();
    assert_eq!(tips.make_ahead.as_deref(), Some("Sauce keeps for 2 days"));
    assert!(tips.storage.is_none());

    let image = recipe.image_generation.as_ref().unwrap();
    assert_eq!(image.status.as_deref(), Some("completed"));
    assert_eq!(image.extra.get("seed"), Some(&json!(1234)));
}

#[test]
fn test_timestamps_stay_raw_until_normalized() {
    let recipe = Recipe::from_json(FULL_RECIPE).unwrap();

    assert_eq!(
        recipe.updated_at,
        Some(Timestamp::Wire("2024-02-03T04:05:06.789+01:00".to_string()))
    );
    assert_eq!(
        recipe.updated_at.unwrap().to_wire_string().as_deref(),
        Some("2024-02-03T03:05:06.789Z")
    );
}

#[test]
fn test_round_trip_preserves_document() {
    let recipe = Recipe::from_json(FULL_RECIPE).unwrap();
    let original: Value = serde_json::from_str(FULL_RECIPE).unwrap();
    let written: Value = serde_json::from_str(&recipe.to_json().unwrap()).unwrap();

    // Only difference: whole-number nutrition values are written as floats
    assert_eq!(written["servings"], original["servings"]);
    assert_eq!(written["imageGeneration"], original["imageGeneration"]);
    assert_eq!(written["createdAt"], original["createdAt"]);
    assert_eq!(written["tips"], original["tips"]);
    assert_eq!(written["nutritionalInfo"]["perServing"]["calories"], json!(250.0));
    assert_eq!(
        written.as_object().unwrap().len(),
        original.as_object().unwrap().len()
    );

    let again = Recipe::from_json(&recipe.to_json().unwrap()).unwrap();
    assert_eq!(again, recipe);
}

#[test]
fn test_fractional_and_negative_minutes_accepted() {
    let recipe = Recipe::from_json(
        r#"{
            "recipeName": "Quick Pickles",
            "ingredients": ["cucumber", "vinegar"],
            "instructions": ["slice", "soak"],
            "servings": 2,
            "source": "manual",
            "prepTimeMinutes": 7.5,
            "cookTimeMinutes": 10,
            "totalTimeMinutes": -5
        }"#,
    )
    .unwrap();

    assert_eq!(recipe.prep_time_minutes, Some(7.5));
    assert_eq!(recipe.total_time_minutes, Some(-5.0));
    assert_eq!(recipe.ingredients.len(), 2);
    // Negative is non-zero, so the explicit total still wins
    assert_eq!(recipe.calculated_total_time_minutes(), Some(-5.0));

    let written: Value = serde_json::from_str(&recipe.to_json().unwrap()).unwrap();
    assert_eq!(written["prepTimeMinutes"], json!(7.5));
    assert_eq!(written["cookTimeMinutes"], json!(10));
    assert_eq!(written["totalTimeMinutes"], json!(-5));
}

#[test]
fn test_unknown_source_kept_verbatim() {
    let recipe = Recipe::from_json(
        r#"{
            "recipeName": "Imported",
            "ingredients": ["flour"],
            "instructions": ["bake"],
            "servings": 2,
            "source": "web-import"
        }"#,
    )
    .unwrap();
    assert_eq!(recipe.source, RecipeSource::Other("web-import".to_string()));

    let written: Value = serde_json::from_str(&recipe.to_json().unwrap()).unwrap();
    assert_eq!(written["source"], "web-import");
    assert_eq!(written["servings"], json!(2));
}

#[test]
fn test_parsed_instant_serializes_canonically() {
    let mut recipe = Recipe::new(
        "Toast",
        vec!["bread".to_string()],
        vec!["toast it".to_string()],
        1u32,
        RecipeSource::Manual,
    );
    let created = Timestamp::parse_strict("2024-05-06T07:08:09Z").unwrap();
    recipe.created_at = Some(created);

    let written: Value = serde_json::from_str(&recipe.to_json().unwrap()).unwrap();
    assert_eq!(written["createdAt"], "2024-05-06T07:08:09.000Z");
    assert!(written.get("updatedAt").is_none());
}

#[test]
fn test_unparseable_timestamp_is_invalid_date() {
    let recipe = Recipe::from_json(
        r#"{
            "recipeName": "Odd",
            "ingredients": [],
            "instructions": [],
            "servings": 1,
            "source": "manual",
            "createdAt": "last tuesday"
        }"#,
    )
    .unwrap();
    let created = recipe.created_at.unwrap();
    assert_eq!(created.to_date_value(), DateValue::Invalid);
    assert!(created.to_wire_string().is_none());
}

#[test]
fn test_missing_required_field_is_error() {
    let result = Recipe::from_json(r#"{"recipeName": "No body", "servings": 2}"#);
    assert!(matches!(result, Err(SchemaError::Json(_))));
}
