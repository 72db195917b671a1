use chrono::{Datelike, TimeZone, Utc};
use recipe_shared::{
    calculated_total_time_minutes, date_to_instant_string, instant_to_date, servings_as_number,
    DateValue, Recipe,
};

fn recipe_from(json: &str) -> Recipe {
    Recipe::from_json(json).unwrap()
}

#[test]
fn test_servings_number_returned_unchanged() {
    assert_eq!(servings_as_number(4.0), 4.0);
    assert_eq!(servings_as_number(2.5), 2.5);
}

#[test]
fn test_servings_string_parsed() {
    assert_eq!(servings_as_number("4"), 4.0);
    assert_eq!(servings_as_number("2"), 2.0);
    assert_eq!(servings_as_number("4 people"), 4.0);
}

#[test]
fn test_servings_invalid_strings_are_nan() {
    assert!(servings_as_number("invalid").is_nan());
    assert!(servings_as_number("").is_nan());
}

#[test]
fn test_explicit_total_wins() {
    let recipe = recipe_from(
        r#"{
            "recipeName": "Test",
            "ingredients": [],
            "instructions": [],
            "servings": 4,
            "source": "manual",
            "prepTimeMinutes": 15,
            "cookTimeMinutes": 30,
            "totalTimeMinutes": 50
        }"#,
    );
    assert_eq!(calculated_total_time_minutes(&recipe), Some(50.0));
}

#[test]
fn test_total_calculated_from_prep_and_cook() {
    let recipe = recipe_from(
        r#"{
            "recipeName": "Test",
            "ingredients": [],
            "instructions": [],
            "servings": 4,
            "source": "manual",
            "prepTimeMinutes": 15,
            "cookTimeMinutes": 30
        }"#,
    );
    assert_eq!(calculated_total_time_minutes(&recipe), Some(45.0));
}

#[test]
fn test_no_timing_information() {
    let recipe = recipe_from(
        r#"{
            "recipeName": "Test",
            "ingredients": [],
            "instructions": [],
            "servings": 4,
            "source": "manual"
        }"#,
    );
    assert_eq!(calculated_total_time_minutes(&recipe), None);
}

#[test]
fn test_partial_timing_information() {
    let recipe = recipe_from(
        r#"{
            "recipeName": "Test",
            "ingredients": [],
            "instructions": [],
            "servings": 4,
            "source": "manual",
            "prepTimeMinutes": 15
        }"#,
    );
    assert_eq!(calculated_total_time_minutes(&recipe), None);
}

#[test]
fn test_instant_to_date() {
    let date = instant_to_date("2024-01-01T10:00:00Z");
    assert_eq!(
        date,
        DateValue::Valid(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
    );
    assert_eq!(date.to_string(), "2024-01-01T10:00:00.000Z");

    let with_millis = instant_to_date("2024-01-01T10:00:00.000Z")
        .as_datetime()
        .unwrap();
    assert_eq!(with_millis.year(), 2024);
    assert_eq!(with_millis.month(), 1);
    assert_eq!(with_millis.day(), 1);
}

#[test]
fn test_date_to_instant_string() {
    let date = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    assert_eq!(date_to_instant_string(&date), "2024-01-01T10:00:00.000Z");
}

#[test]
fn test_round_trip_normalizes_milliseconds() {
    let date = instant_to_date("2024-01-01T10:00:00Z").as_datetime().unwrap();
    let wire = date_to_instant_string(&date);
    assert_eq!(wire, "2024-01-01T10:00:00.000Z");
    assert_eq!(instant_to_date(&wire).as_datetime(), Some(date));
}

#[test]
fn test_complete_recipe_transformation() {
    let recipe = recipe_from(
        r#"{
            "recipeName": "Test Recipe",
            "servings": 4,
            "prepTimeMinutes": 15,
            "cookTimeMinutes": 30,
            "totalTimeMinutes": 45,
            "ingredients": ["ingredient 1", "ingredient 2"],
            "instructions": ["step 1", "step 2"],
            "source": "manual",
            "createdAt": "2024-01-01T10:00:00Z"
        }"#,
    );

    let servings = recipe.servings_as_number();
    let total_time = calculated_total_time_minutes(&recipe);
    let created = recipe.created_at.as_ref().unwrap().to_date_value();
    let wire = created.to_wire_string().unwrap();

    assert_eq!(servings, 4.0);
    assert_eq!(total_time, Some(45.0));
    assert!(created.is_valid());
    assert_eq!(wire, "2024-01-01T10:00:00.000Z");
}
