use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Primitive type names understood by the AI response-schema format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished, immutable JSON schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSchema {
    schema: Map<String, Value>,
}

impl JsonSchema {
    pub fn new(schema: Map<String, Value>) -> Self {
        JsonSchema { schema }
    }

    /// Owned copy of the underlying object
    pub fn as_map(&self) -> Map<String, Value> {
        self.schema.clone()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.schema.get(key)
    }

    /// Property schemas of an object schema
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.schema.get("properties").and_then(Value::as_object)
    }

    /// Names listed under `required`, empty when there is no such key
    pub fn required(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.schema.clone())
    }
}

impl Serialize for JsonSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.schema.serialize(serializer)
    }
}

impl fmt::Display for JsonSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.schema.clone()))
    }
}

/// Fluent builder for response schemas handed to the AI service.
///
/// # Example
/// ```
/// use recipe_shared::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::object()
///     .property("name", SchemaBuilder::string().description("Display name"))
///     .property("steps", SchemaBuilder::array().items(SchemaBuilder::string()))
///     .required(["name"])
///     .build();
///
/// assert_eq!(schema.required(), vec!["name"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaBuilder {
    schema: Map<String, Value>,
}

impl SchemaBuilder {
    pub fn of(schema_type: SchemaType) -> Self {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from(schema_type.as_str()));
        SchemaBuilder { schema }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn integer() -> Self {
        Self::of(SchemaType::Integer)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaType::Boolean)
    }

    pub fn array() -> Self {
        Self::of(SchemaType::Array)
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.schema
            .insert("description".to_string(), Value::from(description.into()));
        self
    }

    pub fn items(mut self, items: SchemaBuilder) -> Self {
        self.schema
            .insert("items".to_string(), Value::Object(items.schema));
        self
    }

    /// Add one property, creating the `properties` object on first use
    pub fn property(mut self, name: impl Into<String>, property: SchemaBuilder) -> Self {
        let properties = self
            .schema
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(properties) = properties {
            properties.insert(name.into(), Value::Object(property.schema));
        }
        self
    }

    /// Replace all properties at once
    pub fn properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaBuilder)>,
        K: Into<String>,
    {
        let map = properties
            .into_iter()
            .map(|(name, property)| (name.into(), Value::Object(property.schema)))
            .collect();
        self.schema
            .insert("properties".to_string(), Value::Object(map));
        self
    }

    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(|n| Value::from(n.into())).collect();
        self.schema.insert("required".to_string(), Value::Array(names));
        self
    }

    pub fn build(self) -> JsonSchema {
        JsonSchema::new(self.schema)
    }

    /// `{"type": ..., "description": ...}` in one call
    pub fn simple_property(schema_type: SchemaType, description: impl Into<String>) -> Self {
        Self::of(schema_type).description(description)
    }
}
