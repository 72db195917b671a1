use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaError;
use crate::utils::{date_to_instant_string, instant_to_date};

/// In-memory date produced by [`instant_to_date`].
///
/// Unparseable input does not fail; it yields `Invalid`, which callers
/// must check for before relying on the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateValue {
    Valid(DateTime<Utc>),
    Invalid,
}

impl DateValue {
    pub fn is_valid(&self) -> bool {
        matches!(self, DateValue::Valid(_))
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::Valid(dt) => Some(*dt),
            DateValue::Invalid => None,
        }
    }

    /// Canonical wire string, or `None` for an invalid date
    pub fn to_wire_string(&self) -> Option<String> {
        self.as_datetime().map(|dt| date_to_instant_string(&dt))
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateValue::Valid(dt)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Valid(dt) => f.write_str(&date_to_instant_string(dt)),
            DateValue::Invalid => f.write_str("Invalid Date"),
        }
    }
}

/// `createdAt` / `updatedAt` value as it crosses a service boundary.
///
/// Producers either hand over the raw wire string or an already parsed
/// instant. Deserialization always produces `Wire`; the only way to get
/// from one variant to the other is through the timestamp converters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Raw string exactly as received
    Wire(String),
    /// Parsed instant
    Instant(DateTime<Utc>),
}

impl Timestamp {
    /// Normalize to an in-memory date. Wire strings that do not parse give
    /// [`DateValue::Invalid`].
    pub fn to_date_value(&self) -> DateValue {
        match self {
            Timestamp::Wire(raw) => instant_to_date(raw),
            Timestamp::Instant(dt) => DateValue::Valid(*dt),
        }
    }

    /// Canonical wire representation (`2024-01-01T10:00:00.000Z`), `None`
    /// when a wire string cannot be parsed.
    pub fn to_wire_string(&self) -> Option<String> {
        self.to_date_value().to_wire_string()
    }

    /// Parse a wire string into the `Instant` variant, rejecting bad input.
    pub fn parse_strict(raw: &str) -> Result<Self, SchemaError> {
        match instant_to_date(raw) {
            DateValue::Valid(dt) => Ok(Timestamp::Instant(dt)),
            DateValue::Invalid => Err(SchemaError::InvalidTimestamp(raw.to_string())),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Instant(dt)
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Timestamp::Wire(raw)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Timestamp::Wire(raw.to_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Wire(raw) => serializer.serialize_str(raw),
            Timestamp::Instant(dt) => serializer.serialize_str(&date_to_instant_string(dt)),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Timestamp::Wire)
    }
}
