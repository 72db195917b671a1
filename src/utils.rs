//! Normalization helpers shared by every producer and consumer of recipes.
//!
//! All functions here are pure. Bad input never produces an error: callers
//! get `NaN`, `None` or [`DateValue::Invalid`] and decide what to do.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound,
    TimeZone, Timelike, Utc,
};
use log::debug;
use serde::Deserialize;

use crate::model::{DateValue, Recipe, Servings};

/// How a stored `0` in a minutes field is read by the total-time calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TimingPolicy {
    /// `0` is indistinguishable from a missing value (historic behaviour)
    #[default]
    #[serde(rename = "absent")]
    ZeroIsAbsent,
    /// `0` is a real duration
    #[serde(rename = "value")]
    ZeroIsValue,
}

/// Coerce servings to a number.
///
/// Numbers pass through untouched, fractions included. Text is read as a
/// base-10 integer prefix, so `"4 people"` gives `4.0`; text without any
/// leading digits gives `f64::NAN`.
pub fn servings_as_number(servings: impl Into<Servings>) -> f64 {
    servings_value(&servings.into())
}

pub(crate) fn servings_value(servings: &Servings) -> f64 {
    match servings {
        Servings::Count(n) => *n,
        Servings::Text(text) => parse_int_prefix(text).unwrap_or_else(|| {
            debug!("Servings {:?} has no leading integer", text);
            f64::NAN
        }),
    }
}

// Leading whitespace, optional sign, then the longest run of digits.
fn parse_int_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    let value: f64 = unsigned[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Best available total time in minutes.
///
/// An explicit `total_time_minutes` wins; otherwise prep and cook are
/// summed when both are known. One of them alone is not enough. Zero (and
/// `NaN`) is treated as missing, see [`total_time_minutes_with`] to change
/// that.
pub fn calculated_total_time_minutes(recipe: &Recipe) -> Option<f64> {
    total_time_minutes_with(recipe, TimingPolicy::ZeroIsAbsent)
}

pub fn total_time_minutes_with(recipe: &Recipe, policy: TimingPolicy) -> Option<f64> {
    let usable = |minutes: Option<f64>| match policy {
        TimingPolicy::ZeroIsAbsent => minutes.filter(|m| *m != 0.0 && !m.is_nan()),
        TimingPolicy::ZeroIsValue => minutes.filter(|m| !m.is_nan()),
    };

    if let Some(total) = usable(recipe.total_time_minutes) {
        return Some(total);
    }

    match (
        usable(recipe.prep_time_minutes),
        usable(recipe.cook_time_minutes),
    ) {
        (Some(prep), Some(cook)) => Some(prep + cook),
        (prep, cook) => {
            if prep.is_some() != cook.is_some() {
                debug!(
                    "Only one of prep/cook minutes set for {:?}, no total",
                    recipe.recipe_name
                );
            }
            None
        }
    }
}

/// Parse a wire timestamp into an in-memory date.
///
/// Accepts ISO-8601 instants with or without fractional seconds, including
/// signed extended years (`+010000-01-01T00:00:00.000Z`). Without an offset
/// the value is read as UTC. Precision is cut to milliseconds. Leap seconds
/// (`:60`) are rejected.
pub fn instant_to_date(raw: &str) -> DateValue {
    match parse_instant(raw.trim()) {
        Some(dt) => DateValue::Valid(dt.trunc_subsecs(3)),
        None => {
            debug!("Timestamp {:?} is not an ISO-8601 instant", raw);
            DateValue::Invalid
        }
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let local = match split_extended_year(text) {
        // Parse the rest against a leap placeholder year, then move it
        Some((year, rest)) => parse_local(&format!("2000{rest}"))?.with_year(year)?,
        None => parse_local(text)?,
    };
    if local.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(local.with_timezone(&Utc))
}

// `+YYYYYY-...` / `-YYYY-...`: sign followed by four to six year digits
fn split_extended_year(text: &str) -> Option<(i32, &str)> {
    let negative = match text.as_bytes().first()? {
        b'+' => false,
        b'-' => true,
        _ => return None,
    };
    let digits = text[1..].bytes().take_while(|b| b.is_ascii_digit()).count();
    if !(4..=6).contains(&digits) {
        return None;
    }
    let year: i32 = text[1..=digits].parse().ok()?;
    Some((if negative { -year } else { year }, &text[1 + digits..]))
}

fn parse_local(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    // +hhmm offsets
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt);
    }
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc().fixed_offset())
}

/// Render an instant in the wire format: UTC, millisecond precision,
/// trailing `Z` (`2024-01-01T10:00:00.000Z`). Years outside 0..=9999 use
/// the six-digit signed form (`+010000-01-01T00:00:00.000Z`).
pub fn date_to_instant_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let utc = date.with_timezone(&Utc);
    let year = utc.year();
    if (0..=9999).contains(&year) {
        return utc.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    format!(
        "{}{:06}{}",
        if year < 0 { '-' } else { '+' },
        year.unsigned_abs(),
        utc.format("-%m-%dT%H:%M:%S%.3fZ")
    )
}
