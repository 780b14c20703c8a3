//! lenient serde helpers for loosely typed stored records
//!
//! Stored tenant and payment collections may contain amounts typed as
//! strings, `null`, or garbage, and dates in several ISO shapes. None of
//! that is allowed to fail a load: amounts that are not numbers become zero
//! and dates that cannot be read become `None`. Frequencies other than
//! `"Monthly"` bill weekly, and ids may be any string or number.
use chrono::{DateTime, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::decimal::Money;
use crate::types::RentFrequency;

/// deserialize any json value into money, non-numeric values become zero
pub fn lenient_money<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(money_from_value(&value))
}

/// deserialize a calendar date, unreadable values become `None`
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => parse_date(&s),
        _ => None,
    })
}

/// deserialize a small day index (due day, weekday), unreadable values become `None`
pub fn lenient_day<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|d| u8::try_from(d).ok()),
        Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    })
}

/// deserialize a billing frequency; only the exact string `"Monthly"` is monthly
pub fn lenient_frequency<'de, D>(deserializer: D) -> Result<RentFrequency, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if s == "Monthly" => RentFrequency::Monthly,
        _ => RentFrequency::Weekly,
    })
}

/// frequency of a stored record that has none
pub(crate) fn missing_frequency() -> RentFrequency {
    RentFrequency::Weekly
}

/// deserialize a record id from a string or a number
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected a string or numeric id, found {other}"))),
    }
}

pub(crate) fn money_from_value(value: &Value) -> Money {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Money::from_f64_lossy(f),
            _ => Money::coerce(&n.to_string()),
        },
        Value::String(s) => Money::coerce(s),
        _ => Money::ZERO,
    }
}

/// parse `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the calendar date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
