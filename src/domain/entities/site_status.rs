//! Status of a single monitored site as reported by the external checker.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

/// A reported measurement.
///
/// The checker usually emits numbers, but on failed checks it writes text
/// (e.g. `"SSL Error: ..."`) into numeric fields, so both are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(Number),
    Text(String),
}

impl Reading {
    /// Converts a raw JSON value, discarding anything that is not a number or string.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{i}")
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{u}")
                } else {
                    // f64 Display drops the fraction of integral values: 100.0 -> "100"
                    match n.as_f64() {
                        Some(x) => write!(f, "{x}"),
                        None => write!(f, "{n}"),
                    }
                }
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One site's entry in the status document.
///
/// Deserialization never fails on individual fields: wrong-typed or missing
/// values become `None` (or `false` for `online`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteStatus {
    #[serde(default, deserialize_with = "strict_flag")]
    pub online: bool,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub latency: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub uptime: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub ssl_days_remaining: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub last_check: Option<Reading>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub status_code: Option<Reading>,
}

impl SiteStatus {
    /// Builds a status from an arbitrary JSON value.
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// CSS class used for the card.
    pub fn state_class(&self) -> &'static str {
        if self.online { "online" } else { "offline" }
    }
}

fn strict_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(matches!(value, Value::Bool(true)))
}

fn lenient_reading<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Reading>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(Reading::from_value(value))
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}
