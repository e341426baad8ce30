//! Field decoders that accept numbers or numeric strings.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn value(&self) -> Option<f64> {
        let parsed = match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        };
        // `+ 0.0` folds -0.0 into 0.0
        parsed.filter(|v| v.is_finite()).map(|v| v + 0.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(serde_json::Number),
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}

pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = NumberOrText::deserialize(deserializer)?;
    let value = raw
        .value()
        .ok_or_else(|| de::Error::custom("expected a numeric amount"))?;
    if value < 0.0 {
        return Err(de::Error::custom(format!(
            "amount must be non-negative, got {}",
            value
        )));
    }
    Ok(value)
}

pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = amount(deserializer)?;
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(de::Error::custom(format!(
            "expected a whole count, got {}",
            value
        )));
    }
    Ok(value as u32)
}

/// Missing, null or unreadable values all become `None`.
pub fn optional_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| serde_json::from_value::<NumberOrText>(v).ok())
        .and_then(|n| n.value()))
}
