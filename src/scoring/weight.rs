use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer};

/// Parse a weight written either as a fraction ("0.15") or a percentage ("15%").
///
/// Range is not checked here; that is the aggregator's job.
pub fn parse_weight(s: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        bail!("Weight must not be empty");
    }
    if let Some(val) = s.strip_suffix('%') {
        let pct: f64 = val.trim().parse()?;
        Ok(pct / 100.0)
    } else {
        Ok(s.parse()?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Number(f64),
    Text(String),
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawWeight::deserialize(deserializer)? {
        RawWeight::Number(n) => Ok(n),
        RawWeight::Text(s) => parse_weight(&s).map_err(|e| {
            serde::de::Error::custom(format!("invalid weight '{}': {}", s, e))
        }),
    }
}
