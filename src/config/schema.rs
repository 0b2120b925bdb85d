use serde::{Deserialize, Serialize};

use crate::scoring::{CategoryEntry, ScoringConfig};

/// A business profile: who is being scored and the category scores to combine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub business: Option<BusinessInfo>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessInfo {
    pub name: String,
    /// Enterprise size class, e.g. "Micro", "Small", "Medium"
    #[serde(rename = "type", default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub vintage: Option<String>,
}
