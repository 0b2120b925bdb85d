use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::band::Band;

/// Top-level category a sub-metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    Financial,
    Business,
    Social,
    Digital,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Financial,
        Dimension::Business,
        Dimension::Social,
        Dimension::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Financial => "Financial",
            Dimension::Business => "Business",
            Dimension::Social => "Social",
            Dimension::Digital => "Digital",
        }
    }

    /// Name shown in the score distribution chart
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Financial => "Financial Score",
            Dimension::Business => "Business Health",
            Dimension::Social => "Social Impact",
            Dimension::Digital => "Digital Presence",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown dimension '{}' (expected Financial, Business, Social or Digital)",
                    s
                )
            })
    }
}

impl TryFrom<String> for Dimension {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dimension> for String {
    fn from(value: Dimension) -> Self {
        value.as_str().to_string()
    }
}

/// A single weighted sub-metric, e.g. "Revenue Growth" in the Financial dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryEntry {
    pub dimension: Dimension,
    pub label: String,
    /// Raw score on a 0-100 scale
    pub score: f64,
    /// Fraction of the composite, in (0, 1]. Profiles may write "15%".
    #[serde(deserialize_with = "super::weight::deserialize")]
    pub weight: f64,
}

impl CategoryEntry {
    pub fn new(dimension: Dimension, label: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            dimension,
            label: label.into(),
            score,
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSubtotal {
    pub dimension: Dimension,
    /// Sum of member weights
    pub subtotal_weight: f64,
    /// Weighted average of member scores (0-100), independent of the composite scale
    pub subtotal_score: f64,
    /// Points this dimension adds to the composite score
    pub contribution: f64,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResult {
    pub composite_score: f64,
    pub scale: f64,
    /// One per distinct dimension, in first-seen order
    pub dimension_subtotals: Vec<DimensionSubtotal>,
    pub band: Band,
}

impl CompositeResult {
    pub fn subtotal(&self, dimension: Dimension) -> Option<&DimensionSubtotal> {
        self.dimension_subtotals
            .iter()
            .find(|s| s.dimension == dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse_case_insensitive() {
        assert_eq!("financial".parse::<Dimension>().unwrap(), Dimension::Financial);
        assert_eq!(" DIGITAL ".parse::<Dimension>().unwrap(), Dimension::Digital);
        assert!("Environmental".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_dimension_display_names() {
        assert_eq!(Dimension::Financial.display_name(), "Financial Score");
        assert_eq!(Dimension::Business.display_name(), "Business Health");
        assert_eq!(Dimension::Social.display_name(), "Social Impact");
        assert_eq!(Dimension::Digital.display_name(), "Digital Presence");
    }

    #[test]
    fn test_category_entry_parse_fraction_weight() {
        let yaml = r#"
dimension: Business
label: Market Presence
score: 75
weight: 0.15
"#;
        let entry: CategoryEntry = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(
            entry,
            CategoryEntry::new(Dimension::Business, "Market Presence", 75.0, 0.15)
        );
    }

    #[test]
    fn test_category_entry_parse_percent_weight() {
        let yaml = r#"
dimension: social
label: Skill Development
score: 78
weight: "7%"
"#;
        let entry: CategoryEntry = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(entry.dimension, Dimension::Social);
        assert!((entry.weight - 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_category_entry_rejects_unknown_dimension() {
        let yaml = r#"
dimension: Environmental
label: Emissions
score: 50
weight: 0.1
"#;
        let result: Result<CategoryEntry, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_dimension_serializes_as_name() {
        let json = serde_json::to_string(&Dimension::Social).unwrap();
        assert_eq!(json, "\"Social\"");
    }
}
