use serde::{Deserialize, Serialize};

use super::band::BandThresholds;
use super::engine::{AggregateOptions, WeightPolicy, DEFAULT_SCALE, DEFAULT_TOLERANCE};

/// Scoring configuration.
///
/// Every field is optional; missing fields fall back to the defaults used by
/// `AggregateOptions::default()`.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   scale: 1000
///   precision: 0
///   tolerance: 0.000001
///   normalize_weights: false
///   bands:
///     excellent: 75
///     good: 65
///     fair: 50
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Upper bound of the composite score (default: 1000)
    #[serde(default)]
    pub scale: Option<f64>,

    /// Decimal places kept in the composite score (default: 0)
    #[serde(default)]
    pub precision: Option<u32>,

    /// Allowed deviation of the weight sum from 1 (default: 1e-6)
    #[serde(default)]
    pub tolerance: Option<f64>,

    /// Rescale weights that do not sum to 1 instead of rejecting them
    #[serde(default)]
    pub normalize_weights: Option<bool>,

    /// Band lower bounds as percentages of the scale
    #[serde(default)]
    pub bands: Option<BandThresholds>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scale: Some(DEFAULT_SCALE),
            precision: Some(0),
            tolerance: Some(DEFAULT_TOLERANCE),
            normalize_weights: Some(false),
            bands: Some(BandThresholds::default()),
        }
    }
}

impl ScoringConfig {
    pub fn to_options(&self) -> AggregateOptions {
        let defaults = AggregateOptions::default();
        AggregateOptions {
            scale: self.scale.unwrap_or(defaults.scale),
            precision: self.precision.unwrap_or(defaults.precision),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            weight_policy: if self.normalize_weights.unwrap_or(false) {
                WeightPolicy::Normalize
            } else {
                WeightPolicy::Strict
            },
            bands: self.bands.unwrap_or(defaults.bands),
        }
    }
}
