//! Qualitative banding of composite scores.
//!
//! Thresholds are percentages of the scale with inclusive lower bounds, so on
//! a 1000-point scale exactly 750 is `excellent` and exactly 650 is `good`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::Fair => "fair",
            Band::Poor => "poor",
        }
    }

    /// Display color used when rendering the band.
    pub fn color_name(&self) -> &'static str {
        match self {
            Band::Excellent => "green",
            Band::Good => "blue",
            Band::Fair => "yellow",
            Band::Poor => "red",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds of each band, as a percentage of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BandThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            excellent: 75.0,
            good: 65.0,
            fair: 50.0,
        }
    }
}

/// Classify a composite score against the default thresholds.
pub fn classify(composite_score: f64, scale: f64) -> Band {
    classify_with(composite_score, scale, &BandThresholds::default())
}

/// Classify a composite score. Never fails: out-of-range scores land in the
/// nearest band and NaN is `Poor`.
pub fn classify_with(composite_score: f64, scale: f64, thresholds: &BandThresholds) -> Band {
    // Cross-multiply instead of dividing so integer boundaries compare exactly
    let scaled = composite_score * 100.0;
    if scaled >= thresholds.excellent * scale {
        Band::Excellent
    } else if scaled >= thresholds.good * scale {
        Band::Good
    } else if scaled >= thresholds.fair * scale {
        Band::Fair
    } else {
        Band::Poor
    }
}
