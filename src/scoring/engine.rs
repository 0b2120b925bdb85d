use serde::{Deserialize, Serialize};

use super::band::{classify_with, BandThresholds};
use super::error::ScoringError;
use super::types::{CategoryEntry, CompositeResult, Dimension, DimensionSubtotal};
use super::validation::validate_entries;

pub const DEFAULT_SCALE: f64 = 1000.0;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// What to do when the weights do not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    /// Reject with `InvalidWeightSum`
    #[default]
    Strict,
    /// Rescale every weight by 1 / sum
    Normalize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOptions {
    pub scale: f64,
    /// Decimal places kept in the composite score (0 rounds to an integer)
    pub precision: u32,
    pub tolerance: f64,
    pub weight_policy: WeightPolicy,
    pub bands: BandThresholds,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            precision: 0,
            tolerance: DEFAULT_TOLERANCE,
            weight_policy: WeightPolicy::Strict,
            bands: BandThresholds::default(),
        }
    }
}

/// Aggregate weighted category scores into a composite on `scale` points.
pub fn aggregate(entries: &[CategoryEntry], scale: f64) -> Result<CompositeResult, ScoringError> {
    aggregate_with(
        entries,
        &AggregateOptions {
            scale,
            ..AggregateOptions::default()
        },
    )
}

struct DimensionAcc {
    dimension: Dimension,
    weight: f64,
    points: f64,
    count: usize,
}

pub fn aggregate_with(
    entries: &[CategoryEntry],
    options: &AggregateOptions,
) -> Result<CompositeResult, ScoringError> {
    let weight_sum = validate_entries(entries, options)?;

    let weight_factor = match options.weight_policy {
        WeightPolicy::Normalize if (weight_sum - 1.0).abs() > options.tolerance => 1.0 / weight_sum,
        _ => 1.0,
    };

    // Partition by dimension, keeping first-seen order
    let mut groups: Vec<DimensionAcc> = Vec::with_capacity(Dimension::ALL.len());
    let mut total_points = 0.0;
    for entry in entries {
        let weight = entry.weight * weight_factor;
        let points = entry.score * weight;
        total_points += points;

        match groups.iter_mut().find(|g| g.dimension == entry.dimension) {
            Some(group) => {
                group.weight += weight;
                group.points += points;
                group.count += 1;
            }
            None => groups.push(DimensionAcc {
                dimension: entry.dimension,
                weight,
                points,
                count: 1,
            }),
        }
    }

    let unit = options.scale / 100.0;
    let composite_score =
        round_to(total_points * unit, options.precision).clamp(0.0, options.scale);

    let dimension_subtotals = groups
        .into_iter()
        .map(|g| DimensionSubtotal {
            dimension: g.dimension,
            subtotal_weight: g.weight,
            subtotal_score: if g.weight > 0.0 { g.points / g.weight } else { 0.0 },
            contribution: g.points * unit,
            entry_count: g.count,
        })
        .collect();

    Ok(CompositeResult {
        composite_score,
        scale: options.scale,
        dimension_subtotals,
        band: classify_with(composite_score, options.scale, &options.bands),
    })
}

fn round_to(value: f64, precision: u32) -> f64 {
    if precision == 0 {
        return value.round();
    }
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
