use super::config::ScoringConfig;
use super::engine::{AggregateOptions, WeightPolicy};
use super::error::ScoringError;
use super::types::CategoryEntry;

/// Largest number of decimal places the composite score may keep.
pub const MAX_PRECISION: u32 = 6;

/// Check aggregation inputs, failing on the first problem found.
///
/// Returns the raw weight sum. Under `WeightPolicy::Normalize` a sum outside
/// the tolerance is accepted so the caller can rescale.
pub fn validate_entries(
    entries: &[CategoryEntry],
    options: &AggregateOptions,
) -> Result<f64, ScoringError> {
    if !options.scale.is_finite() || options.scale <= 0.0 {
        return Err(ScoringError::InvalidScale(options.scale));
    }
    if options.precision > MAX_PRECISION {
        return Err(ScoringError::InvalidPrecision {
            precision: options.precision,
            max: MAX_PRECISION,
        });
    }
    if !(options.tolerance > 0.0 && options.tolerance < 1.0) {
        return Err(ScoringError::InvalidTolerance(options.tolerance));
    }
    if entries.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    for (index, entry) in entries.iter().enumerate() {
        if !(0.0..=100.0).contains(&entry.score) {
            return Err(ScoringError::OutOfRangeScore {
                index,
                label: entry.label.clone(),
                score: entry.score,
            });
        }
        if !(entry.weight > 0.0 && entry.weight <= 1.0) {
            return Err(ScoringError::OutOfRangeWeight {
                index,
                label: entry.label.clone(),
                weight: entry.weight,
            });
        }
    }

    let sum: f64 = entries.iter().map(|e| e.weight).sum();
    if options.weight_policy == WeightPolicy::Strict && (sum - 1.0).abs() > options.tolerance {
        return Err(ScoringError::InvalidWeightSum {
            sum,
            tolerance: options.tolerance,
        });
    }

    Ok(sum)
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(scale) = config.scale {
        if !scale.is_finite() || scale <= 0.0 {
            errors.push(format!("scoring.scale: must be a positive number, got {}", scale));
        }
    }

    if let Some(precision) = config.precision {
        if precision > MAX_PRECISION {
            errors.push(format!(
                "scoring.precision: must be at most {}, got {}",
                MAX_PRECISION, precision
            ));
        }
    }

    if let Some(tolerance) = config.tolerance {
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
            errors.push(format!(
                "scoring.tolerance: must be between 0 and 1 (exclusive), got {}",
                tolerance
            ));
        }
    }

    if let Some(ref bands) = config.bands {
        for (name, value) in [
            ("excellent", bands.excellent),
            ("good", bands.good),
            ("fair", bands.fair),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 100.0 {
                errors.push(format!(
                    "scoring.bands.{}: must be a percentage in (0, 100], got {}",
                    name, value
                ));
            }
        }
        if !(bands.excellent > bands.good && bands.good > bands.fair) {
            errors.push(format!(
                "scoring.bands: thresholds must descend excellent > good > fair, got {} / {} / {}",
                bands.excellent, bands.good, bands.fair
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
