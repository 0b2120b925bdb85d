use thiserror::Error;

/// Input validation failures raised before any aggregation happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("no category entries to aggregate")]
    EmptyInput,

    #[error("category #{index} '{label}': score {score} is outside [0, 100]")]
    OutOfRangeScore {
        index: usize,
        label: String,
        score: f64,
    },

    #[error("category #{index} '{label}': weight {weight} is outside (0, 1]")]
    OutOfRangeWeight {
        index: usize,
        label: String,
        weight: f64,
    },

    #[error("weights sum to {sum}, expected 1 (tolerance {tolerance})")]
    InvalidWeightSum { sum: f64, tolerance: f64 },

    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("precision must be at most {max} decimal places, got {precision}")]
    InvalidPrecision { precision: u32, max: u32 },

    #[error("tolerance must be between 0 and 1 (exclusive), got {0}")]
    InvalidTolerance(f64),
}
