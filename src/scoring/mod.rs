pub mod band;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;
pub mod validation;
pub mod weight;

pub use band::{classify, classify_with, Band, BandThresholds};
pub use config::ScoringConfig;
pub use engine::{
    aggregate, aggregate_with, AggregateOptions, WeightPolicy, DEFAULT_SCALE, DEFAULT_TOLERANCE,
};
pub use error::ScoringError;
pub use types::{CategoryEntry, CompositeResult, Dimension, DimensionSubtotal};
pub use validation::{validate_entries, validate_scoring};
pub use weight::parse_weight;
