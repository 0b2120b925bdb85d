//! Digital social-financial scoring for MSMEs.
//!
//! Weighted category scores across the Financial, Business, Social and
//! Digital dimensions are combined into a composite score and a band:
//!
//! ```
//! use msme_score::scoring::{aggregate, Band, CategoryEntry, Dimension, DEFAULT_SCALE};
//!
//! let entries = vec![
//!     CategoryEntry::new(Dimension::Financial, "Revenue Growth", 80.0, 0.6),
//!     CategoryEntry::new(Dimension::Digital, "Online Reputation", 70.0, 0.4),
//! ];
//! let result = aggregate(&entries, DEFAULT_SCALE).unwrap();
//! assert_eq!(result.composite_score, 760.0);
//! assert_eq!(result.band, Band::Excellent);
//! ```

pub mod config;
pub mod output;
pub mod scoring;
