use msme_score::scoring::{
    aggregate, aggregate_with, classify, AggregateOptions, Band, CategoryEntry, Dimension,
    ScoringError, WeightPolicy, DEFAULT_SCALE,
};
use proptest::prelude::*;

/// Build entries from raw (dimension index, score, positive share) triples,
/// scaling the shares so the weights sum to 1.
fn entries_from(raw: &[(usize, f64, f64)]) -> Vec<CategoryEntry> {
    let total: f64 = raw.iter().map(|(_, _, share)| share).sum();
    raw.iter()
        .enumerate()
        .map(|(i, (dim, score, share))| {
            CategoryEntry::new(
                Dimension::ALL[dim % Dimension::ALL.len()],
                format!("metric {}", i),
                *score,
                share / total,
            )
        })
        .collect()
}

fn raw_entries() -> impl Strategy<Value = Vec<(usize, f64, f64)>> {
    prop::collection::vec((0usize..4, 0.0f64..=100.0, 1.0f64..10.0), 1..16)
}

proptest! {
    #[test]
    fn composite_stays_within_scale(raw in raw_entries(), scale in 1.0f64..5000.0) {
        let entries = entries_from(&raw);
        let result = aggregate(&entries, scale).unwrap();
        prop_assert!(result.composite_score >= 0.0);
        prop_assert!(result.composite_score <= scale);
    }

    #[test]
    fn aggregate_is_deterministic(raw in raw_entries()) {
        let entries = entries_from(&raw);
        let first = aggregate(&entries, DEFAULT_SCALE).unwrap();
        let second = aggregate(&entries, DEFAULT_SCALE).unwrap();
        prop_assert_eq!(first.composite_score.to_bits(), second.composite_score.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_subtotal_per_distinct_dimension(raw in raw_entries()) {
        let entries = entries_from(&raw);
        let result = aggregate(&entries, DEFAULT_SCALE).unwrap();

        let mut seen: Vec<Dimension> = Vec::new();
        for entry in &entries {
            if !seen.contains(&entry.dimension) {
                seen.push(entry.dimension);
            }
        }
        let dims: Vec<Dimension> = result.dimension_subtotals.iter().map(|s| s.dimension).collect();
        prop_assert_eq!(dims, seen);

        let weight_sum: f64 = result.dimension_subtotals.iter().map(|s| s.subtotal_weight).sum();
        prop_assert!((weight_sum - 1.0).abs() <= 1e-6);

        for subtotal in &result.dimension_subtotals {
            prop_assert!(subtotal.subtotal_score >= -1e-9);
            prop_assert!(subtotal.subtotal_score <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn band_matches_classify(raw in raw_entries()) {
        let entries = entries_from(&raw);
        let result = aggregate(&entries, DEFAULT_SCALE).unwrap();
        prop_assert_eq!(result.band, classify(result.composite_score, DEFAULT_SCALE));
    }

    #[test]
    fn classify_is_total(score in proptest::num::f64::ANY, scale in 1.0f64..5000.0) {
        // Must not panic for any input
        let _ = classify(score, scale);
    }
}

#[test]
fn dashboard_profile_end_to_end() {
    use Dimension::*;
    let entries: Vec<CategoryEntry> = [
        (Financial, 72.0, 0.15),
        (Financial, 68.0, 0.10),
        (Financial, 70.0, 0.10),
        (Business, 75.0, 0.15),
        (Business, 77.0, 0.10),
        (Social, 82.0, 0.08),
        (Social, 78.0, 0.07),
        (Social, 74.0, 0.05),
        (Social, 76.0, 0.05),
        (Digital, 73.0, 0.05),
        (Digital, 71.0, 0.05),
        (Digital, 69.0, 0.05),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (d, s, w))| CategoryEntry::new(d, format!("metric {}", i), s, w))
    .collect();

    let result = aggregate(&entries, DEFAULT_SCALE).unwrap();
    assert_eq!(result.composite_score, 737.0);
    assert_eq!(result.band, Band::Good);
    assert_eq!(result.dimension_subtotals.len(), 4);
}

#[test]
fn weights_summing_to_point_nine_are_rejected() {
    let entries = vec![
        CategoryEntry::new(Dimension::Financial, "Financial Health", 70.0, 0.45),
        CategoryEntry::new(Dimension::Social, "Skill Development", 70.0, 0.45),
    ];
    let err = aggregate(&entries, DEFAULT_SCALE).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidWeightSum { .. }));

    let normalized = aggregate_with(
        &entries,
        &AggregateOptions {
            weight_policy: WeightPolicy::Normalize,
            ..AggregateOptions::default()
        },
    )
    .unwrap();
    assert_eq!(normalized.composite_score, 700.0);
}

#[test]
fn classify_boundaries() {
    let cases = [
        (750.0, Band::Excellent),
        (749.0, Band::Good),
        (650.0, Band::Good),
        (649.0, Band::Fair),
        (500.0, Band::Fair),
        (499.0, Band::Poor),
    ];
    for (score, expected) in cases {
        assert_eq!(classify(score, 1000.0), expected, "score {}", score);
    }
}
