//! Tests for WeightedSourceSelector

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CuratorError;
use crate::services::random::SeededRandom;
use crate::services::source_selector::WeightedSourceSelector;
use crate::traits::MockRandomSource;

fn weights(entries: &[(&str, u32)]) -> Vec<(String, u32)> {
    entries.iter().map(|(k, w)| (k.to_string(), *w)).collect()
}

fn fixed_unit(value: f64) -> Arc<MockRandomSource> {
    let mut rng = MockRandomSource::new();
    rng.expect_next_unit().return_const(value);
    Arc::new(rng)
}

#[test]
fn test_frequencies_converge_to_weights() {
    let selector = WeightedSourceSelector::new(
        weights(&[("a", 35), ("b", 35), ("c", 20), ("d", 10), ("z", 0)]),
        Arc::new(SeededRandom::new(42)),
    )
    .unwrap();

    let samples = 100_000;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..samples {
        *counts.entry(selector.select().unwrap().to_string()).or_default() += 1;
    }

    for (key, expected) in [("a", 0.35), ("b", 0.35), ("c", 0.20), ("d", 0.10)] {
        let observed = counts.get(key).copied().unwrap_or(0) as f64 / samples as f64;
        assert!(
            (observed - expected).abs() < 0.02,
            "source {key}: observed {observed:.4}, expected {expected}"
        );
    }
    assert!(!counts.contains_key("z"), "zero-weight source must never be selected");
}

#[test]
fn test_boundary_goes_to_earlier_source() {
    let selector = WeightedSourceSelector::new(weights(&[("a", 1), ("b", 1)]), fixed_unit(0.5)).unwrap();
    assert_eq!(selector.select().unwrap(), "a");
}

#[test]
fn test_zero_weight_source_skipped_at_zero_draw() {
    let selector = WeightedSourceSelector::new(weights(&[("z", 0), ("a", 5)]), fixed_unit(0.0)).unwrap();
    assert_eq!(selector.select().unwrap(), "a");
    assert_eq!(selector.total_weight(), 5);
}

#[test]
fn test_high_draw_selects_last_source() {
    let selector =
        WeightedSourceSelector::new(weights(&[("a", 35), ("b", 35), ("c", 30)]), fixed_unit(0.999)).unwrap();
    assert_eq!(selector.select().unwrap(), "c");
}

#[test]
fn test_no_weighted_sources_is_an_error() {
    let result = WeightedSourceSelector::new(vec![], Arc::new(SeededRandom::new(1)));
    assert!(matches!(result, Err(CuratorError::NoEnabledSources)));

    let result = WeightedSourceSelector::new(weights(&[("a", 0), ("b", 0)]), Arc::new(SeededRandom::new(1)));
    assert!(matches!(result, Err(CuratorError::NoEnabledSources)));
}

#[test]
fn test_keys_keep_configured_order() {
    let selector =
        WeightedSourceSelector::new(weights(&[("met", 35), ("artic", 35)]), Arc::new(SeededRandom::new(3))).unwrap();
    assert_eq!(selector.keys().collect::<Vec<_>>(), vec!["met", "artic"]);
}
