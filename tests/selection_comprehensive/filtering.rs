//! External-Score Filtering Tests
//!
//! Thresholded filtering by the secondary relevance signal: strictness,
//! activation rules, and interaction with deduplication.

use super::*;

// =============================================================================
// THRESHOLD TESTS
// =============================================================================

/// No returned candidate has an external score at or below the threshold
#[test]
fn test_filter_no_response_at_or_below_threshold() {
    let selector = topn_selector(10);
    let candidates = vec![strings(&["a", "b", "c", "d"])];
    let scores = vec![vec![0.9, 0.8, 0.7, 0.6]];
    let ext = vec![vec![0.5, 0.0, -0.2, 0.1]];

    let result = selector.select(&candidates, &scores, Some(&ext)).unwrap();
    let kept: Vec<&str> = result[0].iter().map(|sc| sc.candidate.as_str()).collect();
    // threshold 0.0 is strict: only strictly positive external scores survive
    assert_eq!(kept, vec!["a", "d"]);
}

/// A custom threshold is honored strictly
#[test]
fn test_filter_custom_threshold_is_strict() {
    let selector = Selector::new(
        SelectorConfig::default()
            .with_return_topn(true)
            .with_topn(10)
            .with_ext_score_threshold(0.4),
    );
    let candidates = vec![strings(&["at", "above", "below"])];
    let scores = vec![vec![0.1, 0.2, 0.3]];
    let ext = vec![vec![0.4, 0.41, 0.39]];

    let result = selector.select(&candidates, &scores, Some(&ext)).unwrap();
    let kept: Vec<&str> = result[0].iter().map(|sc| sc.candidate.as_str()).collect();
    assert_eq!(kept, vec!["above"]);
}

/// Filtering applies in sampling mode too
#[test]
fn test_filter_applies_in_sampling_mode() {
    let selector = sampling_selector();
    let candidates = vec![strings(&["keep", "drop"])];
    let scores = vec![vec![0.1, 0.9]];
    let ext = vec![vec![1.0, -1.0]];

    for seed in 0..16 {
        let result = selector
            .select_with_rng(&candidates, &scores, Some(&ext), &mut seeded(seed))
            .unwrap();
        assert_eq!(result[0][0].candidate, "keep");
    }
}

// =============================================================================
// ACTIVATION TESTS
// =============================================================================

/// No external batch means no filtering
#[test]
fn test_filter_absent_batch_keeps_all() {
    let selector = topn_selector(10);
    let candidates = vec![strings(&["a", "b"])];
    let scores = vec![vec![0.5, 0.4]];

    let result = selector.select(&candidates, &scores, None).unwrap();
    assert_eq!(result[0].len(), 2);
}

/// A misaligned external row disables filtering for that item only
#[test]
fn test_filter_misaligned_row_disables_per_item() {
    let selector = topn_selector(10);
    let candidates = vec![strings(&["a", "b"]), strings(&["c", "d"])];
    let scores = vec![vec![0.5, 0.4], vec![0.6, 0.7]];
    // First row misaligned (no filtering); second row aligned and filtering.
    let ext = vec![vec![-9.0], vec![1.0, -1.0]];

    let result = selector.select(&candidates, &scores, Some(&ext)).unwrap();
    assert_eq!(result[0].len(), 2);
    let second: Vec<&str> = result[1].iter().map(|sc| sc.candidate.as_str()).collect();
    assert_eq!(second, vec!["c"]);
}

/// An external batch shorter than the candidate batch leaves trailing items
/// unfiltered
#[test]
fn test_filter_short_batch_leaves_tail_unfiltered() {
    let selector = topn_selector(10);
    let candidates = vec![strings(&["a"]), strings(&["b", "c"])];
    let scores = vec![vec![0.5], vec![0.6, 0.7]];
    let ext = vec![vec![1.0]];

    let result = selector.select(&candidates, &scores, Some(&ext)).unwrap();
    assert_eq!(result[1].len(), 2);
}

// =============================================================================
// DEDUPLICATION INTERACTION TESTS
// =============================================================================

/// A duplicate passing the filter at any position survives with its
/// last-occurrence score
#[test]
fn test_filter_duplicate_passing_any_position_survives() {
    let selector = topn_selector(10);
    let candidates = vec![strings(&["a", "b", "a"])];
    let scores = vec![vec![0.1, 0.5, 0.9]];
    let ext = vec![vec![-1.0, 1.0, 1.0]];

    let result = selector.select(&candidates, &scores, Some(&ext)).unwrap();
    let kept: Vec<&str> = result[0].iter().map(|sc| sc.candidate.as_str()).collect();
    assert_eq!(kept, vec!["a", "b"]);
    assert_eq!(result[0][0].score, 0.9);
}

/// Filtering then deduplicating never resurrects a filtered-out candidate
#[test]
fn test_filter_rejected_everywhere_stays_out() {
    let selector = topn_selector(10);
    let candidates = vec![strings(&["a", "b", "a"])];
    let scores = vec![vec![0.9, 0.5, 0.8]];
    let ext = vec![vec![-1.0, 1.0, -1.0]];

    let result = selector.select(&candidates, &scores, Some(&ext)).unwrap();
    let kept: Vec<&str> = result[0].iter().map(|sc| sc.candidate.as_str()).collect();
    assert_eq!(kept, vec!["b"]);
}
