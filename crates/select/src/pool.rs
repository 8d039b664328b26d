//! Candidate pool preparation
//!
//! Builds the per-item working pool the selector ranks over: positional
//! candidate→score association (a repeated candidate keeps the score of its
//! last occurrence), optional external-score filtering, deduplication, and
//! the descending sort.

use riposte_core::{Candidate, Error, Result, Score, ScoredCandidate};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Build one item's deduplicated, descending-sorted candidate pool.
///
/// External filtering is active only when `ext_scores` is present and
/// aligned with `candidates`; a misaligned row is tolerated (the filter is
/// skipped for the item) and logged. A candidate survives the filter when
/// its external score strictly exceeds `ext_score_threshold` at any of its
/// positions.
///
/// Deduplication preserves first-occurrence order so that the stable sort
/// keeps tie order deterministic across calls.
pub(crate) fn build_pool<C: Candidate>(
    item: usize,
    candidates: &[C],
    scores: &[Score],
    ext_scores: Option<&[Score]>,
    ext_score_threshold: Score,
) -> Result<Vec<ScoredCandidate<C>>> {
    if candidates.len() != scores.len() {
        return Err(Error::ItemShapeMismatch {
            item,
            candidates: candidates.len(),
            scores: scores.len(),
        });
    }

    // Positional association; later duplicates overwrite earlier ones.
    let mut assoc: HashMap<&C, Score> = HashMap::with_capacity(candidates.len());
    for (cand, &score) in candidates.iter().zip(scores) {
        assoc.insert(cand, score);
    }

    let ext_row = match ext_scores {
        Some(row) if row.len() == candidates.len() => Some(row),
        Some(row) => {
            tracing::warn!(
                target: "riposte::select",
                item,
                candidates = candidates.len(),
                ext_scores = row.len(),
                "external score row misaligned with candidates, skipping filter"
            );
            None
        }
        None => None,
    };

    let mut seen: HashSet<&C> = HashSet::with_capacity(candidates.len());
    let mut pool: Vec<&C> = Vec::new();
    match ext_row {
        Some(row) => {
            for (cand, &ext) in candidates.iter().zip(row) {
                if ext > ext_score_threshold && seen.insert(cand) {
                    pool.push(cand);
                }
            }
        }
        None => {
            for cand in candidates {
                if seen.insert(cand) {
                    pool.push(cand);
                }
            }
        }
    }

    tracing::debug!(
        target: "riposte::select",
        item,
        ext_filter = ext_row.is_some(),
        candidates = candidates.len(),
        pool = pool.len(),
        "built candidate pool"
    );

    if pool.is_empty() {
        return Err(Error::EmptyPool { item });
    }

    let mut ranked = Vec::with_capacity(pool.len());
    for cand in pool {
        let score = assoc.get(cand).copied().ok_or(Error::ScoreLookup { item })?;
        ranked.push(ScoredCandidate::new(cand.clone(), score));
    }

    // Stable sort: equal (or NaN) scores keep first-occurrence order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(ranked)
}
