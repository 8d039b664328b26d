//! Batch response selection
//!
//! The [`Selector`] is the re-ranking stage between a response-scoring model
//! and the dialogue caller. Per batch item it builds a deduplicated (and
//! optionally externally filtered) candidate pool, orders it by score
//! descending, and either samples one response from the top-K with
//! exponential-decay weights or returns the top-N deterministically.
//!
//! # Flow
//!
//! ```text
//! candidates + scores (+ external scores)
//!      │
//!      ▼
//! ┌──────────────────────────────────────────┐
//! │                Selector                  │
//! │  ┌───────────┐   ┌────────────────────┐  │
//! │  │build_pool │──▶│ sort by score desc │  │
//! │  └───────────┘   └─────────┬──────────┘  │
//! │                            │             │
//! │          ┌─────────────────┴───────┐     │
//! │          ▼                         ▼     │
//! │  weighted sample (top-K)     top-N slice │
//! └──────────┬─────────────────────────┬─────┘
//!            ▼                         ▼
//!      one response            ranked responses
//! ```
//!
//! # Stateless Design
//!
//! The Selector holds only immutable configuration. Every call consumes its
//! own inputs and the caller-supplied random source, so concurrent callers
//! never share state.

use crate::config::SelectorConfig;
use crate::pool::build_pool;
use crate::weights::{decay_weights, draw};
use rand::Rng;
use riposte_core::{Candidate, Error, Result, Score, ScoredCandidate};

// ============================================================================
// Selector
// ============================================================================

/// Re-ranking selector over batched candidate responses
///
/// Construct once with a [`SelectorConfig`]; invoke per dialogue turn.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Create a new Selector with the given configuration
    pub fn new(config: SelectorConfig) -> Self {
        Selector { config }
    }

    /// The configuration this selector was built with
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select responses for a batch using the thread-local random generator
    ///
    /// Convenience wrapper around [`Selector::select_with_rng`] for callers
    /// that do not need reproducible draws. Top-N mode never consults the
    /// generator.
    pub fn select<C: Candidate>(
        &self,
        candidates_batch: &[Vec<C>],
        preds_batch: &[Vec<Score>],
        ext_score_batch: Option<&[Vec<Score>]>,
    ) -> Result<Vec<Vec<ScoredCandidate<C>>>> {
        self.select_with_rng(
            candidates_batch,
            preds_batch,
            ext_score_batch,
            &mut rand::thread_rng(),
        )
    }

    /// Select responses for a batch with an explicit random source
    ///
    /// `candidates_batch` and `preds_batch` must have the same outer length
    /// and positionally aligned rows. `ext_score_batch` is optional; a row
    /// aligned with its candidates enables threshold filtering for that item.
    ///
    /// Returns one ranked list per item: a single sampled response in
    /// sampling mode, or up to `topn` responses in top-N mode, each paired
    /// with its model score in descending-score order.
    ///
    /// # Errors
    ///
    /// - [`Error::BatchShapeMismatch`] if the outer batch lengths differ
    /// - [`Error::ItemShapeMismatch`] if an item's rows differ in length
    /// - [`Error::EmptyPool`] if filtering removes every candidate of an item
    pub fn select_with_rng<C: Candidate, R: Rng + ?Sized>(
        &self,
        candidates_batch: &[Vec<C>],
        preds_batch: &[Vec<Score>],
        ext_score_batch: Option<&[Vec<Score>]>,
        rng: &mut R,
    ) -> Result<Vec<Vec<ScoredCandidate<C>>>> {
        if candidates_batch.len() != preds_batch.len() {
            return Err(Error::BatchShapeMismatch {
                candidate_items: candidates_batch.len(),
                score_items: preds_batch.len(),
            });
        }

        let mut responses = Vec::with_capacity(candidates_batch.len());
        for (item, (candidates, scores)) in
            candidates_batch.iter().zip(preds_batch).enumerate()
        {
            let ext_row = ext_score_batch
                .and_then(|batch| batch.get(item))
                .map(Vec::as_slice);
            responses.push(self.select_item(item, candidates, scores, ext_row, rng)?);
        }

        Ok(responses)
    }

    // ========================================================================
    // Per-Item Selection
    // ========================================================================

    fn select_item<C: Candidate, R: Rng + ?Sized>(
        &self,
        item: usize,
        candidates: &[C],
        scores: &[Score],
        ext_scores: Option<&[Score]>,
        rng: &mut R,
    ) -> Result<Vec<ScoredCandidate<C>>> {
        let mut ranked = build_pool(
            item,
            candidates,
            scores,
            ext_scores,
            self.config.ext_score_threshold,
        )?;

        if self.config.return_topn {
            ranked.truncate(self.config.topn);
            return Ok(ranked);
        }

        let sample_size = self.config.sample_size.max(1);
        let weights = decay_weights(sample_size, self.config.lambda_coeff, ranked.len());
        let chosen = ranked.swap_remove(draw(&weights, rng));

        tracing::debug!(
            target: "riposte::select",
            item,
            candidate = ?chosen.candidate,
            score = chosen.score,
            "sampled response"
        );

        Ok(vec![chosen])
    }
}

// ============================================================================
// Tests
// ============================================================================
