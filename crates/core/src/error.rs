//! Error types for response selection
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for selection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for response selection
///
/// All errors surface synchronously as failed calls. The selector is a pure
/// computation; retry policy belongs to the orchestrator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Outer batch sequences disagree in length
    #[error("batch shape mismatch: {candidate_items} candidate items, {score_items} score items")]
    BatchShapeMismatch {
        /// Number of items in the candidate batch
        candidate_items: usize,
        /// Number of items in the score batch
        score_items: usize,
    },

    /// One item's candidate and score rows disagree in length
    #[error("shape mismatch in batch item {item}: {candidates} candidates, {scores} scores")]
    ItemShapeMismatch {
        /// Index of the offending batch item
        item: usize,
        /// Candidate count for the item
        candidates: usize,
        /// Score count for the item
        scores: usize,
    },

    /// Filtering and deduplication removed every candidate for an item
    #[error("batch item {item}: candidate pool is empty after filtering")]
    EmptyPool {
        /// Index of the offending batch item
        item: usize,
    },

    /// A pool candidate had no entry in the score association
    ///
    /// Cannot occur when the pool is derived from the same candidate list the
    /// association was built from; surfacing it means an internal invariant
    /// was violated.
    #[error("batch item {item}: pool candidate missing from score association")]
    ScoreLookup {
        /// Index of the offending batch item
        item: usize,
    },
}
