//! Foundational types for response selection

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Relevance score assigned by a scoring model
///
/// Higher means more relevant. Scores are not normalized; the selector only
/// relies on their relative order.
pub type Score = f64;

/// Bound satisfied by any value that can act as a response candidate
///
/// Candidates are opaque to the selector: equality and hashing define
/// deduplication, cloning carries the chosen response into the output, and
/// `Debug` feeds diagnostics. Strings, tuples and custom id types all qualify
/// through the blanket impl.
pub trait Candidate: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Candidate for T {}

/// A candidate paired with the score its ranking is based on
///
/// This is the per-item result element: candidate and score travel together
/// instead of in parallel sequences, so they cannot drift apart downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate<C> {
    /// The selected response value
    pub candidate: C,
    /// The model score the selection was based on
    pub score: Score,
}

impl<C> ScoredCandidate<C> {
    /// Create a new ScoredCandidate
    pub fn new(candidate: C, score: Score) -> Self {
        ScoredCandidate { candidate, score }
    }
}
