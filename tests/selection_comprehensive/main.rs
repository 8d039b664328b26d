//! Selection Comprehensive Test Suite
//!
//! Facade-level coverage of the response selector: deterministic top-N
//! ranking, weighted sampling, external-score filtering, and the error
//! contract.
//!
//! ## Modules
//!
//! - `topn`: deterministic top-N mode (ordering, clipping, idempotence)
//! - `sampling`: weighted sampling mode (seeded determinism, weight law)
//! - `filtering`: external-score threshold filtering
//! - `errors`: shape mismatches and empty pools
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test selection_comprehensive
//!
//! # Run one module
//! cargo test --test selection_comprehensive topn::
//!
//! # Run with output
//! cargo test --test selection_comprehensive -- --nocapture
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use riposte::{Error, Score, ScoredCandidate, Selector, SelectorConfig};

/// Build owned string candidates from literals
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Seeded generator for reproducible sampling tests
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Selector in sampling mode with default tuning
pub fn sampling_selector() -> Selector {
    Selector::new(SelectorConfig::default())
}

/// Selector in top-N mode
pub fn topn_selector(n: usize) -> Selector {
    Selector::new(SelectorConfig::default().with_return_topn(true).with_topn(n))
}

pub mod filtering;
