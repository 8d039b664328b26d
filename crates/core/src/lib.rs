//! Core types for Riposte
//!
//! This crate defines the foundational types used throughout the system:
//! - Score: relevance value assigned by the scoring model
//! - Candidate: bound satisfied by any response value subject to selection
//! - ScoredCandidate: a candidate paired with its score
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Candidate, Score, ScoredCandidate};
