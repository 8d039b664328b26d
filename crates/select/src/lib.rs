//! Response selection layer for Riposte
//!
//! Picks one reply (or a ranked top-N list) per conversation turn from a
//! batch of scored candidate responses. Sits after the scoring model and
//! before the response is returned to the dialogue caller.
//!
//! This crate provides:
//! - SelectorConfig for the selection knobs
//! - Selector for batch orchestration across both selection modes
//! - Exponential-decay weight construction for sampling mode
//!
//! # Usage
//!
//! ```
//! use riposte_select::{Selector, SelectorConfig};
//!
//! let selector = Selector::new(SelectorConfig::default());
//! let candidates = vec![vec!["yes".to_string(), "no".to_string()]];
//! let scores = vec![vec![0.8, 0.2]];
//!
//! let picked = selector.select(&candidates, &scores, None)?;
//! assert_eq!(picked[0].len(), 1);
//! # Ok::<(), riposte_select::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod selector;
pub mod weights;

mod pool;

// Re-export commonly used types
pub use config::SelectorConfig;
pub use selector::Selector;
pub use weights::decay_weights;

// Re-export core types so callers need only this crate
pub use riposte_core::{Candidate, Error, Result, Score, ScoredCandidate};
