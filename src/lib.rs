//! Riposte - response selection and re-ranking for retrieval dialogue agents
//!
//! Riposte sits between a response-scoring model and the dialogue caller: it
//! takes a batch of candidate responses with model scores (and an optional
//! external relevance signal) and picks one reply per conversation turn, or a
//! ranked top-N list.
//!
//! # Quick Start
//!
//! ```
//! use riposte::{Selector, SelectorConfig};
//!
//! let selector = Selector::new(SelectorConfig::default().with_return_topn(true).with_topn(2));
//!
//! let candidates = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
//! let scores = vec![vec![0.2, 0.9, 0.5]];
//!
//! let ranked = selector.select(&candidates, &scores, None)?;
//! assert_eq!(ranked[0][0].candidate, "b");
//! assert_eq!(ranked[0][1].candidate, "c");
//! # Ok::<(), riposte::Error>(())
//! ```
//!
//! # Architecture
//!
//! The [`Selector`] is a pure, stateless computation over batched inputs.
//! Scoring models and external scorers are collaborators outside this crate;
//! they hand in plain score sequences aligned with the candidate sequences.

// Re-export the public API from riposte-select
pub use riposte_select::*;
