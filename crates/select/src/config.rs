//! Selector configuration
//!
//! Fixed at construction; applies to every call. Construction is the
//! caller's job — there is no file loading or registry here.

use riposte_core::Score;
use serde::{Deserialize, Serialize};

/// Configuration for the [`Selector`](crate::Selector)
///
/// Defaults match the tuning the selector shipped with: a 14-slot sampling
/// pool with a gentle decay, deterministic top-10 when ranked lists are
/// requested, and a zero external-score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Size of the top-K pool used for weighted sampling.
    ///
    /// Values below 1 are treated as 1; pools smaller than this clip
    /// silently.
    pub sample_size: usize,

    /// Decay rate for sampling weights; must be positive.
    ///
    /// Rank `j` gets unnormalized weight `exp(-j / lambda_coeff)`, so larger
    /// values flatten the distribution toward uniform.
    pub lambda_coeff: f64,

    /// Return the deterministic top-N instead of sampling one response.
    pub return_topn: bool,

    /// Number of candidates returned in top-N mode.
    pub topn: usize,

    /// Minimum external score (strict) required to keep a candidate when an
    /// aligned external-score row is supplied.
    pub ext_score_threshold: Score,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            sample_size: 14,
            lambda_coeff: 10.0,
            return_topn: false,
            topn: 10,
            ext_score_threshold: 0.0,
        }
    }
}

impl SelectorConfig {
    /// Create a config with the default tuning
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the sampling pool size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Builder: set the weight decay rate
    pub fn with_lambda_coeff(mut self, lambda_coeff: f64) -> Self {
        self.lambda_coeff = lambda_coeff;
        self
    }

    /// Builder: switch between top-N mode and sampling mode
    pub fn with_return_topn(mut self, return_topn: bool) -> Self {
        self.return_topn = return_topn;
        self
    }

    /// Builder: set the top-N result length
    pub fn with_topn(mut self, topn: usize) -> Self {
        self.topn = topn;
        self
    }

    /// Builder: set the external score threshold
    pub fn with_ext_score_threshold(mut self, threshold: Score) -> Self {
        self.ext_score_threshold = threshold;
        self
    }
}
