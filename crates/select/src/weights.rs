//! Exponential-decay sampling weights
//!
//! Sampling mode biases the draw toward higher-ranked candidates: rank `j`
//! (best score first) gets unnormalized weight `exp(-j / lambda_coeff)`.
//! The decay is computed over the fixed index range `0..sample_size`; when
//! fewer ranked slots are available the vector is truncated to the available
//! count and then normalized. Recomputing the decay over the actual pool
//! size would change the profile for small pools, so the truncation contract
//! is load-bearing.

use rand::Rng;

/// Build the normalized weight vector for one draw
///
/// Returns `min(sample_size, available)` weights that sum to 1, following
/// the `exp(-j / lambda_coeff)` decay over ranks `0..sample_size` truncated
/// to the available slots. `lambda_coeff` must be positive.
pub fn decay_weights(sample_size: usize, lambda_coeff: f64, available: usize) -> Vec<f64> {
    debug_assert!(lambda_coeff > 0.0, "lambda_coeff must be positive");

    let take = available.min(sample_size);
    let mut weights: Vec<f64> = (0..take)
        .map(|j| (-(j as f64) / lambda_coeff).exp())
        .collect();

    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in &mut weights {
            *w /= total;
        }
    }

    weights
}

/// Draw one index from a normalized weight vector
///
/// Cumulative-sum scan over the categorical distribution. The final index
/// absorbs any floating-point shortfall in the cumulative total. `weights`
/// must be non-empty.
pub(crate) fn draw<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty(), "cannot draw from empty weights");

    let roll: f64 = rng.gen();
    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        if roll < acc {
            return i;
        }
    }
    weights.len() - 1
}
