//! Pairwise distance and the Gaussian similarity transform.
//!
//! ```text
//! d(x, y)   = Σ_k (x_k - y_k)²
//! s(x, y)   = exp(-d(x, y) / 2σ²)
//! ```
//!
//! With σ = 1 (the default everywhere in this crate) the similarity is
//! `exp(-d / 2)`. Similarity lies in (0, 1] for finite inputs and is exactly
//! 1 for coincident points; it underflows to 0.0 once `d / 2σ²` exceeds ~745.

use crate::{Error, Result};

/// Default Gaussian bandwidth.
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Squared Euclidean distance between two points of equal dimension.
///
/// Symmetric bit-for-bit: `(a - b)²` and `(b - a)²` round identically.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] when the lengths differ. The pair is treated
/// as points `[a, b]`, so `point` is always 1 (the second argument),
/// `expected` is `a.len()` and `found` is `b.len()`.
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            point: 1,
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(squared_euclidean_unchecked(a, b))
}

/// Same as [`squared_euclidean`], for callers that already validated lengths.
#[inline]
pub(crate) fn squared_euclidean_unchecked(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Gaussian (RBF) similarity for a squared distance.
#[inline]
pub fn gaussian(dist_sq: f64, sigma: f64) -> f64 {
    (-dist_sq / (2.0 * sigma * sigma)).exp()
}

/// Reject bandwidths the kernel cannot use.
pub(crate) fn validate_sigma(sigma: f64) -> Result<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "sigma",
            message: "must be finite and > 0",
        });
    }
    Ok(())
}
