//! Pairwise Gaussian similarity (`sym`).

use ndarray::Array2;
use tracing::debug;

use super::{fill_rows, into_matrix, zeroed};
use crate::kernel::{gaussian, squared_euclidean_unchecked, validate_sigma};
use crate::points::PointSet;
use crate::Result;

/// Build the n × n similarity matrix `A` of a point set.
///
/// - `A[i][i] = 0` (no self-loops).
/// - `A[i][j] = exp(-‖xᵢ - xⱼ‖² / 2σ²)` for `i ≠ j`; exactly 1.0 for coincident points.
///
/// `A` is exactly symmetric: both triangles are evaluated with the same
/// commutative formula. Dimensionality was validated when the [`PointSet`]
/// was built, so no pair can disagree here.
///
/// # Errors
///
/// - [`Error::InvalidParameter`](crate::Error::InvalidParameter) for a non-positive or non-finite `sigma`.
/// - [`Error::Allocation`](crate::Error::Allocation) if the n × n buffer cannot be acquired.
pub fn similarity_matrix(points: &PointSet, sigma: f64, parallel: bool) -> Result<Array2<f64>> {
    validate_sigma(sigma)?;

    let n = points.len();
    debug!(n, dim = points.dim(), sigma, "building similarity matrix");

    let mut buf = zeroed(n)?;
    fill_rows(&mut buf, n, parallel, |i, row| {
        let xi = points.point(i);
        for (j, cell) in row.iter_mut().enumerate() {
            if i != j {
                let d = squared_euclidean_unchecked(xi, points.point(j));
                *cell = gaussian(d, sigma);
            }
        }
    });

    into_matrix(buf, n)
}
