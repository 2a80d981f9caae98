//! Symmetric degree normalization (`norm`).
//!
//! ```text
//! W = D^{-1/2} A D^{-1/2}        W[i][j] = A[i][j] / (√D[i][i] · √D[j][j])
//! ```
//!
//! The denominator is the product of the two square roots rather than the
//! root of the product: it is commutative, so `W` stays exactly symmetric,
//! and it cannot underflow to zero for two tiny but positive degrees.
//!
//! Since `A` is non-negative and symmetric, `A[i][j] ≤ min(D[i][i], D[j][j])`,
//! so every entry of `W` lies in `[0, 1]`.
//!
//! ## Isolated vertices
//!
//! A vertex with zero degree (n = 1, or a point so far from all others that
//! every similarity underflows) has no defined normalization. The behavior is
//! chosen with [`ZeroDegreePolicy`]; the default refuses to produce a matrix.

use ndarray::Array2;
use tracing::{debug, warn};

use super::{degrees, ensure_square, fill_rows, into_matrix, zeroed};
use crate::{Error, Result};

/// What `norm` does when a degree is not strictly positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroDegreePolicy {
    /// Fail with [`Error::ZeroDegree`] naming the first such vertex.
    #[default]
    Error,
    /// Zero the vertex's row and column in `W`.
    Zero,
}

/// Normalize a similarity matrix `A` by its degree matrix `D`.
///
/// Only the diagonal of `D` is read. The diagonal of `W` is always 0.
///
/// # Errors
///
/// - [`Error::NotSquare`] / [`Error::EmptyInput`] for malformed inputs.
/// - [`Error::ShapeMismatch`] if `A` and `D` differ in order.
/// - [`Error::ZeroDegree`] under [`ZeroDegreePolicy::Error`] when some
///   `D[i][i] ≤ 0` (or NaN). Checked for every vertex before any output is
///   produced, including when n = 1.
/// - [`Error::Allocation`] if the output cannot be acquired.
pub fn normalized_matrix(
    a: &Array2<f64>,
    d: &Array2<f64>,
    policy: ZeroDegreePolicy,
    parallel: bool,
) -> Result<Array2<f64>> {
    let n = ensure_square(a)?;
    let nd = ensure_square(d)?;
    if nd != n {
        return Err(Error::ShapeMismatch {
            expected: format!("{n} x {n}"),
            actual: format!("{nd} x {nd}"),
        });
    }
    debug!(n, ?policy, "building normalized matrix");

    // √D[i][i], or None for isolated vertices.
    let roots: Vec<Option<f64>> = degrees(d)
        .into_iter()
        .map(|deg| (deg > 0.0).then(|| deg.sqrt()))
        .collect();

    let isolated = roots.iter().filter(|r| r.is_none()).count();
    if isolated > 0 {
        match policy {
            ZeroDegreePolicy::Error => {
                let index = roots.iter().position(Option::is_none).unwrap_or(0);
                return Err(Error::ZeroDegree { index });
            }
            ZeroDegreePolicy::Zero => {
                warn!(isolated, n, "zero-degree vertices; their rows and columns are zeroed");
            }
        }
    }

    let mut buf = zeroed(n)?;
    fill_rows(&mut buf, n, parallel, |i, row| {
        let Some(ri) = roots[i] else {
            return;
        };
        for (j, cell) in row.iter_mut().enumerate() {
            if i == j {
                continue;
            }
            if let Some(rj) = roots[j] {
                *cell = a[[i, j]] / (ri * rj);
            }
        }
    });

    into_matrix(buf, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn triangle_a() -> Array2<f64> {
        let h = (-0.5f64).exp();
        let o = (-1.0f64).exp();
        array![[0.0, h, h], [h, 0.0, o], [h, o, 0.0]]
    }

    fn diag(values: &[f64]) -> Array2<f64> {
        Array2::from_diag(&ndarray::Array1::from(values.to_vec()))
    }

    #[test]
    fn test_normalize_triangle() {
        let a = triangle_a();
        let d0 = a.row(0).sum();
        let d1 = a.row(1).sum();
        let d = diag(&[d0, d1, d1]);

        let w = normalized_matrix(&a, &d, ZeroDegreePolicy::Error, false).unwrap();
        let expected_01 = a[[0, 1]] / (d0 * d1).sqrt();
        let expected_12 = a[[1, 2]] / d1;
        assert!((w[[0, 1]] - expected_01).abs() < 1e-12);
        assert!((w[[1, 2]] - expected_12).abs() < 1e-12);

        for i in 0..3 {
            assert_eq!(w[[i, i]], 0.0);
            for j in 0..3 {
                assert_eq!(w[[i, j]], w[[j, i]]);
            }
        }
    }

    #[test]
    fn test_normalize_two_points_is_one() {
        // Two vertices: W[0][1] = a / √(a·a) = 1.
        let a = array![[0.0, 0.25], [0.25, 0.0]];
        let d = diag(&[0.25, 0.25]);
        let w = normalized_matrix(&a, &d, ZeroDegreePolicy::Error, false).unwrap();
        assert_eq!(w[[0, 1]], 1.0);
    }

    #[test]
    fn test_normalize_single_point_errors() {
        let a = array![[0.0]];
        let d = array![[0.0]];
        assert_eq!(
            normalized_matrix(&a, &d, ZeroDegreePolicy::Error, false),
            Err(Error::ZeroDegree { index: 0 })
        );
    }

    #[test]
    fn test_normalize_single_point_zero_policy() {
        let a = array![[0.0]];
        let d = array![[0.0]];
        let w = normalized_matrix(&a, &d, ZeroDegreePolicy::Zero, false).unwrap();
        assert_eq!(w, array![[0.0]]);
    }

    #[test]
    fn test_normalize_isolated_vertex() {
        // Vertex 2 is isolated.
        let a = array![[0.0, 0.5, 0.0], [0.5, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let d = diag(&[0.5, 0.5, 0.0]);

        assert_eq!(
            normalized_matrix(&a, &d, ZeroDegreePolicy::Error, false),
            Err(Error::ZeroDegree { index: 2 })
        );

        let w = normalized_matrix(&a, &d, ZeroDegreePolicy::Zero, false).unwrap();
        assert!((w[[0, 1]] - 1.0).abs() < 1e-12);
        for k in 0..3 {
            assert_eq!(w[[2, k]], 0.0);
            assert_eq!(w[[k, 2]], 0.0);
            assert!(w[[k, 0]].is_finite());
        }
    }

    #[test]
    fn test_normalize_shape_mismatch() {
        let a = triangle_a();
        let d = diag(&[1.0, 1.0]);
        assert!(matches!(
            normalized_matrix(&a, &d, ZeroDegreePolicy::Error, false),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_normalize_tiny_degrees_stay_finite() {
        let t = 1e-200;
        let a = array![[0.0, t], [t, 0.0]];
        let d = diag(&[t, t]);
        let w = normalized_matrix(&a, &d, ZeroDegreePolicy::Error, false).unwrap();
        assert!((w[[0, 1]] - 1.0).abs() < 1e-12);
    }
}
