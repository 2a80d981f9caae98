//! Dense n × n matrix builders.
//!
//! Every stage allocates a fresh, owned [`Array2<f64>`] and never mutates its
//! inputs:
//!
//! ```text
//! PointSet ──sym──▶ A ──ddg──▶ D
//!                   │          │
//!                   └───norm───┴──▶ W
//! ```
//!
//! | Stage | Output | Cost |
//! |-------|--------|------|
//! | [`similarity_matrix`] | `A[i][j] = exp(-‖xᵢ - xⱼ‖² / 2σ²)`, zero diagonal | O(n²·d) |
//! | [`degree_matrix`] | `D[i][i] = Σⱼ A[i][j]` | O(n²) |
//! | [`normalized_matrix`] | `W[i][j] = A[i][j] / √(D[i][i]·D[j][j])`, zero diagonal | O(n²) |
//!
//! Rows are independent, so with the `parallel` feature each row is filled by
//! one rayon worker. Row contents are computed the same way in both modes,
//! so parallel and sequential output is bit-identical.

mod degree;
mod normalize;
mod similarity;

pub use degree::{degree_matrix, degrees};
pub use normalize::{normalized_matrix, ZeroDegreePolicy};
pub use similarity::similarity_matrix;

use ndarray::Array2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Error, Result};

/// Zero-filled row-major storage for an n × n matrix.
///
/// Fails with [`Error::Allocation`] instead of aborting when n² overflows or
/// the allocator refuses the reservation.
pub(crate) fn zeroed(n: usize) -> Result<Vec<f64>> {
    let cells = n.checked_mul(n).ok_or(Error::Allocation { n })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| Error::Allocation { n })?;
    buf.resize(cells, 0.0);
    Ok(buf)
}

/// Call `f(i, row_i)` for every row of an n × n buffer.
///
/// Without the `parallel` feature, `parallel = true` silently runs sequentially.
pub(crate) fn fill_rows<F>(buf: &mut [f64], n: usize, parallel: bool, f: F)
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    if n == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        if parallel {
            buf.par_chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| f(i, row));
            return;
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for (i, row) in buf.chunks_mut(n).enumerate() {
        f(i, row);
    }
}

/// Hand a filled buffer over as an owned matrix.
pub(crate) fn into_matrix(buf: Vec<f64>, n: usize) -> Result<Array2<f64>> {
    Array2::from_shape_vec((n, n), buf).map_err(|e| Error::ShapeMismatch {
        expected: format!("{n} x {n}"),
        actual: e.to_string(),
    })
}

/// Order of a square, non-empty matrix.
pub(crate) fn ensure_square(m: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_shape() {
        let buf = zeroed(3).unwrap();
        assert_eq!(buf.len(), 9);
        assert!(buf.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zeroed_overflow_is_allocation_error() {
        assert_eq!(
            zeroed(usize::MAX),
            Err(Error::Allocation { n: usize::MAX })
        );
    }

    #[test]
    fn test_zeroed_huge_is_allocation_error() {
        // 2^31 × 2^31 cells of 8 bytes cannot be reserved.
        let n = 1usize << 31;
        assert!(matches!(zeroed(n), Err(Error::Allocation { .. })));
    }

    #[test]
    fn test_fill_rows_visits_every_row_once() {
        let n = 4;
        let mut buf = zeroed(n).unwrap();
        fill_rows(&mut buf, n, false, |i, row| {
            for (j, x) in row.iter_mut().enumerate() {
                *x += (i * n + j) as f64;
            }
        });
        let expected: Vec<f64> = (0..n * n).map(|k| k as f64).collect();
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_fill_rows_parallel_flag_same_result() {
        let n = 7;
        let f = |i: usize, row: &mut [f64]| {
            for (j, x) in row.iter_mut().enumerate() {
                *x = ((i + 1) as f64).ln() * (j as f64).sqrt();
            }
        };
        let mut seq = zeroed(n).unwrap();
        let mut par = zeroed(n).unwrap();
        fill_rows(&mut seq, n, false, f);
        fill_rows(&mut par, n, true, f);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_ensure_square() {
        assert_eq!(ensure_square(&Array2::zeros((3, 3))), Ok(3));
        assert_eq!(
            ensure_square(&Array2::zeros((2, 3))),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(ensure_square(&Array2::zeros((0, 0))), Err(Error::EmptyInput));
    }
}
