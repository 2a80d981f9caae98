//! Weighted degree matrix (`ddg`).

use ndarray::Array2;
use tracing::debug;

use super::{ensure_square, fill_rows, into_matrix, zeroed};
use crate::Result;

/// Build the diagonal degree matrix `D` of a similarity matrix `A`.
///
/// `D[i][i] = Σⱼ A[i][j]` (summed left to right, including the diagonal term);
/// every off-diagonal entry is 0.
///
/// # Errors
///
/// - [`Error::NotSquare`](crate::Error::NotSquare) / [`Error::EmptyInput`](crate::Error::EmptyInput) for malformed `A`.
/// - [`Error::Allocation`](crate::Error::Allocation) if the output cannot be acquired.
pub fn degree_matrix(a: &Array2<f64>, parallel: bool) -> Result<Array2<f64>> {
    let n = ensure_square(a)?;
    debug!(n, "building degree matrix");

    let mut buf = zeroed(n)?;
    fill_rows(&mut buf, n, parallel, |i, row| {
        row[i] = a.row(i).iter().sum();
    });

    into_matrix(buf, n)
}

/// Diagonal of a degree matrix, in row order.
pub fn degrees(d: &Array2<f64>) -> Vec<f64> {
    d.diag().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ndarray::array;

    #[test]
    fn test_degree_row_sums() {
        let e_half = (-0.5f64).exp();
        let e_one = (-1.0f64).exp();
        let a = array![
            [0.0, e_half, e_half],
            [e_half, 0.0, e_one],
            [e_half, e_one, 0.0],
        ];
        let d = degree_matrix(&a, false).unwrap();

        assert!((d[[0, 0]] - 2.0 * e_half).abs() < 1e-12);
        assert!((d[[0, 0]] - 1.2131).abs() < 1e-4);
        assert!((d[[1, 1]] - (e_half + e_one)).abs() < 1e-12);
        assert!((d[[1, 1]] - 0.9744).abs() < 1e-4);
        assert_eq!(d[[1, 1]], d[[2, 2]]);

        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(d[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_degree_single() {
        let a = array![[0.0]];
        assert_eq!(degree_matrix(&a, false).unwrap(), array![[0.0]]);
    }

    #[test]
    fn test_degree_not_square() {
        let a = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            degree_matrix(&a, false),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_degrees_diag() {
        let d = array![[1.0, 0.0], [0.0, 2.5]];
        assert_eq!(degrees(&d), vec![1.0, 2.5]);
    }
}
