//! Point sets: the ingestion model.
//!
//! Points are the rows of one standard-layout `n × d` [`Array2<f64>`].
//! Dimensionality and finiteness are validated once, at construction; every
//! later stage can index points as plain slices.
//!
//! ## Public invariants (must never change)
//!
//! - **Non-empty**: a `PointSet` holds at least one point.
//! - **Uniform dimension**: every point has exactly `dim()` coordinates
//!   (no truncation or padding of ragged input).
//! - **Finite**: no NaN or infinite coordinates.
//! - **Order is identity**: point `i` becomes row/column `i` of every matrix.

use ndarray::{Array2, ArrayView2};

use crate::{Error, Result};

/// An immutable, validated, ordered collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    /// n × d, always in standard (row-major, contiguous) layout.
    points: Array2<f64>,
}

impl PointSet {
    /// Build a point set from nested rows (e.g. a host-language list of lists).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `rows` is empty.
    /// - [`Error::DimensionMismatch`] naming the first row whose length differs
    ///   from the first row's.
    /// - [`Error::NonFiniteCoordinate`] for NaN or infinite values.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(Error::EmptyInput)?;
        let dim = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * dim);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(Error::DimensionMismatch {
                    point: i,
                    expected: dim,
                    found: row.len(),
                });
            }
            check_finite(i, row.iter().copied())?;
            data.extend_from_slice(row);
        }

        let points = Array2::from_shape_vec((rows.len(), dim), data).map_err(|e| {
            Error::ShapeMismatch {
                expected: format!("{} x {dim}", rows.len()),
                actual: e.to_string(),
            }
        })?;
        Ok(Self { points })
    }

    /// Build a point set from an `n × d` array, one point per row.
    ///
    /// Arrays that are not in standard layout (e.g. transposed) are copied
    /// into standard layout.
    pub fn from_array(points: Array2<f64>) -> Result<Self> {
        if points.nrows() == 0 {
            return Err(Error::EmptyInput);
        }
        for (i, row) in points.rows().into_iter().enumerate() {
            check_finite(i, row.iter().copied())?;
        }

        let points = if points.is_standard_layout() {
            points
        } else {
            points.as_standard_layout().into_owned()
        };
        Ok(Self { points })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Dimensionality shared by all points.
    pub fn dim(&self) -> usize {
        self.points.ncols()
    }

    /// Coordinates of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn point(&self, i: usize) -> &[f64] {
        self.points
            .row(i)
            .to_slice()
            .expect("point rows are contiguous in standard layout")
    }

    /// Points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// Borrow the points as an `n × d` array.
    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    /// Take the points back as an owned `n × d` array.
    pub fn into_array(self) -> Array2<f64> {
        self.points
    }
}

fn check_finite(point: usize, coords: impl Iterator<Item = f64>) -> Result<()> {
    for (coordinate, x) in coords.enumerate() {
        if !x.is_finite() {
            return Err(Error::NonFiniteCoordinate { point, coordinate });
        }
    }
    Ok(())
}
