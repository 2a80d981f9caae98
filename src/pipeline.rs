//! Goal selection and the staged pipeline runner.
//!
//! ```text
//! PointSet ─▶ sym ─▶ ddg ─▶ norm
//! ```
//!
//! [`Pipeline::run`] executes stages up to and including the requested
//! [`Goal`] and returns only that stage's matrix. Each stage either completes
//! or the whole run returns `Err`; intermediate matrices are dropped on every
//! exit path.
//!
//! # Example
//!
//! ```rust
//! use symnmf::{Goal, Pipeline, PointSet};
//!
//! let points = PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
//! let w = Pipeline::new().run(Goal::Norm, &points).unwrap();
//! assert_eq!(w.dim(), (3, 3));
//! assert_eq!(w[[0, 0]], 0.0);
//! ```

use core::fmt;
use std::str::FromStr;
use std::time::Instant;

use ndarray::Array2;
use tracing::debug;

use crate::kernel::DEFAULT_SIGMA;
use crate::matrix::{degree_matrix, normalized_matrix, similarity_matrix, ZeroDegreePolicy};
use crate::points::PointSet;
use crate::{Error, Result};

/// Which stage's matrix to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Similarity matrix `A`.
    Sym,
    /// Degree matrix `D`.
    Ddg,
    /// Normalized similarity matrix `W`.
    Norm,
}

impl Goal {
    /// All goals, in pipeline order.
    pub const ALL: [Goal; 3] = [Goal::Sym, Goal::Ddg, Goal::Norm];

    /// Selector name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Sym => "sym",
            Goal::Ddg => "ddg",
            Goal::Norm => "norm",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sym" => Ok(Goal::Sym),
            "ddg" => Ok(Goal::Ddg),
            "norm" => Ok(Goal::Norm),
            _ => Err(Error::InvalidParameter {
                name: "goal",
                message: "expected one of: sym, ddg, norm",
            }),
        }
    }
}

/// All three stage outputs of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrices {
    /// `A`.
    pub similarity: Array2<f64>,
    /// `D`.
    pub degree: Array2<f64>,
    /// `W`.
    pub normalized: Array2<f64>,
}

/// Pipeline configuration and runner.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Gaussian kernel bandwidth.
    sigma: f64,
    /// Handling of isolated vertices in `norm`.
    zero_degree: ZeroDegreePolicy,
    /// Fill matrix rows on the rayon pool (needs the `parallel` feature).
    parallel: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Reference configuration: σ = 1, zero degree is an error, sequential.
    pub fn new() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            zero_degree: ZeroDegreePolicy::Error,
            parallel: false,
        }
    }

    /// Set the Gaussian bandwidth σ.
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the zero-degree policy for `norm`.
    pub fn zero_degree(mut self, policy: ZeroDegreePolicy) -> Self {
        self.zero_degree = policy;
        self
    }

    /// Fill rows in parallel. Ignored without the `parallel` feature.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Stage `sym`.
    pub fn sym(&self, points: &PointSet) -> Result<Array2<f64>> {
        similarity_matrix(points, self.sigma, self.parallel)
    }

    /// Stage `ddg`.
    pub fn ddg(&self, a: &Array2<f64>) -> Result<Array2<f64>> {
        degree_matrix(a, self.parallel)
    }

    /// Stage `norm`.
    pub fn norm(&self, a: &Array2<f64>, d: &Array2<f64>) -> Result<Array2<f64>> {
        normalized_matrix(a, d, self.zero_degree, self.parallel)
    }

    /// Run stages up to `goal` and return that stage's matrix.
    pub fn run(&self, goal: Goal, points: &PointSet) -> Result<Array2<f64>> {
        let start = Instant::now();

        let a = self.sym(points)?;
        let out = match goal {
            Goal::Sym => a,
            Goal::Ddg => self.ddg(&a)?,
            Goal::Norm => {
                let d = self.ddg(&a)?;
                self.norm(&a, &d)?
            }
        };

        debug!(
            %goal,
            n = points.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "pipeline finished"
        );
        Ok(out)
    }

    /// Run every stage and return all three matrices.
    pub fn run_all(&self, points: &PointSet) -> Result<Matrices> {
        let similarity = self.sym(points)?;
        let degree = self.ddg(&similarity)?;
        let normalized = self.norm(&similarity, &degree)?;
        Ok(Matrices {
            similarity,
            degree,
            normalized,
        })
    }
}

/// Similarity matrix with the reference configuration.
pub fn sym(points: &PointSet) -> Result<Array2<f64>> {
    Pipeline::new().sym(points)
}

/// Degree matrix with the reference configuration.
pub fn ddg(a: &Array2<f64>) -> Result<Array2<f64>> {
    Pipeline::new().ddg(a)
}

/// Normalized matrix with the reference configuration.
pub fn norm(a: &Array2<f64>, d: &Array2<f64>) -> Result<Array2<f64>> {
    Pipeline::new().norm(a, d)
}
