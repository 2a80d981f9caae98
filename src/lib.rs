//! # symnmf
//!
//! Preprocessing matrices for symmetric non-negative matrix factorization:
//! pairwise Gaussian similarity, weighted degree, and symmetric degree
//! normalization of a point set.
//!
//! ```text
//! PointSet ─sym─▶ A ─ddg─▶ D ─norm(A, D)─▶ W = D^{-1/2} A D^{-1/2}
//! ```
//!
//! Matrices are dense [`ndarray::Array2<f64>`] values owned by the caller.
//! Row filling can run on rayon with the `parallel` feature.
//!
//! ```rust
//! use symnmf::{io, Goal, Pipeline};
//!
//! let points = io::parse_points("0,0\n1,0\n0,1\n").unwrap();
//! let a = Pipeline::new().run(Goal::Sym, &points).unwrap();
//! assert_eq!(
//!     io::format_matrix(&a, io::Delimiter::Comma),
//!     "0.0000,0.6065,0.6065\n0.6065,0.0000,0.3679\n0.6065,0.3679,0.0000\n"
//! );
//! ```

/// Error types used across `symnmf`.
pub mod error;
pub mod io;
pub mod kernel;
pub mod matrix;
pub mod pipeline;
pub mod points;


pub use error::{Error, Result};
pub use matrix::{degree_matrix, degrees, normalized_matrix, similarity_matrix, ZeroDegreePolicy};
pub use pipeline::{ddg, norm, sym, Goal, Matrices, Pipeline};
pub use points::PointSet;
