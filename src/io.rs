//! Ingestion and output boundaries.
//!
//! Text format: one point per line, coordinates separated by commas.
//!
//! ```text
//! 0.0,0.0
//! 1.0,0.0
//! 0.0,1.0
//! ```
//!
//! Whitespace around values is ignored, blank lines are skipped, and the last
//! line does not need a trailing newline. Matrices are written one row per
//! line with 4 decimal places.

use std::fs;
use std::io::Write;
use std::path::Path;

use ndarray::{Array2, ArrayView1};
use tracing::debug;

use crate::points::PointSet;
use crate::{Error, Result};

/// Column separator for [`write_matrix`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// `0.0000,0.6065`
    #[default]
    Comma,
    /// `0.0000 0.6065`
    Space,
}

impl Delimiter {
    fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Space => " ",
        }
    }
}

/// Parse points from text.
pub fn parse_points(text: &str) -> Result<PointSet> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .map(|tok| {
                let tok = tok.trim();
                tok.parse::<f64>().map_err(|e| Error::Parse {
                    line: idx + 1,
                    message: format!("invalid number {tok:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    PointSet::from_rows(&rows)
}

/// Read points from a file.
pub fn read_points(path: impl AsRef<Path>) -> Result<PointSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let points = parse_points(&text)?;
    debug!(path = %path.display(), n = points.len(), dim = points.dim(), "read points");
    Ok(points)
}

/// Write a matrix, one row per line, 4 decimal places.
pub fn write_matrix<W: Write>(mut out: W, m: &Array2<f64>, delimiter: Delimiter) -> std::io::Result<()> {
    for row in m.rows() {
        writeln!(out, "{}", format_row(row, delimiter))?;
    }
    Ok(())
}

/// Render a matrix as [`write_matrix`] would.
pub fn format_matrix(m: &Array2<f64>, delimiter: Delimiter) -> String {
    let mut text = String::new();
    for row in m.rows() {
        text.push_str(&format_row(row, delimiter));
        text.push('\n');
    }
    text
}

fn format_row(row: ArrayView1<'_, f64>, delimiter: Delimiter) -> String {
    let sep = delimiter.as_str();
    row.iter()
        .map(|x| format!("{x:.4}"))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Copy a matrix into nested rows for programmatic callers.
pub fn to_nested(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|row| row.to_vec()).collect()
}
