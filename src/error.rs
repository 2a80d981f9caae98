use core::fmt;

/// Result alias for `symnmf`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by ingestion and the matrix builders.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Point set was empty.
    EmptyInput,

    /// A line of the point file could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The point source could not be read.
    Io {
        /// Path of the source.
        path: String,
        /// Underlying I/O error, rendered.
        message: String,
    },

    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate {
        /// Index of the offending point.
        point: usize,
        /// Index of the offending coordinate within the point.
        coordinate: usize,
    },

    /// Points of unequal dimensionality.
    DimensionMismatch {
        /// Index of the first point whose length differs.
        point: usize,
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// A matrix handed to a stage was not square.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Two matrices that must agree in shape do not.
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// Storage for an n × n matrix could not be acquired.
    Allocation {
        /// Matrix order.
        n: usize,
    },

    /// A vertex has zero degree, so normalization would divide by zero.
    ZeroDegree {
        /// Index of the isolated vertex.
        index: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl Error {
    /// True for failures caused by the input points themselves
    /// (as opposed to configuration, allocation, or numerics).
    pub fn is_ingestion(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::Parse { .. }
                | Error::Io { .. }
                | Error::NonFiniteCoordinate { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty point set"),
            Error::Parse { line, message } => write!(f, "line {line}: {message}"),
            Error::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Error::NonFiniteCoordinate { point, coordinate } => {
                write!(f, "point {point}, coordinate {coordinate} is not finite")
            }
            Error::DimensionMismatch {
                point,
                expected,
                found,
            } => {
                write!(
                    f,
                    "dimension mismatch at point {point}: expected {expected}, found {found}"
                )
            }
            Error::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {rows} x {cols}")
            }
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, actual {actual}")
            }
            Error::Allocation { n } => write!(f, "cannot allocate a {n} x {n} matrix"),
            Error::ZeroDegree { index } => {
                write!(f, "vertex {index} has zero degree; normalization is undefined")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
