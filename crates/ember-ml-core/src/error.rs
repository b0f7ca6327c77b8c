use thiserror::Error;

/// Core error type for dataset loading, selection and model evaluation.
///
/// Cell-level problems (empty or unparseable numeric fields) and invalid
/// selection identifiers are deliberately *not* represented here: they are
/// absorbed at the point of occurrence (missing cell, skipped identifier).
#[derive(Debug, Error)]
pub enum MlError {
    #[error("empty source: no header line")]
    EmptySource,

    #[error("data line {line} has more fields than the {expected} declared columns")]
    RowOverflow { line: usize, expected: usize },

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("no target column selected")]
    NoTarget,

    #[error("empty sample: no rows to evaluate")]
    EmptySample,

    #[error("dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("unsupported training algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type MlResult<T> = Result<T, MlError>;
