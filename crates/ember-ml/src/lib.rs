//! # ember-ml
//!
//! A minimal supervised-learning toolkit: a column-oriented in-memory
//! dataset loaded from comma-delimited text, and multiple linear
//! regression trained by full-batch gradient descent.
//!
//! ## Modules
//!
//! - **core** — shared error type (`MlError`, `MlResult`)
//! - **linalg** — elementwise vector arithmetic (dot, scale, subtract)
//! - **data** — `ColumnStore`: named columns of optionally-missing
//!   numbers, plus target/feature selection by name or index
//! - **linear** — `LinearRegression`: cost, gradient, gradient-descent
//!   training with an observer hook, prediction
//! - **io** — write-only export of trained weights

/// Shared error types.
pub use ember_ml_core as core;

/// Elementwise vector arithmetic.
pub use ember_ml_linalg as linalg;

/// Column-oriented dataset and feature selection.
pub use ember_ml_data as data;

/// Linear regression.
pub use ember_ml_linear as linear;

/// Model export.
pub use ember_ml_io as io;
