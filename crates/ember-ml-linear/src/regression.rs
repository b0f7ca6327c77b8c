use ember_ml_core::{MlError, MlResult};
use ember_ml_data::ColumnStore;
use ember_ml_linalg::vector;

use crate::config::{Algorithm, TrainConfig};

/// Cost gradient: one partial derivative per weight, plus the bias term.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Diagnostic snapshot handed to the training observer every 100th
/// iteration (0, 100, 200, …). The cost is freshly recomputed.
#[derive(Debug)]
pub struct TrainSnapshot<'a> {
    pub iteration: usize,
    pub weights: &'a [f64],
    pub bias: f64,
    pub cost: f64,
}

/// Multiple linear regression fitted by full-batch gradient descent.
///
/// The model borrows its [`ColumnStore`] for its whole lifetime and reads
/// feature rows lazily through the store's selection on every cost and
/// gradient evaluation; the store must not be reloaded or re-selected
/// while the model is in use.
///
/// Feature values arrive in **reverse selection order** (see
/// [`ColumnStore::feature_row`]); `predict` expects its input in the same
/// order.
pub struct LinearRegression<'a> {
    store: &'a ColumnStore,
    weights: Vec<f64>,
    bias: f64,
    cost: f64,
    rows: usize,
}

impl<'a> LinearRegression<'a> {
    /// Builds a zero-initialized model over the store's current selection
    /// and computes the initial cost. Fails with [`MlError::NoTarget`] if
    /// no target column is selected and [`MlError::EmptySample`] if the
    /// store has no rows.
    pub fn new(store: &'a ColumnStore) -> MlResult<Self> {
        if store.target().is_none() {
            return Err(MlError::NoTarget);
        }
        let mut model = LinearRegression {
            store,
            weights: vec![0.0; store.feature_indices().len()],
            bias: 0.0,
            cost: 0.0,
            rows: store.row_count(),
        };
        model.cost = model.compute_cost()?;
        Ok(model)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Most recently computed cost (updated at construction, at every
    /// diagnostic snapshot and after training).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Mean squared residual, halved: `(1/2n) Σ (ŷᵢ − yᵢ)²`. Recomputed
    /// from the store by definition on every call.
    pub fn compute_cost(&self) -> MlResult<f64> {
        if self.rows == 0 {
            return Err(MlError::EmptySample);
        }
        let mut j = 0.0;
        for i in 0..self.rows {
            let r = self.residual(i)?;
            j += r * r;
        }
        Ok(j / (2.0 * self.rows as f64))
    }

    /// Exact partial derivatives of the cost with respect to every weight
    /// and the bias, recomputed by definition (no caching across calls).
    pub fn gradient(&self) -> MlResult<Gradient> {
        if self.rows == 0 {
            return Err(MlError::EmptySample);
        }
        let mut grad = Gradient {
            weights: vec![0.0; self.weights.len()],
            bias: 0.0,
        };
        for i in 0..self.rows {
            let row = self.store.feature_row(i);
            let r = self.residual(i)?;
            for (g, x) in grad.weights.iter_mut().zip(&row) {
                *g += r * x;
            }
            grad.bias += r;
        }
        let n = self.rows as f64;
        vector::div_assign(&mut grad.weights, n);
        grad.bias /= n;
        Ok(grad)
    }

    /// One synchronous gradient-descent update:
    /// `w ← w − α·∇w`, `b ← b − α·∇b`.
    pub fn step(&mut self, learning_rate: f64) -> MlResult<()> {
        let grad = self.gradient()?;
        vector::sub_assign(&mut self.weights, &vector::scale(&grad.weights, learning_rate));
        self.bias -= learning_rate * grad.bias;
        Ok(())
    }

    /// Runs the configured number of gradient-descent iterations, logging
    /// a diagnostic block to stdout every 100th iteration.
    pub fn train(&mut self, config: &TrainConfig) -> MlResult<()> {
        self.train_with(config, log_snapshot)
    }

    /// Like [`train`](Self::train), but diagnostics go to `observer`
    /// instead of the console. The cost is recomputed once more after the
    /// final iteration.
    pub fn train_with<F>(&mut self, config: &TrainConfig, mut observer: F) -> MlResult<()>
    where
        F: FnMut(&TrainSnapshot<'_>),
    {
        match config.algorithm {
            Algorithm::Gradient => {}
        }
        for i in 0..config.epochs {
            self.step(config.learning_rate)?;
            if i % 100 == 0 {
                self.cost = self.compute_cost()?;
                observer(&TrainSnapshot {
                    iteration: i,
                    weights: &self.weights,
                    bias: self.bias,
                    cost: self.cost,
                });
            }
        }
        self.cost = self.compute_cost()?;
        Ok(())
    }

    /// Predicts `dot(features, weights) + bias`. `features` must follow
    /// the reversed selection-order convention the model trained on.
    pub fn predict(&self, features: &[f64]) -> MlResult<f64> {
        if features.len() != self.weights.len() {
            return Err(MlError::DimensionMismatch {
                expected: self.weights.len(),
                got: features.len(),
            });
        }
        Ok(vector::dot(features, &self.weights) + self.bias)
    }

    fn residual(&self, row: usize) -> MlResult<f64> {
        let y = self.store.target_value(row).ok_or(MlError::NoTarget)?;
        let prediction = vector::dot(&self.store.feature_row(row), &self.weights) + self.bias;
        Ok(prediction - y)
    }
}

fn log_snapshot(s: &TrainSnapshot<'_>) {
    println!("_________iteration: {}_________", s.iteration);
    let weights: Vec<String> = s.weights.iter().map(|w| format!("{:.6}", w)).collect();
    println!("w: {}", weights.join(" "));
    println!("b: {:.6}", s.bias);
    println!("J: {:.6}", s.cost);
    println!("_______________________________");
}
