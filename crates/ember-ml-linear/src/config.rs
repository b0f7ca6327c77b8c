use std::str::FromStr;

use ember_ml_core::MlError;
use serde::{Deserialize, Serialize};

/// Training algorithm. Full-batch gradient descent is the only one
/// supported; unknown names are rejected at the string boundary
/// ([`FromStr`] or serde) with [`MlError::UnsupportedAlgorithm`], leaving
/// any model untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Gradient,
}

impl FromStr for Algorithm {
    type Err = MlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradient" => Ok(Algorithm::Gradient),
            other => Err(MlError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Gradient-descent training parameters. Fields left unspecified in a
/// serialized config take the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub algorithm: Algorithm,
    pub epochs: usize,
    pub learning_rate: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            algorithm: Algorithm::Gradient,
            epochs: 1000,
            learning_rate: 0.001,
        }
    }
}
