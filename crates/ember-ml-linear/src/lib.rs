pub mod config;
pub mod regression;

pub use config::{Algorithm, TrainConfig};
pub use regression::{Gradient, LinearRegression, TrainSnapshot};
