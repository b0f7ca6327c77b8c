pub mod error;

pub use error::{MlError, MlResult};
