pub mod export;

pub use export::{export_model, MODEL_EXTENSION, MODEL_SIGNATURE};
