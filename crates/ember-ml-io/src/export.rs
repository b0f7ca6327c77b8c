//! Write-only export of trained linear-model parameters.
//!
//! The artifact is three lines of text: a fixed signature, the bias
//! followed by a comma, and the weights comma-joined. There is no version
//! header and no reader in this toolkit; consumers treat it as an opaque
//! external artifact.

use std::fs;
use std::path::PathBuf;

use ember_ml_core::MlResult;

/// First line of every exported model file.
pub const MODEL_SIGNATURE: &str = "ember-ml linear model";

/// Extension appended to export paths that do not already carry it.
pub const MODEL_EXTENSION: &str = ".emberml";

/// Writes `bias` and `weights` to `path`, appending [`MODEL_EXTENSION`]
/// when missing (an empty path falls back to `model`). Returns the path
/// actually written.
pub fn export_model(path: &str, bias: f64, weights: &[f64]) -> MlResult<PathBuf> {
    let mut name = path.to_string();
    if !name.ends_with(MODEL_EXTENSION) {
        if name.is_empty() {
            name.push_str("model");
        }
        name.push_str(MODEL_EXTENSION);
    }

    let joined: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
    let body = format!("{}\n{},\n{}\n", MODEL_SIGNATURE, bias, joined.join(","));

    fs::write(&name, body)?;
    Ok(PathBuf::from(name))
}
