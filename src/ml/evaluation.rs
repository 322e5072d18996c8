//! Scoring a predictor against a held-out set.
//!
//! The metrics artifact is only meaningful if it can be reproduced from the
//! model it ships with; [`score_predictor`] recomputes R² and MAE the same way
//! they were measured at training time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metrics::WorkoutInput;

use super::predictor::{predict_calories, CaloriePredictor};
use super::types::{MlError, ModelMetrics};

/// One labelled workout from the held-out split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldoutSample {
    pub input: WorkoutInput,
    /// Observed calories
    pub calories: f64,
}

/// Load a JSON array of held-out samples.
pub fn load_holdout(path: &Path) -> Result<Vec<HoldoutSample>, MlError> {
    let content = std::fs::read_to_string(path).map_err(|e| MlError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let samples: Vec<HoldoutSample> = serde_json::from_str(&content)?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "Loaded holdout set");

    Ok(samples)
}

/// Measure R² and MAE of `predictor` on `samples`.
///
/// The returned metrics carry the sample count; whether the data is synthetic
/// is up to the caller.
pub fn score_predictor(
    predictor: &dyn CaloriePredictor,
    samples: &[HoldoutSample],
) -> Result<ModelMetrics, MlError> {
    if samples.is_empty() {
        return Err(MlError::InvalidMetrics("holdout set is empty".to_string()));
    }

    let predictions = samples
        .iter()
        .map(|sample| predict_calories(predictor, &sample.input))
        .collect::<Result<Vec<f64>, MlError>>()?;

    let n = samples.len() as f64;
    let observed_mean = samples.iter().map(|s| s.calories).sum::<f64>() / n;

    let mut abs_error = 0.0;
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (sample, predicted) in samples.iter().zip(&predictions) {
        let residual = sample.calories - predicted;
        abs_error += residual.abs();
        ss_res += residual * residual;
        ss_tot += (sample.calories - observed_mean).powi(2);
    }

    if ss_tot == 0.0 {
        return Err(MlError::InvalidMetrics(
            "holdout calories have no variance".to_string(),
        ));
    }

    Ok(ModelMetrics {
        r2: 1.0 - ss_res / ss_tot,
        mean_absolute_error: abs_error / n,
        samples: Some(samples.len()),
        synthetic_data: false,
    })
}
