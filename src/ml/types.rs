//! Shared ML types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::MetricsError;

/// Feature columns in the order the model was trained on.
pub const FEATURE_NAMES: [&str; 7] = [
    "Gender",
    "Age",
    "Height",
    "Weight",
    "Duration",
    "Heart_Rate",
    "Body_Temp",
];

/// Number of model input features.
pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Error types for ML operations.
#[derive(Debug, Error)]
pub enum MlError {
    /// Artifact could not be read
    #[error("Failed to read {path}: {message}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying error
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Model artifact is structurally unusable
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Metrics artifact holds impossible values
    #[error("Invalid metrics: {0}")]
    InvalidMetrics(String),

    /// Model produced a value that cannot be a calorie count
    #[error("Invalid prediction: {0}")]
    InvalidPrediction(f64),

    /// Input rejected before prediction
    #[error(transparent)]
    InvalidInput(#[from] MetricsError),
}

impl From<serde_json::Error> for MlError {
    fn from(err: serde_json::Error) -> Self {
        MlError::SerializationError(err.to_string())
    }
}

/// Held-out quality metrics of the trained model, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Coefficient of determination
    pub r2: f64,
    /// Mean absolute error in calories
    #[serde(rename = "mae", alias = "mean_absolute_error")]
    pub mean_absolute_error: f64,
    /// Size of the held-out set the numbers were measured on
    #[serde(default)]
    pub samples: Option<usize>,
    /// Held-out set was generated rather than collected
    #[serde(default)]
    pub synthetic_data: bool,
}

impl ModelMetrics {
    pub fn new(r2: f64, mean_absolute_error: f64) -> Self {
        Self {
            r2,
            mean_absolute_error,
            samples: None,
            synthetic_data: false,
        }
    }

    /// Reject metrics no real evaluation could have produced.
    pub fn validate(&self) -> Result<(), MlError> {
        if !self.r2.is_finite() || self.r2 > 1.0 {
            return Err(MlError::InvalidMetrics(format!(
                "r2 must be a finite value no greater than 1, got {}",
                self.r2
            )));
        }
        if !self.mean_absolute_error.is_finite() || self.mean_absolute_error < 0.0 {
            return Err(MlError::InvalidMetrics(format!(
                "mae must be a non-negative number, got {}",
                self.mean_absolute_error
            )));
        }
        Ok(())
    }

    /// R² expressed as "percent of variance explained".
    pub fn accuracy_percent(&self) -> f64 {
        self.r2 * 100.0
    }

    /// One-line summary used in the footer.
    pub fn summary_line(&self, model_name: &str) -> String {
        format!(
            "{} | MAE: {:.2} cal | R²: {:.4} | Accuracy: {:.2}%",
            model_name,
            self.mean_absolute_error,
            self.r2,
            self.accuracy_percent()
        )
    }

    /// Where the numbers come from, when the artifact says.
    pub fn evaluation_note(&self) -> Option<String> {
        let data = if self.synthetic_data { "synthetic data" } else { "recorded data" };
        match self.samples {
            Some(n) => Some(format!("Measured on {} held-out samples ({})", n, data)),
            None if self.synthetic_data => Some(format!("Measured on {}", data)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_parse_with_short_and_long_keys() {
        let short: ModelMetrics = serde_json::from_str(r#"{"r2": 0.9943, "mae": 2.24}"#).unwrap();
        let long: ModelMetrics =
            serde_json::from_str(r#"{"r2": 0.9943, "mean_absolute_error": 2.24}"#).unwrap();
        assert_eq!(short, long);
        assert!((short.accuracy_percent() - 99.43).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_validation() {
        let ok = ModelMetrics::new(0.5, 3.0);
        assert!(ok.validate().is_ok());

        let negative_mae = ModelMetrics::new(0.5, -1.0);
        assert!(matches!(negative_mae.validate(), Err(MlError::InvalidMetrics(_))));

        let r2_above_one = ModelMetrics::new(1.2, 1.0);
        assert!(r2_above_one.validate().is_err());
    }

    #[test]
    fn test_summary_line() {
        let metrics = ModelMetrics::new(0.9943, 2.24);
        assert_eq!(
            metrics.summary_line("Random Forest"),
            "Random Forest | MAE: 2.24 cal | R²: 0.9943 | Accuracy: 99.43%"
        );
    }

    #[test]
    fn test_evaluation_note() {
        let metrics: ModelMetrics = serde_json::from_str(
            r#"{"r2": 0.97, "mae": 40.2, "samples": 400, "synthetic_data": true}"#,
        )
        .unwrap();
        assert_eq!(
            metrics.evaluation_note().as_deref(),
            Some("Measured on 400 held-out samples (synthetic data)")
        );

        assert_eq!(ModelMetrics::new(0.97, 40.2).evaluation_note(), None);
    }
}
