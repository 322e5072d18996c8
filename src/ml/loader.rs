//! Loading the model and metrics artifacts.
//!
//! Both files are read once at startup. The resulting [`ModelBundle`] is
//! immutable and cheap to clone.

use std::path::Path;
use std::sync::Arc;

use super::model::CalorieModel;
use super::predictor::CaloriePredictor;
use super::types::{MlError, ModelMetrics};

fn read_artifact(path: &Path) -> Result<String, MlError> {
    std::fs::read_to_string(path).map_err(|e| MlError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load and validate a JSON model artifact.
pub fn load_model(path: &Path) -> Result<CalorieModel, MlError> {
    let content = read_artifact(path)?;
    let model = CalorieModel::from_json(&content)?;

    tracing::info!(
        path = %path.display(),
        trees = ?model.tree_count(),
        "Loaded calorie model"
    );

    Ok(model)
}

/// Load and validate the companion metrics file.
pub fn load_metrics(path: &Path) -> Result<ModelMetrics, MlError> {
    let content = read_artifact(path)?;
    let metrics: ModelMetrics = serde_json::from_str(&content)?;
    metrics.validate()?;

    tracing::info!(
        r2 = metrics.r2,
        mae = metrics.mean_absolute_error,
        "Loaded model metrics"
    );

    Ok(metrics)
}

/// Predictor plus its evaluation metrics, shared read-only by the UI.
#[derive(Clone)]
pub struct ModelBundle {
    pub predictor: Arc<dyn CaloriePredictor>,
    pub metrics: ModelMetrics,
}

impl ModelBundle {
    pub fn new(predictor: Arc<dyn CaloriePredictor>, metrics: ModelMetrics) -> Self {
        Self { predictor, metrics }
    }

    /// Load both artifacts from disk.
    pub fn load(model_path: &Path, metrics_path: &Path) -> Result<Self, MlError> {
        let model = load_model(model_path)?;
        let metrics = load_metrics(metrics_path)?;
        Ok(Self::new(Arc::new(model), metrics))
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("predictor", &self.predictor.name())
            .field("metrics", &self.metrics)
            .finish()
    }
}
