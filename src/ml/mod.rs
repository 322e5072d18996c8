//! Calorie prediction module.
//!
//! Provides:
//! - The [`CaloriePredictor`] interface consumed by the dashboard
//! - JSON model artifacts (linear and random forest regressors)
//! - Loading of the model and its evaluation metrics at startup
//! - Re-measuring those metrics on a held-out set

pub mod evaluation;
pub mod loader;
pub mod model;
pub mod predictor;
pub mod types;

// Re-exports for convenience
pub use evaluation::{load_holdout, score_predictor, HoldoutSample};
pub use loader::{load_metrics, load_model, ModelBundle};
pub use model::{CalorieModel, ForestModel, LinearModel, ModelKind, RegressionTree, TreeNode};
pub use predictor::{analyze_workout, predict_calories, CaloriePredictor};
pub use types::{MlError, ModelMetrics, FEATURE_COUNT, FEATURE_NAMES};
