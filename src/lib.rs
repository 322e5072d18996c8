//! Calorie Burn Predictor
//!
//! A desktop dashboard that runs a trained regression model over seven
//! physiological and workout inputs, then puts the predicted calories in
//! context: burn rate, BMI status, heart rate intensity zone and a
//! recommendation tier.
//!
//! The numeric core lives in [`metrics`] and has no UI dependency. The model
//! is an explicitly passed [`ml::CaloriePredictor`].

pub mod metrics;
pub mod ml;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use metrics::{estimate_max_heart_rate, evaluate_workout, EvaluationReport, WorkoutInput};
pub use ml::{CaloriePredictor, ModelBundle, ModelMetrics};
pub use storage::config::AppConfig;
