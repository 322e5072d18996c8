//! Metrics core: heart rate zones, BMI and workout evaluation.
//!
//! Nothing in here depends on the UI or on how the calorie model is loaded.

pub mod body;
pub mod evaluator;
pub mod heart_rate;
pub mod types;
pub mod zones;

pub use body::{body_mass_index, BmiCategory};
pub use evaluator::{
    evaluate_workout, EvaluationReport, PredictionResult, RecommendationTier, WorkoutEvaluator,
};
pub use heart_rate::{estimate_max_heart_rate, heart_rate_percentage};
pub use types::{Gender, InputBounds, MetricsError, WorkoutInput};
pub use zones::{classify, classify_percentage, Color, IntensityZone, ZoneKind, ZONE_LADDER};
