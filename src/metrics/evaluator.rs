//! Workout evaluation.
//!
//! Combines a model calorie prediction with the workout inputs to produce the
//! burn rate, BMI status, recommendation tier and intensity zone shown on the
//! analysis screen. Everything here is plain arithmetic over the inputs.

use serde::{Deserialize, Serialize};

use super::body::{body_mass_index, BmiCategory};
use super::heart_rate::{estimate_max_heart_rate, heart_rate_percentage};
use super::types::{require_positive, MetricsError, WorkoutInput};
use super::zones::{classify_percentage, Color, IntensityZone, ZoneKind};

/// Qualitative feedback based on calories burned per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    Excellent,
    Good,
    Improvement,
}

/// Burn-rate thresholds (exclusive lower bounds) from high to low.
/// Anything not above the last rung is [`RecommendationTier::Improvement`].
pub const RECOMMENDATION_LADDER: [(f64, RecommendationTier); 2] = [
    (10.0, RecommendationTier::Excellent),
    (7.0, RecommendationTier::Good),
];

impl RecommendationTier {
    /// Pick the tier for a burn rate in kcal/min.
    pub fn from_rate(calories_per_minute: f64) -> Self {
        RECOMMENDATION_LADDER
            .iter()
            .find(|(threshold, _)| calories_per_minute > *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(RecommendationTier::Improvement)
    }

    pub fn title(&self) -> &'static str {
        match self {
            RecommendationTier::Excellent => "Excellent",
            RecommendationTier::Good => "Good",
            RecommendationTier::Improvement => "Improvement",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RecommendationTier::Excellent => "✅",
            RecommendationTier::Good => "👍",
            RecommendationTier::Improvement => "💡",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RecommendationTier::Excellent => {
                "High-intensity workout with optimal calorie burn rate."
            }
            RecommendationTier::Good => {
                "Moderate intensity - effective for endurance and fat burning."
            }
            RecommendationTier::Improvement => {
                "Consider increasing intensity to boost calorie expenditure."
            }
        }
    }

    /// Accent color for the recommendation card.
    pub fn color(&self) -> Color {
        match self {
            RecommendationTier::Excellent => Color::new(16, 185, 129),
            RecommendationTier::Good => Color::new(74, 144, 196),
            RecommendationTier::Improvement => Color::new(245, 158, 11),
        }
    }
}

impl std::fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Predicted calories together with the derived burn rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Total predicted calories
    pub calories_burned: f64,
    /// Calories per minute of exercise
    pub calories_per_minute: f64,
}

impl PredictionResult {
    pub fn new(calories_burned: f64, duration_min: f64) -> Result<Self, MetricsError> {
        let duration_min = require_positive("duration", duration_min)?;
        if !calories_burned.is_finite() || calories_burned < 0.0 {
            return Err(MetricsError::invalid(
                "prediction",
                format!("must be a non-negative number, got {}", calories_burned),
            ));
        }
        Ok(Self {
            calories_burned,
            calories_per_minute: calories_burned / duration_min,
        })
    }
}

/// Everything derived from one analysed workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub calories_burned: f64,
    pub calories_per_minute: f64,
    /// Max heart rate the percentage was computed against
    pub max_heart_rate: f64,
    /// Average heart rate as percent of max
    pub heart_rate_percentage: f64,
    pub zone: ZoneKind,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub recommendation: RecommendationTier,
}

impl EvaluationReport {
    /// Static metadata of the classified zone.
    pub fn zone_info(&self) -> &'static IntensityZone {
        self.zone.info()
    }
}

/// Stateless evaluator for predicted workouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutEvaluator;

impl WorkoutEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Derive burn rate, BMI, recommendation and intensity zone.
    pub fn evaluate(
        &self,
        prediction: f64,
        duration_min: f64,
        heart_rate: f64,
        max_heart_rate: f64,
        height_cm: f64,
        weight_kg: f64,
    ) -> Result<EvaluationReport, MetricsError> {
        let result = PredictionResult::new(prediction, duration_min)?;
        let bmi = body_mass_index(weight_kg, height_cm)?;
        let percentage = heart_rate_percentage(heart_rate, max_heart_rate)?;
        let zone = classify_percentage(percentage)?;

        Ok(EvaluationReport {
            calories_burned: result.calories_burned,
            calories_per_minute: result.calories_per_minute,
            max_heart_rate,
            heart_rate_percentage: percentage,
            zone: zone.kind,
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
            recommendation: RecommendationTier::from_rate(result.calories_per_minute),
        })
    }

    /// Evaluate a full form submission against a model prediction.
    pub fn evaluate_input(
        &self,
        input: &WorkoutInput,
        predicted_calories: f64,
    ) -> Result<EvaluationReport, MetricsError> {
        input.validate()?;
        let max_hr = estimate_max_heart_rate(input.age)?;

        let report = self.evaluate(
            predicted_calories,
            input.duration_min,
            input.heart_rate_bpm,
            max_hr as f64,
            input.height_cm,
            input.weight_kg,
        )?;

        tracing::debug!(
            calories = report.calories_burned,
            rate = report.calories_per_minute,
            zone = %report.zone,
            "Evaluated workout"
        );

        Ok(report)
    }
}

/// Evaluate a form submission with a predicted calorie count.
pub fn evaluate_workout(
    input: &WorkoutInput,
    predicted_calories: f64,
) -> Result<EvaluationReport, MetricsError> {
    WorkoutEvaluator::new().evaluate_input(input, predicted_calories)
}
