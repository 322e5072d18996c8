//! Calorie predictor interface.

use crate::metrics::{evaluate_workout, EvaluationReport, WorkoutInput};

use super::types::MlError;

/// Anything that can turn workout inputs into a calorie estimate.
///
/// Implementations must be deterministic for a fixed input. They are shared
/// read-only across the UI, hence `Send + Sync`.
pub trait CaloriePredictor: Send + Sync {
    /// Predict total calories burned for the workout.
    fn predict(&self, input: &WorkoutInput) -> Result<f64, MlError>;

    /// Short model name for display (e.g. "Random Forest Regressor").
    fn name(&self) -> &str;
}

/// Validate the input, run the predictor and check the output is a usable
/// calorie count.
pub fn predict_calories(
    predictor: &dyn CaloriePredictor,
    input: &WorkoutInput,
) -> Result<f64, MlError> {
    input.validate()?;

    let calories = predictor.predict(input)?;
    if !calories.is_finite() || calories < 0.0 {
        tracing::warn!(model = predictor.name(), calories, "Predictor returned unusable value");
        return Err(MlError::InvalidPrediction(calories));
    }

    Ok(calories)
}

/// Predict calories for the input and evaluate the workout against them.
pub fn analyze_workout(
    predictor: &dyn CaloriePredictor,
    input: &WorkoutInput,
) -> Result<EvaluationReport, MlError> {
    let calories = predict_calories(predictor, input)?;
    let report = evaluate_workout(input, calories)?;

    tracing::info!(
        model = predictor.name(),
        calories = report.calories_burned,
        recommendation = %report.recommendation,
        "Workout analysed"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl CaloriePredictor for Fixed {
        fn predict(&self, _input: &WorkoutInput) -> Result<f64, MlError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_predict_calories_passes_through() {
        let calories = predict_calories(&Fixed(123.0), &WorkoutInput::default()).unwrap();
        assert_eq!(calories, 123.0);
    }

    #[test]
    fn test_predict_calories_rejects_bad_output() {
        let input = WorkoutInput::default();
        assert!(matches!(
            predict_calories(&Fixed(-1.0), &input),
            Err(MlError::InvalidPrediction(_))
        ));
        assert!(predict_calories(&Fixed(f64::NAN), &input).is_err());
    }

    #[test]
    fn test_predict_calories_rejects_invalid_input() {
        let input = WorkoutInput {
            duration_min: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            predict_calories(&Fixed(10.0), &input),
            Err(MlError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_analyze_workout() {
        let report = analyze_workout(&Fixed(330.0), &WorkoutInput::default()).unwrap();
        assert!((report.calories_per_minute - 11.0).abs() < 1e-12);
        assert_eq!(report.recommendation.title(), "Excellent");
    }
}
