//! Unit tests for workout evaluation.

use calorie_burn::metrics::{
    evaluate_workout, BmiCategory, RecommendationTier, WorkoutEvaluator, WorkoutInput, ZoneKind,
};

#[test]
fn test_reference_workout() {
    let report = WorkoutEvaluator::new()
        .evaluate(300.0, 30.0, 140.0, 195.0, 170.0, 70.0)
        .unwrap();

    assert!((report.calories_per_minute - 10.0).abs() < 1e-9);
    // Exactly 10 cal/min is not above the excellent threshold
    assert_eq!(report.recommendation, RecommendationTier::Good);
    assert_eq!(report.bmi_category, BmiCategory::Normal);
    assert_eq!(report.zone, ZoneKind::Zone3);
}

#[test]
fn test_recommendation_thresholds() {
    assert_eq!(RecommendationTier::from_rate(10.01), RecommendationTier::Excellent);
    assert_eq!(RecommendationTier::from_rate(10.0), RecommendationTier::Good);
    assert_eq!(RecommendationTier::from_rate(7.01), RecommendationTier::Good);
    assert_eq!(RecommendationTier::from_rate(7.0), RecommendationTier::Improvement);
    assert_eq!(RecommendationTier::from_rate(0.0), RecommendationTier::Improvement);
}

#[test]
fn test_evaluate_input_uses_age_for_max_hr() {
    let input = WorkoutInput {
        age: 40,
        heart_rate_bpm: 162.0,
        duration_min: 45.0,
        ..WorkoutInput::default()
    };

    let report = evaluate_workout(&input, 540.0).unwrap();
    assert_eq!(report.max_heart_rate, 180.0);
    assert!((report.heart_rate_percentage - 90.0).abs() < 1e-9);
    assert_eq!(report.zone, ZoneKind::Zone5);
    assert!((report.calories_per_minute - 12.0).abs() < 1e-9);
    assert_eq!(report.recommendation, RecommendationTier::Excellent);
}

#[test]
fn test_evaluate_rejects_zero_duration() {
    let evaluator = WorkoutEvaluator::new();
    assert!(evaluator.evaluate(300.0, 0.0, 140.0, 195.0, 170.0, 70.0).is_err());
}

#[test]
fn test_zero_calories_is_valid() {
    let report = WorkoutEvaluator::new()
        .evaluate(0.0, 10.0, 60.0, 195.0, 170.0, 70.0)
        .unwrap();
    assert_eq!(report.calories_per_minute, 0.0);
    assert_eq!(report.recommendation, RecommendationTier::Improvement);
    assert_eq!(report.zone, ZoneKind::Rest);
}

#[test]
fn test_evaluate_is_repeatable() {
    let evaluator = WorkoutEvaluator::new();
    let first = evaluator.evaluate(300.0, 30.0, 140.0, 195.0, 170.0, 70.0).unwrap();
    let second = evaluator.evaluate(300.0, 30.0, 140.0, 195.0, 170.0, 70.0).unwrap();
    assert_eq!(first, second);

    let input = WorkoutInput::default();
    assert_eq!(
        evaluate_workout(&input, 250.0).unwrap(),
        evaluate_workout(&input, 250.0).unwrap()
    );
}
