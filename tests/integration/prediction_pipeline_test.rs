//! End-to-end tests: shipped artifacts -> prediction -> evaluation report.

use std::path::PathBuf;

use calorie_burn::metrics::{BmiCategory, Gender, RecommendationTier, WorkoutInput, ZoneKind};
use calorie_burn::ml::{
    analyze_workout, load_holdout, load_model, predict_calories, score_predictor, CaloriePredictor,
    MlError, ModelBundle,
};
use calorie_burn::ui::screens::{AnalysisOutcome, AnalysisScreen};

fn assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn shipped_bundle() -> ModelBundle {
    let assets = assets();
    ModelBundle::load(
        &assets.join("calories_model.json"),
        &assets.join("metrics.json"),
    )
    .unwrap()
}

#[test]
fn test_default_input_through_shipped_model() {
    let bundle = shipped_bundle();
    assert_eq!(bundle.model_name(), "Random Forest Regressor");

    let report = analyze_workout(bundle.predictor.as_ref(), &WorkoutInput::default()).unwrap();

    assert!((report.calories_burned - 346.23264).abs() < 1e-6);
    assert!((report.calories_per_minute - 11.541088).abs() < 1e-6);
    assert_eq!(report.recommendation, RecommendationTier::Excellent);
    assert_eq!(report.max_heart_rate, 195.0);
    // 120 / 195 = 61.5%
    assert_eq!(report.zone, ZoneKind::Zone2);
    assert_eq!(report.bmi_category, BmiCategory::Normal);
}

#[test]
fn test_longer_harder_session_burns_more() {
    let bundle = shipped_bundle();
    let input = WorkoutInput {
        gender: Gender::Female,
        age: 30,
        height_cm: 165.0,
        weight_kg: 60.0,
        duration_min: 60.0,
        heart_rate_bpm: 175.0,
        body_temp_c: 40.0,
    };

    let baseline = analyze_workout(bundle.predictor.as_ref(), &WorkoutInput::default()).unwrap();
    let report = analyze_workout(bundle.predictor.as_ref(), &input).unwrap();

    assert!(report.calories_burned > baseline.calories_burned);
    // 175 / 190 = 92.1%
    assert_eq!(report.zone, ZoneKind::Zone5);
    assert_eq!(
        report.recommendation,
        RecommendationTier::from_rate(report.calories_per_minute)
    );
}

#[test]
fn test_invalid_input_never_reaches_model() {
    let bundle = shipped_bundle();
    let input = WorkoutInput {
        duration_min: 0.0,
        ..WorkoutInput::default()
    };

    let result = predict_calories(bundle.predictor.as_ref(), &input);
    assert!(matches!(result, Err(MlError::InvalidInput(_))));
}

#[test]
fn test_analysis_screen_keeps_last_report() {
    let bundle = shipped_bundle();
    let mut screen = AnalysisScreen::new();
    assert!(screen.last_report().is_none());

    let outcome = screen.analyze(bundle.predictor.as_ref());
    assert!(matches!(outcome, AnalysisOutcome::Completed { .. }));
    assert!(screen.last_report().is_some());

    screen.input.age = 0;
    let outcome = screen.analyze(bundle.predictor.as_ref());
    assert!(matches!(outcome, AnalysisOutcome::Failed(_)));
    assert!(screen.last_report().is_none());
}

#[test]
fn test_predictor_is_deterministic() {
    let bundle = shipped_bundle();
    let input = WorkoutInput::default();
    let first = bundle.predictor.predict(&input).unwrap();
    let second = bundle.predictor.predict(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shipped_model_is_a_forest() {
    let model = load_model(&assets().join("calories_model.json")).unwrap();
    assert_eq!(model.tree_count(), Some(10));
}

#[test]
fn test_shipped_metrics_reproduce_on_holdout() {
    let bundle = shipped_bundle();
    let samples = load_holdout(&assets().join("holdout.json")).unwrap();
    let measured = score_predictor(bundle.predictor.as_ref(), &samples).unwrap();

    let reported = bundle.metrics;
    assert_eq!(reported.samples, Some(samples.len()));
    assert!(reported.synthetic_data);
    assert!((measured.r2 - reported.r2).abs() < 1e-5, "r2 {} vs {}", measured.r2, reported.r2);
    assert!(
        (measured.mean_absolute_error - reported.mean_absolute_error).abs() < 1e-5,
        "mae {} vs {}",
        measured.mean_absolute_error,
        reported.mean_absolute_error
    );
}
