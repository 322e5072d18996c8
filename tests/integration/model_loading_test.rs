//! Integration tests for loading model and metrics artifacts from disk.

use std::fs;
use std::path::Path;

use calorie_burn::metrics::WorkoutInput;
use calorie_burn::ml::{load_metrics, load_model, CaloriePredictor, MlError, ModelBundle};
use tempfile::TempDir;

const FOREST_JSON: &str = r#"{
    "model_type": "random_forest",
    "description": "Random Forest Regressor",
    "trees": [
        { "nodes": [
            { "kind": "split", "feature": 4, "threshold": 20.0, "left": 1, "right": 2 },
            { "kind": "leaf", "value": 80.0 },
            { "kind": "leaf", "value": 240.0 }
        ] },
        { "nodes": [
            { "kind": "split", "feature": 5, "threshold": 110.0, "left": 1, "right": 2 },
            { "kind": "leaf", "value": 100.0 },
            { "kind": "leaf", "value": 200.0 }
        ] }
    ]
}"#;

const METRICS_JSON: &str = r#"{ "r2": 0.9943, "mae": 2.24 }"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_forest_bundle() {
    let dir = TempDir::new().unwrap();
    let model_path = write(&dir, "model.json", FOREST_JSON);
    let metrics_path = write(&dir, "metrics.json", METRICS_JSON);

    let bundle = ModelBundle::load(&model_path, &metrics_path).unwrap();
    assert_eq!(bundle.model_name(), "Random Forest Regressor");
    assert!((bundle.metrics.accuracy_percent() - 99.43).abs() < 1e-9);

    // duration 30 > 20 -> 240, heart rate 120 > 110 -> 200
    let calories = bundle.predictor.predict(&WorkoutInput::default()).unwrap();
    assert!((calories - 220.0).abs() < 1e-9);
}

#[test]
fn test_forest_tree_count() {
    let dir = TempDir::new().unwrap();
    let model_path = write(&dir, "model.json", FOREST_JSON);

    let model = load_model(&model_path).unwrap();
    assert_eq!(model.tree_count(), Some(2));
}

#[test]
fn test_missing_model_is_error() {
    let dir = TempDir::new().unwrap();
    let metrics_path = write(&dir, "metrics.json", METRICS_JSON);

    let result = ModelBundle::load(&dir.path().join("absent.json"), &metrics_path);
    assert!(matches!(result, Err(MlError::Io { .. })));
}

#[test]
fn test_malformed_model_is_error() {
    let dir = TempDir::new().unwrap();
    let model_path = write(&dir, "model.json", "{ not json");

    assert!(load_model(&model_path).is_err());
}

#[test]
fn test_model_with_wrong_coefficient_count_is_rejected() {
    let dir = TempDir::new().unwrap();
    let model_path = write(
        &dir,
        "model.json",
        r#"{ "model_type": "linear", "intercept": 1.0, "coefficients": [1.0, 2.0] }"#,
    );

    assert!(matches!(load_model(&model_path), Err(MlError::InvalidModel(_))));
}

#[test]
fn test_metrics_out_of_range_are_rejected() {
    let dir = TempDir::new().unwrap();
    let metrics_path = write(&dir, "metrics.json", r#"{ "r2": 1.5, "mae": 2.0 }"#);

    assert!(load_metrics(&metrics_path).is_err());
    assert!(load_metrics(Path::new("/nonexistent/metrics.json")).is_err());
}
