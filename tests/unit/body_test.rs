//! Unit tests for BMI.

use calorie_burn::metrics::body::{body_mass_index, BmiCategory};

#[test]
fn test_bmi_value() {
    let bmi = body_mass_index(70.0, 170.0).unwrap();
    assert!((bmi - 24.221_453).abs() < 1e-5);
}

#[test]
fn test_bmi_categories() {
    assert_eq!(BmiCategory::from_bmi(17.0), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.95), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(31.0), BmiCategory::Overweight);
}

#[test]
fn test_bmi_rejects_non_positive() {
    assert!(body_mass_index(0.0, 170.0).is_err());
    assert!(body_mass_index(70.0, 0.0).is_err());
}
