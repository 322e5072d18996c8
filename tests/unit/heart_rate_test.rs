//! Unit tests for max heart rate estimation.

use calorie_burn::metrics::heart_rate::{estimate_max_heart_rate, heart_rate_percentage};

#[test]
fn test_max_heart_rate_by_age() {
    assert_eq!(estimate_max_heart_rate(25).unwrap(), 195);
    assert_eq!(estimate_max_heart_rate(40).unwrap(), 180);
    assert_eq!(estimate_max_heart_rate(100).unwrap(), 120);
}

#[test]
fn test_max_heart_rate_rejects_degenerate_ages() {
    assert!(estimate_max_heart_rate(0).is_err());
    assert!(estimate_max_heart_rate(220).is_err());
    assert!(estimate_max_heart_rate(300).is_err());
}

#[test]
fn test_percentage_of_max() {
    let pct = heart_rate_percentage(150.0, 200.0).unwrap();
    assert!((pct - 75.0).abs() < 1e-9);

    assert!(heart_rate_percentage(150.0, 0.0).is_err());
    assert!(heart_rate_percentage(-1.0, 190.0).is_err());
}
