//! Age-predicted maximum heart rate.
//!
//! Uses the classic `220 - age` estimate.

use super::types::{require_positive, MetricsError};

/// Ceiling of the `220 - age` formula.
pub const MAX_HR_CEILING: u32 = 220;

/// Estimate maximum heart rate in bpm from age in years.
///
/// Ages of zero or at/above the ceiling would yield a degenerate estimate and
/// are rejected.
pub fn estimate_max_heart_rate(age: u32) -> Result<u32, MetricsError> {
    if age == 0 {
        return Err(MetricsError::invalid("age", "must be greater than zero"));
    }
    if age >= MAX_HR_CEILING {
        return Err(MetricsError::invalid(
            "age",
            format!("must be below {}, got {}", MAX_HR_CEILING, age),
        ));
    }
    Ok(MAX_HR_CEILING - age)
}

/// Heart rate as a percentage of maximum heart rate.
pub fn heart_rate_percentage(heart_rate: f64, max_heart_rate: f64) -> Result<f64, MetricsError> {
    require_positive("max heart rate", max_heart_rate)?;
    if !heart_rate.is_finite() || heart_rate < 0.0 {
        return Err(MetricsError::invalid(
            "heart rate",
            format!("must be a non-negative number, got {}", heart_rate),
        ));
    }
    Ok(heart_rate / max_heart_rate * 100.0)
}
